#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

use outcraft_web::app::App;
use outcraft_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        let _ = root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    outcraft_web::i18n::set_lang("en");
    // Every test starts on the home section.
    let _ = dom::window().expect("window").location().set_hash("");
    Renderer::<App>::with_root(ensure_app_root()).render();
}

/// Let the scheduler flush pending renders and effects.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        dom::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 10)
            .expect("schedule timeout");
    });
    JsFuture::from(promise).await.expect("timeout resolves");
}

fn click(selector: &str) {
    let el: HtmlElement = dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("query")
        .unwrap_or_else(|| panic!("{selector} exists"))
        .dyn_into()
        .expect("cast to element");
    el.click();
}

fn exists(selector: &str) -> bool {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("query")
        .is_some()
}

#[wasm_bindgen_test]
async fn skip_link_points_to_main_landmark() {
    render_app();
    settle().await;
    let doc = dom::document().expect("document");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    assert!(exists("a[href='#main']"));
    assert!(doc.get_element_by_id("site-status").is_some());
}

#[wasm_bindgen_test]
async fn nav_click_switches_section_and_route() {
    render_app();
    settle().await;
    assert!(exists(".page-home"));
    assert_eq!(
        dom::document()
            .expect("document")
            .query_selector_all("[data-nav-section]")
            .expect("query nav")
            .length(),
        5
    );

    click("[data-nav-section='coins']");
    settle().await;
    assert!(exists(".page-coins"));
    assert!(!exists(".page-home"));
    let hash = dom::window().expect("window").location().hash().expect("hash");
    assert_eq!(hash, "#/coins");

    click("[data-nav-section='home']");
    settle().await;
    assert!(exists(".page-home"));
}

#[wasm_bindgen_test]
async fn unknown_path_redirects_home() {
    render_app();
    settle().await;
    click("[data-nav-section='vip']");
    settle().await;
    assert!(exists(".page-vip"));

    let location = dom::window().expect("window").location();
    location.set_hash("#/no-such-page").expect("set hash");
    settle().await;
    settle().await;
    assert!(exists(".page-home"));
    assert!(!exists(".page-vip"));
    assert_eq!(location.hash().expect("hash"), "#/");
}

#[wasm_bindgen_test]
async fn indicator_tracks_the_active_button() {
    render_app();
    settle().await;
    click("[data-nav-section='about']");
    settle().await;
    let indicator: HtmlElement = dom::document()
        .expect("document")
        .query_selector(".nav-indicator")
        .expect("query")
        .expect("indicator exists")
        .dyn_into()
        .expect("cast");
    let style = indicator.get_attribute("style").unwrap_or_default();
    assert!(style.contains("opacity:1"), "indicator visible: {style}");
    assert!(!style.contains("width:0px"), "indicator measured: {style}");
}

#[wasm_bindgen_test]
async fn mobile_menu_toggles_and_closes_on_select() {
    render_app();
    settle().await;
    assert!(!exists("#mobile-nav"));
    click(".nav-toggle");
    settle().await;
    assert!(exists("#mobile-nav"));
    click("#mobile-nav li:nth-child(2) button");
    settle().await;
    assert!(!exists("#mobile-nav"));
    assert!(exists(".page-vip"));
}

#[wasm_bindgen_test]
async fn buying_without_a_store_shows_the_notice() {
    if outcraft_web::config::build_env()
        .iter()
        .any(|(key, _)| *key == "OUTCRAFT_TEBEX_STORE_URL")
    {
        // A configured build would navigate away from the test page.
        return;
    }
    render_app();
    settle().await;
    click("[data-nav-section='vip']");
    settle().await;
    click(".page-vip .product-card__buy");
    settle().await;
    assert!(exists(".modal"));
    click(".modal__action");
    settle().await;
    assert!(!exists(".modal"));
}
