//! DOM measurement for the navigation indicator.
use crate::app::state::ViewStore;
use gloo::events::EventListener;
use outcraft_core::{ControlRect, LayoutSnapshot, Section, ViewAction};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Attribute carrying the section id on each desktop nav button.
pub const NAV_SECTION_ATTR: &str = "data-nav-section";

/// Measure the nav container and its section buttons.
#[must_use]
pub fn measure(nav: &HtmlElement) -> LayoutSnapshot {
    let container_width = f64::from(nav.offset_width());
    let Ok(nodes) = nav.query_selector_all(&format!("[{NAV_SECTION_ATTR}]")) else {
        return LayoutSnapshot::unmeasured();
    };
    let controls = (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .filter_map(|button| {
            let section = Section::from_id(&button.get_attribute(NAV_SECTION_ATTR)?)?;
            Some(ControlRect {
                section,
                offset: f64::from(button.offset_left()),
                width: f64::from(button.offset_width()),
            })
        })
        .collect();
    LayoutSnapshot {
        container_width,
        controls,
    }
}

fn snapshot(nav_ref: &NodeRef) -> LayoutSnapshot {
    nav_ref
        .cast::<HtmlElement>()
        .map_or_else(LayoutSnapshot::unmeasured, |nav| measure(&nav))
}

/// Re-measure the indicator after each section change and on window resize.
#[hook]
pub fn use_nav_indicator(
    nav_ref: NodeRef,
    selected: Section,
    dispatcher: UseReducerDispatcher<ViewStore>,
) {
    use_effect_with(selected, move |_| {
        let remeasure = move || dispatcher.dispatch(ViewAction::LayoutChanged(snapshot(&nav_ref)));
        remeasure();
        let listener = crate::dom::window()
            .map(|win| EventListener::new(&win, "resize", move |_| remeasure()));
        move || drop(listener)
    });
}
