use super::ProductPageProps;
use crate::components::product_grid::ProductGrid;
use crate::i18n::t;
use yew::prelude::*;

/// Landing page; `items` holds the featured selection.
#[function_component(HomePage)]
pub fn home_page(props: &ProductPageProps) -> Html {
    html! {
        <section class="page page-home" aria-labelledby="home-about-title">
            <div class="panel about-us">
                <img class="about-us__logo" src={crate::paths::logo_src()} alt={t("ui.logo_alt")} />
                <h2 id="home-about-title">{ t("home.about_title") }</h2>
                <p>{ t("home.about_body") }</p>
            </div>
            <h2 class="section-title">{ t("home.featured") }</h2>
            <ProductGrid items={props.items.clone()} on_buy={props.on_buy.clone()} />
        </section>
    }
}
