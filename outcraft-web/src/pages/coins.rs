use super::ProductPageProps;
use crate::components::product_grid::ProductGrid;
use crate::i18n::t;
use yew::prelude::*;

#[function_component(CoinsPage)]
pub fn coins_page(props: &ProductPageProps) -> Html {
    html! {
        <section class="page page-coins" aria-labelledby="coins-title">
            <header class="page-header">
                <h2 id="coins-title">{ t("coins.title") }</h2>
                <p class="page-subtitle">{ t("coins.subtitle") }</p>
            </header>
            <ProductGrid items={props.items.clone()} on_buy={props.on_buy.clone()} />
        </section>
    }
}
