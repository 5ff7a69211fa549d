use super::ProductPageProps;
use crate::components::product_grid::ProductGrid;
use crate::i18n::t;
use yew::prelude::*;

#[function_component(RanksPage)]
pub fn ranks_page(props: &ProductPageProps) -> Html {
    html! {
        <section class="page page-ranks" aria-labelledby="ranks-title">
            <header class="page-header">
                <h2 id="ranks-title">{ t("ranks.title") }</h2>
                <p class="page-subtitle">{ t("ranks.subtitle") }</p>
            </header>
            <ProductGrid items={props.items.clone()} on_buy={props.on_buy.clone()} />
        </section>
    }
}
