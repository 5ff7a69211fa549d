use crate::components::product_card::ProductCard;
use outcraft_core::Item;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub items: Vec<Item>,
    pub on_buy: Callback<String>,
}

#[function_component(ProductGrid)]
pub fn product_grid(p: &Props) -> Html {
    html! {
        <div class="product-grid">
            { for p.items.iter().map(|item| html! {
                <ProductCard key={item.id.clone()} item={item.clone()} on_buy={p.on_buy.clone()} />
            }) }
        </div>
    }
}
