use crate::components::icons::CategoryIcon;
use crate::i18n::t;
use outcraft_core::Item;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub item: Item,
    /// Receives the item id.
    pub on_buy: Callback<String>,
}

#[function_component(ProductCard)]
pub fn product_card(p: &Props) -> Html {
    let item = &p.item;
    let onclick = {
        let cb = p.on_buy.clone();
        let id = item.id.clone();
        Callback::from(move |_| cb.emit(id.clone()))
    };
    let label = if item.coming_soon {
        t("product.coming_soon")
    } else {
        t("product.buy")
    };

    html! {
        <article
            class={classes!("product-card", item.popular.then_some("product-card--popular"))}
            data-item={item.id.clone()}
        >
            <div class="product-card__head">
                <span class="product-card__icon"><CategoryIcon category={item.category} /></span>
                <div>
                    <h3 class="product-card__name">{ item.name.clone() }</h3>
                    <span class="product-card__category">{ t(&format!("category.{}", item.category.key())) }</span>
                </div>
                <div class="product-card__badges">
                    if item.popular {
                        <span class="badge badge--popular">{ t("product.most_wanted") }</span>
                    }
                    if item.coming_soon {
                        <span class="badge badge--soon">{ t("product.coming_soon_badge") }</span>
                    }
                </div>
            </div>
            <p class="product-card__price">{ item.price.clone() }</p>
            <button
                type="button"
                class="product-card__buy"
                disabled={item.coming_soon}
                {onclick}
            >
                { label }
            </button>
        </article>
    }
}
