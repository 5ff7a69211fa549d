use super::ProductPageProps;
use crate::components::product_grid::ProductGrid;
use crate::i18n::t;
use yew::prelude::*;

const BENEFITS: [(&str, &str); 3] = [
    ("vip.priority_title", "vip.priority_body"),
    ("vip.tag_title", "vip.tag_body"),
    ("vip.role_title", "vip.role_body"),
];

const STEPS: [&str; 3] = ["vip.how_1", "vip.how_2", "vip.how_3"];

#[function_component(VipPage)]
pub fn vip_page(props: &ProductPageProps) -> Html {
    html! {
        <section class="page page-vip" aria-labelledby="vip-title">
            <header class="page-header">
                <h2 id="vip-title">{ t("vip.title") }</h2>
                <p class="page-subtitle">{ t("vip.subtitle") }</p>
            </header>
            <div class="panel">
                <h3>{ t("vip.benefits_title") }</h3>
                <ul class="benefits">
                    { for BENEFITS.iter().map(|(title, body)| html! {
                        <li key={*title}>
                            <h4>{ t(title) }</h4>
                            <p>{ t(body) }</p>
                        </li>
                    }) }
                </ul>
            </div>
            <ProductGrid items={props.items.clone()} on_buy={props.on_buy.clone()} />
            <div class="panel how-it-works">
                <h3>{ t("vip.how_title") }</h3>
                { for STEPS.iter().map(|step| html! { <p key={*step}>{ t(step) }</p> }) }
            </div>
        </section>
    }
}
