use crate::i18n::t;
use yew::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <section class="page page-about" aria-labelledby="about-title">
            <h2 id="about-title">{ t("about.title") }</h2>
            <div class="panel">
                <h3>{ t("about.welcome") }</h3>
                <p>{ t("about.intro") }</p>
                <p>{ t("about.help") }</p>
                <p class="about-cta">{ t("about.cta") }</p>
            </div>
        </section>
    }
}
