use crate::i18n::t;
use outcraft_core::{NAVIGATION, Section};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub selected: Section,
    /// Selecting also closes the menu.
    pub on_select: Callback<Section>,
}

#[function_component(MobileNav)]
pub fn mobile_nav(p: &Props) -> Html {
    if !p.open {
        return Html::default();
    }
    let links = NAVIGATION.iter().map(|&section| {
        let onclick = {
            let cb = p.on_select.clone();
            Callback::from(move |_| cb.emit(section))
        };
        let active = section == p.selected;
        html! {
            <li key={section.id()}>
                <button
                    type="button"
                    class={classes!("mobile-nav__btn", active.then_some("mobile-nav__btn--active"))}
                    aria-current={active.then_some("page")}
                    {onclick}
                >
                    { t(section.label_key()) }
                </button>
            </li>
        }
    });
    html! {
        <div id="mobile-nav" class="mobile-nav">
            <ul>{ for links }</ul>
        </div>
    }
}
