use crate::components::icons::MenuIcon;
use crate::i18n::t;
use outcraft_core::{IndicatorGeometry, NAVIGATION, Section};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Container measured for the sliding indicator.
    pub nav_ref: NodeRef,
    pub selected: Section,
    pub indicator: IndicatorGeometry,
    pub menu_open: bool,
    pub on_select: Callback<Section>,
    pub on_toggle_menu: Callback<()>,
}

/// Inline style placing the highlight under the active button.
#[must_use]
pub fn indicator_style(indicator: IndicatorGeometry) -> String {
    format!(
        "left:{}px;width:{}px;opacity:{}",
        indicator.offset,
        indicator.width,
        u8::from(indicator.visible)
    )
}

#[function_component(Nav)]
pub fn nav(p: &Props) -> Html {
    let buttons = NAVIGATION.iter().map(|&section| {
        let active = section == p.selected;
        let onclick = {
            let cb = p.on_select.clone();
            Callback::from(move |_| cb.emit(section))
        };
        html! {
            <button
                type="button"
                key={section.id()}
                class={classes!("nav-btn", active.then_some("nav-btn--active"))}
                data-nav-section={section.id()}
                aria-current={active.then_some("page")}
                {onclick}
            >
                { t(section.label_key()) }
            </button>
        }
    });

    let toggle = {
        let cb = p.on_toggle_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_label = if p.menu_open {
        t("nav.menu_close")
    } else {
        t("nav.menu_open")
    };

    html! {
        <nav class="site-nav" aria-label={t("nav.label")}>
            <div class="nav-desktop" ref={p.nav_ref.clone()}>
                <div class="nav-indicator" aria-hidden="true" style={indicator_style(p.indicator)}></div>
                { for buttons }
            </div>
            <button
                type="button"
                class="nav-toggle"
                aria-label={toggle_label}
                aria-expanded={p.menu_open.to_string()}
                aria-controls="mobile-nav"
                onclick={toggle}
            >
                <MenuIcon open={p.menu_open} />
            </button>
        </nav>
    }
}
