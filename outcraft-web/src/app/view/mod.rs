mod handlers;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::mobile_nav::MobileNav;
use crate::components::modal::Modal;
use crate::components::nav::Nav;
use crate::i18n::t;
use crate::pages::{AboutPage, CoinsPage, HomePage, RanksPage, VipPage};
use outcraft_core::{Category, PurchaseRedirector, Section};
use yew::prelude::*;

/// Main content for `section`, with the catalog subset that section lists.
pub fn render_section(
    section: Section,
    storefront: &PurchaseRedirector,
    on_buy: &Callback<String>,
) -> Html {
    let catalog = storefront.catalog();
    let listed = |category| catalog.purchasable_in(category).cloned().collect::<Vec<_>>();
    let on_buy = on_buy.clone();
    match section {
        Section::Home => {
            let items = catalog.featured().into_iter().cloned().collect::<Vec<_>>();
            html! { <HomePage {items} {on_buy} /> }
        }
        Section::Vip => html! { <VipPage items={listed(Category::Vip)} {on_buy} /> },
        Section::Ranks => html! { <RanksPage items={listed(Category::Ranks)} {on_buy} /> },
        Section::Coins => html! { <CoinsPage items={listed(Category::Coins)} {on_buy} /> },
        Section::About => html! { <AboutPage /> },
    }
}

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let view = &*state.view;
    let main_view = render_section(view.selected, &state.storefront, &handlers.buy);

    let toggle_menu = handlers.toggle_menu.clone();
    let dismiss = handlers.dismiss_notice.clone();

    html! {
        <>
            <style>{ crate::a11y::visible_focus_css() }</style>
            <Header
                status={(*state.status).clone()}
                copied={view.copied_feedback}
                on_copy={handlers.copy_address.clone()}
                on_open_invite={handlers.open_invite.clone()}
            />
            <Nav
                nav_ref={state.nav_ref.clone()}
                selected={view.selected}
                indicator={view.indicator}
                menu_open={view.mobile_menu_open}
                on_select={handlers.select_section.clone()}
                on_toggle_menu={toggle_menu}
            />
            <MobileNav
                open={view.mobile_menu_open}
                selected={view.selected}
                on_select={handlers.mobile_select.clone()}
            />
            <main id="main" role="main">
                { main_view }
            </main>
            <Modal
                open={state.notice.is_some()}
                title={AttrValue::from(t("notice.title"))}
                description={(*state.notice).clone()}
                on_close={dismiss.clone()}
            >
                <button type="button" class="modal__action" onclick={move |_| dismiss.emit(())}>
                    { t("notice.dismiss") }
                </button>
            </Modal>
            <Footer on_open_invite={handlers.open_invite.clone()} />
            <div id="site-status" class="sr-only" role="status" aria-live="polite"></div>
        </>
    }
}
