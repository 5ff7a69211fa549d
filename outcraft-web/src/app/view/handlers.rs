use crate::app::state::AppState;
use crate::dom::{self, BrowserNavigator};
use gloo::timers::callback::Timeout;
use outcraft_core::constants::{COPIED_FEEDBACK_MS, DISCORD_INVITE, SERVER_ADDRESS};
use outcraft_core::{PurchaseOutcome, Section, ViewAction};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppHandlers {
    pub select_section: Callback<Section>,
    pub mobile_select: Callback<Section>,
    pub toggle_menu: Callback<()>,
    pub buy: Callback<String>,
    pub copy_address: Callback<()>,
    pub open_invite: Callback<()>,
    pub dismiss_notice: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            select_section: build_select_section(state),
            mobile_select: build_mobile_select(state),
            toggle_menu: build_toggle_menu(state),
            buy: build_buy(state),
            copy_address: build_copy_address(state),
            open_invite: Callback::from(|()| dom::open_new_tab(DISCORD_INVITE)),
            dismiss_notice: build_dismiss_notice(state),
        }
    }
}

fn build_select_section(state: &AppState) -> Callback<Section> {
    let dispatcher = state.view.dispatcher();
    Callback::from(move |section: Section| {
        dispatcher.dispatch(ViewAction::SelectSection(section.id().to_string()));
    })
}

fn build_mobile_select(state: &AppState) -> Callback<Section> {
    let dispatcher = state.view.dispatcher();
    Callback::from(move |section: Section| {
        dispatcher.dispatch(ViewAction::SelectSection(section.id().to_string()));
        dispatcher.dispatch(ViewAction::CloseMobileMenu);
    })
}

fn build_toggle_menu(state: &AppState) -> Callback<()> {
    let dispatcher = state.view.dispatcher();
    Callback::from(move |()| dispatcher.dispatch(ViewAction::ToggleMobileMenu))
}

fn build_buy(state: &AppState) -> Callback<String> {
    let storefront = state.storefront.clone();
    let notice = state.notice.clone();
    Callback::from(move |item_id: String| {
        match storefront.buy(&item_id, &BrowserNavigator) {
            Ok(PurchaseOutcome::Navigated(_) | PurchaseOutcome::Ignored(_)) => {}
            Err(err) => {
                log::warn!("purchase of {item_id} blocked: {err}");
                notice.set(Some(AttrValue::from(err.to_string())));
            }
        }
    })
}

fn build_copy_address(state: &AppState) -> Callback<()> {
    let dispatcher = state.view.dispatcher();
    let copied_reset = state.copied_reset.clone();
    Callback::from(move |()| {
        let dispatcher = dispatcher.clone();
        let copied_reset = copied_reset.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = crate::clipboard::copy_text(SERVER_ADDRESS).await {
                log::debug!("copying the server address failed: {err}");
                return;
            }
            dispatcher.dispatch(ViewAction::SetCopied(true));
            crate::a11y::set_status(&crate::i18n::t("status.announce_copied"));
            let reset = Timeout::new(COPIED_FEEDBACK_MS, move || {
                dispatcher.dispatch(ViewAction::SetCopied(false));
            });
            // Dropping a pending reset cancels it; repeat clicks restart the window.
            *copied_reset.borrow_mut() = Some(reset);
        });
    })
}

fn build_dismiss_notice(state: &AppState) -> Callback<()> {
    let notice = state.notice.clone();
    Callback::from(move |()| notice.set(None))
}
