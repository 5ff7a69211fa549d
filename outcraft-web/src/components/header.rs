use crate::components::icons::{DiscordIcon, ServerIcon};
use crate::i18n::{t, tn};
use outcraft_core::constants::SERVER_ADDRESS;
use outcraft_core::{ServerStatus, StatusDisplay};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Latest accepted poll result; `None` until the first one lands.
    pub status: Option<ServerStatus>,
    pub copied: bool,
    pub on_copy: Callback<()>,
    pub on_open_invite: Callback<()>,
}

/// Address line; briefly replaced by the copy confirmation.
#[must_use]
pub fn address_label(copied: bool) -> String {
    if copied {
        t("status.copied")
    } else {
        SERVER_ADDRESS.to_owned()
    }
}

/// Text for the status line under the server address.
#[must_use]
pub fn status_label(status: Option<&ServerStatus>) -> String {
    match StatusDisplay::from_status(status) {
        StatusDisplay::Loading => t("status.loading"),
        StatusDisplay::Online { players } => tn("status.players_online", players),
        StatusDisplay::Offline => t("status.offline"),
    }
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let display = StatusDisplay::from_status(p.status.as_ref());
    let dot_class = match display {
        StatusDisplay::Loading => "status-dot status-dot--loading",
        StatusDisplay::Online { .. } => "status-dot status-dot--online",
        StatusDisplay::Offline => "status-dot status-dot--offline",
    };

    let copy_click = {
        let cb = p.on_copy.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let copy_key = {
        let cb = p.on_copy.clone();
        Callback::from(move |e: KeyboardEvent| {
            if crate::a11y::is_activation_key(&e.key()) {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let open_invite = {
        let cb = p.on_open_invite.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <div
                    class={classes!("server-box", p.copied.then_some("server-box--copied"))}
                    role="button"
                    tabindex="0"
                    title={t("status.copy_hint")}
                    onclick={copy_click}
                    onkeydown={copy_key}
                >
                    <ServerIcon />
                    <div class="server-box__text">
                        <span class="server-address">{ address_label(p.copied) }</span>
                        <span class="server-status">
                            <span class={dot_class} aria-hidden="true"></span>
                            { status_label(p.status.as_ref()) }
                        </span>
                    </div>
                </div>
                <img class="header-logo" src={crate::paths::logo_src()} alt={t("ui.logo_alt")} />
                <button type="button" class="discord-box" title={t("discord.hint")} onclick={open_invite}>
                    <DiscordIcon />
                    <span>{ t("discord.title") }</span>
                </button>
            </div>
        </header>
    }
}
