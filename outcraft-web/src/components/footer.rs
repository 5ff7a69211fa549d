use crate::components::icons::DiscordIcon;
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_open_invite: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &Props) -> Html {
    let open_invite = {
        let cb = props.on_open_invite.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <footer class="site-footer">
            <img class="footer-logo" src={crate::paths::logo_src()} alt={t("ui.logo_alt")} />
            <button type="button" class="footer-discord" onclick={open_invite}>
                <DiscordIcon />
                <span>{ t("discord.footer") }</span>
            </button>
            <p class="footer-copyright">{ t("footer.copyright") }</p>
        </footer>
    }
}
