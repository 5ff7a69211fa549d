use crate::i18n::t;
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static MODAL_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let modal_id = use_state(|| MODAL_IDS.fetch_add(1, Ordering::Relaxed));
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        use_effect_with(props.open, move |is_open| {
            if *is_open && let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
            || {}
        });
    }

    if !props.open {
        return Html::default();
    }

    let title_id = format!("modal-title-{}", *modal_id);
    let desc_id = props
        .description
        .as_ref()
        .map(|_| format!("modal-desc-{}", *modal_id));

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    // Clicks inside the dialog must not reach the backdrop.
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_close.clone()}>
            <div
                class="modal"
                role="alertdialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                aria-describedby={desc_id.clone().unwrap_or_default()}
                tabindex="-1"
                onclick={stop}
                onkeydown={on_keydown}
                ref={container_ref}
            >
                <div class="modal__header">
                    <h2 id={title_id}>{ props.title.clone() }</h2>
                    <button type="button" class="modal__close" aria-label={t("ui.close")} onclick={on_close.clone()}>
                        {"X"}
                    </button>
                </div>
                { props.description.as_ref().map(|desc| {
                    let id = desc_id.clone().unwrap_or_default();
                    html! {
                        <p id={id} class="modal__description">{ desc.clone() }</p>
                    }
                }).unwrap_or_default() }
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
