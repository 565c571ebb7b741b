use crate::i18n::t;
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static MODAL_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub show: bool,
    pub title: AttrValue,
    pub on_hide: Callback<()>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Dialog shell shared by the footer's information panels.
///
/// Renders nothing while hidden. The close button, a click on the backdrop and
/// the Escape key all emit `on_hide`; the owner decides whether to hide it.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let modal_id = use_state(|| MODAL_IDS.fetch_add(1, Ordering::Relaxed));
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        use_effect_with(props.show, move |show| {
            if *show && let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
        });
    }

    if !props.show {
        return Html::default();
    }

    let container_id = props
        .id
        .clone()
        .unwrap_or_else(|| AttrValue::from(format!("modal-{}", *modal_id)));
    let title_id = format!("{}-title", container_id.as_str());

    let on_close = {
        let cb = props.on_hide.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_hide.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    // Clicks inside the dialog must not reach the backdrop.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop show" role="presentation" onclick={on_close.clone()}>
            <div
                id={container_id}
                class="modal-dialog modal-lg"
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                tabindex="-1"
                onkeydown={on_keydown}
                onclick={keep_open}
                ref={container_ref}
            >
                <div class="modal-content">
                    <div class="modal-header">
                        <h2 id={title_id} class="modal-title">{ props.title.clone() }</h2>
                        <button type="button" class="btn-close" aria-label={t("modal.close")} onclick={on_close}>
                            {"×"}
                        </button>
                    </div>
                    <div class="modal-body">
                        { for props.children.iter() }
                    </div>
                </div>
            </div>
        </div>
    }
}
