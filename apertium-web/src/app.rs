//! Host page: translator text panes over a sticky footer.
use crate::components::footer::Footer;
use crate::context::TextPair;
use crate::i18n::t;
use yew::html::TargetCast;
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::config::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <Page />
        </BrowserRouter>
    }
}

/// Page layout: `#wrap` holds the content and the `#push` spacer, the footer follows it.
#[function_component(Page)]
pub fn page() -> Html {
    let text = use_state(TextPair::default);
    let wrap_ref = use_node_ref();
    let push_ref = use_node_ref();

    let on_src_input = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let value = textarea_value(&e);
            text.set(TextPair::new(value, (*text).tgt_text.clone()));
        })
    };
    let on_tgt_input = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let value = textarea_value(&e);
            text.set(TextPair::new((*text).src_text.clone(), value));
        })
    };

    html! {
        <ContextProvider<TextPair> context={(*text).clone()}>
            <div id="wrap" ref={wrap_ref.clone()}>
                <main class="container translator">
                    <label for="src-text" class="form-label">{ t("app.source_label") }</label>
                    <textarea
                        id="src-text"
                        class="form-control"
                        value={text.src_text.clone()}
                        oninput={on_src_input}
                    />
                    <label for="tgt-text" class="form-label">{ t("app.target_label") }</label>
                    <textarea
                        id="tgt-text"
                        class="form-control"
                        value={text.tgt_text.clone()}
                        oninput={on_tgt_input}
                    />
                </main>
                <div id="push" ref={push_ref.clone()}></div>
            </div>
            <Footer wrap_ref={wrap_ref} push_ref={push_ref} />
        </ContextProvider<TextPair>>
    }
}

fn textarea_value(e: &InputEvent) -> String {
    e.target_dyn_into::<web_sys::HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}
