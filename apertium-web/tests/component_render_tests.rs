use apertium_web::components::footer::{
    AboutModal, ContactModal, DocumentationModal, DownloadModal, Footer, FooterNavProps,
    ModalProps, OpenTab, Tab, TabModal, TabModalProps,
};
use apertium_web::components::modal::Modal;
use apertium_web::context::TextPair;
use futures::executor::block_on;
use yew::html::ChildrenRenderer;
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

#[derive(Properties, PartialEq, Clone)]
struct HostProps {
    entry: AttrValue,
    text: TextPair,
}

#[function_component(RoutedFooter)]
fn routed_footer(p: &HostProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::with_entries(vec![p.entry.to_string()]));
    html! {
        <Router history={history}>
            <ContextProvider<TextPair> context={p.text.clone()}>
                <Footer />
            </ContextProvider<TextPair>>
        </Router>
    }
}

fn render_routed(entry: &'static str, text: TextPair) -> String {
    let props = HostProps {
        entry: AttrValue::from(entry),
        text,
    };
    block_on(LocalServerRenderer::<RoutedFooter>::with_props(props).render())
}

#[test]
fn footer_renders_nav_items_in_order() {
    apertium_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    let positions: Vec<usize> = ["About", "Download", "Documentation", "Contact"]
        .iter()
        .map(|label| html.find(label).unwrap_or_else(|| panic!("{label} missing")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    for tab in Tab::ALL {
        assert!(html.contains(tab.icon()), "icon for {tab:?} missing");
    }
    assert!(html.contains("role=\"navigation\""));
}

#[test]
fn footer_starts_with_every_dialog_closed() {
    apertium_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(!html.contains("modal-backdrop"));
    assert!(!html.contains("role=\"dialog\""));
}

#[test]
fn footer_without_router_reports_to_default_repository() {
    apertium_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("https://github.com/apertium/apertium-default/issues/new"));
    assert!(html.contains("Notice a mistake?"));
    assert!(html.contains("Help us improve Apertium!"));
    assert!(html.contains(&apertium_web::config::version()));
}

#[test]
fn footer_reads_pair_from_query_and_text_from_context() {
    apertium_web::i18n::set_lang("en");
    let html = render_routed("/?dir=eng-spa", TextPair::new("Hello", "Hola"));
    assert!(html.contains("apertium-eng-spa/issues/new"));
    assert!(html.contains("SOURCE%3A+Hello%0A%0AGOT%3A+Hola"));
}

#[test]
fn footer_falls_back_to_default_pair_without_dir() {
    apertium_web::i18n::set_lang("en");
    let html = render_routed("/?q=hello", TextPair::default());
    assert!(html.contains("apertium-default/issues/new"));
}

#[test]
fn footer_labels_follow_active_locale() {
    apertium_web::i18n::set_lang("es");
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("Acerca de"));
    assert!(html.contains("Descargar"));
    apertium_web::i18n::set_lang("en");
}

#[test]
fn modal_renders_when_shown_and_skips_when_hidden() {
    apertium_web::i18n::set_lang("en");
    let open_props = apertium_web::components::modal::Props {
        show: true,
        title: AttrValue::from("Title"),
        on_hide: Callback::noop(),
        id: Some(AttrValue::from("test-modal")),
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(open_props).render());
    assert!(html.contains("modal-header"));
    assert!(html.contains("id=\"test-modal\""));
    assert!(html.contains("aria-labelledby=\"test-modal-title\""));

    let closed_props = apertium_web::components::modal::Props {
        show: false,
        title: AttrValue::from("Title"),
        on_hide: Callback::noop(),
        id: None,
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(closed_props).render());
    assert!(!html.contains("modal-backdrop"));
}

fn shown() -> ModalProps {
    ModalProps {
        show: true,
        on_hide: Callback::noop(),
    }
}

#[test]
fn info_dialogs_render_their_titles() {
    apertium_web::i18n::set_lang("en");
    let about = block_on(LocalServerRenderer::<AboutModal>::with_props(shown()).render());
    assert!(about.contains("About Apertium"));
    assert!(about.contains("id=\"about-modal\""));
    let download = block_on(LocalServerRenderer::<DownloadModal>::with_props(shown()).render());
    assert!(download.contains("id=\"download-modal\""));
    let docs = block_on(LocalServerRenderer::<DocumentationModal>::with_props(shown()).render());
    assert!(docs.contains("Apertium-apy"));
    let contact = block_on(LocalServerRenderer::<ContactModal>::with_props(shown()).render());
    assert!(contact.contains("apertium-stuff"));
}

#[test]
fn tab_modal_renders_only_the_requested_dialog() {
    apertium_web::i18n::set_lang("en");
    for tab in Tab::ALL {
        let props = TabModalProps {
            tab,
            show: true,
            on_hide: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<TabModal>::with_props(props).render());
        assert!(html.contains(&format!("id=\"{}-modal\"", tab.key())));
        assert_eq!(html.matches("role=\"dialog\"").count(), 1);
    }
}

#[test]
fn page_lays_out_wrap_push_and_footer() {
    apertium_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<apertium_web::app::Page>::new().render());
    let wrap = html.find("id=\"wrap\"").expect("wrap container");
    let push = html.find("id=\"push\"").expect("push spacer");
    let footer = html.find("<footer").expect("footer");
    assert!(wrap < push && push < footer);
    assert!(html.contains("Source text"));
}

#[function_component(NavPropsHost)]
fn nav_props_host() -> Html {
    let open_tab = use_state(OpenTab::default);
    let nav_props = |lang: &'static str| FooterNavProps {
        set_open_tab: open_tab.setter(),
        lang: AttrValue::from(lang),
    };
    let same_locale = nav_props("en") == nav_props("en");
    let new_locale = nav_props("en") == nav_props("es");
    html! { <span>{ format!("same={same_locale} switched={new_locale}") }</span> }
}

#[test]
fn nav_props_change_when_the_locale_does() {
    let html = block_on(LocalServerRenderer::<NavPropsHost>::new().render());
    assert!(html.contains("same=true switched=false"));
}
