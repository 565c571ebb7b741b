use super::tab::Tab;
use crate::components::modal::Modal;
use crate::i18n::t;
use crate::config::{LOGO_ASSET, asset_url};
use yew::prelude::*;

const WIKI_URL: &str = "https://wiki.apertium.org/wiki/Main_Page";
const INSTALL_URL: &str = "https://wiki.apertium.org/wiki/Installation";
const SOURCE_URL: &str = "https://github.com/apertium";
const API_URL: &str = "https://wiki.apertium.org/wiki/Apertium-apy";
const MAILING_LIST_URL: &str = "https://lists.sourceforge.net/lists/listinfo/apertium-stuff";
const IRC_URL: &str = "https://wiki.apertium.org/wiki/IRC";
const ISSUES_URL: &str = "https://github.com/apertium/apertium-html-tools/issues";

/// Contract shared by the four footer dialogs.
#[derive(Properties, PartialEq, Clone)]
pub struct ModalProps {
    pub show: bool,
    pub on_hide: Callback<()>,
}

fn external_link(href: &'static str, label_key: &str) -> Html {
    html! {
        <li>
            <a href={href} target="_blank" rel="noreferrer">{ t(label_key) }</a>
        </li>
    }
}

fn dialog(tab: Tab, props: &ModalProps, body: Html) -> Html {
    html! {
        <Modal
            id={AttrValue::from(format!("{}-modal", tab.key()))}
            show={props.show}
            title={AttrValue::from(t(tab.title_key()))}
            on_hide={props.on_hide.clone()}
        >
            { body }
        </Modal>
    }
}

#[function_component(AboutModal)]
pub fn about_modal(props: &ModalProps) -> Html {
    dialog(
        Tab::About,
        props,
        html! {
            <>
                <img class="about-logo" src={asset_url(LOGO_ASSET)} alt="Apertium" />
                <p>{ t("about.intro") }</p>
                <p>{ t("about.body") }</p>
                <ul class="list-unstyled">{ external_link(WIKI_URL, "about.more") }</ul>
            </>
        },
    )
}

#[function_component(DownloadModal)]
pub fn download_modal(props: &ModalProps) -> Html {
    dialog(
        Tab::Download,
        props,
        html! {
            <>
                <p>{ t("download.intro") }</p>
                <ul>
                    { external_link(INSTALL_URL, "download.packages") }
                    { external_link(SOURCE_URL, "download.source") }
                </ul>
            </>
        },
    )
}

#[function_component(DocumentationModal)]
pub fn documentation_modal(props: &ModalProps) -> Html {
    dialog(
        Tab::Documentation,
        props,
        html! {
            <>
                <p>{ t("documentation.intro") }</p>
                <ul>
                    { external_link(WIKI_URL, "documentation.wiki") }
                    { external_link(API_URL, "documentation.api") }
                </ul>
            </>
        },
    )
}

#[function_component(ContactModal)]
pub fn contact_modal(props: &ModalProps) -> Html {
    dialog(
        Tab::Contact,
        props,
        html! {
            <>
                <p>{ t("contact.intro") }</p>
                <ul>
                    { external_link(IRC_URL, "contact.irc") }
                    { external_link(MAILING_LIST_URL, "contact.mailing_list") }
                    { external_link(ISSUES_URL, "contact.issues") }
                </ul>
            </>
        },
    )
}

#[derive(Properties, PartialEq, Clone)]
pub struct TabModalProps {
    pub tab: Tab,
    pub show: bool,
    pub on_hide: Callback<()>,
}

/// The dialog belonging to `tab`.
#[function_component(TabModal)]
pub fn tab_modal(p: &TabModalProps) -> Html {
    let show = p.show;
    let on_hide = p.on_hide.clone();
    match p.tab {
        Tab::About => html! { <AboutModal show={show} on_hide={on_hide} /> },
        Tab::Download => html! { <DownloadModal show={show} on_hide={on_hide} /> },
        Tab::Documentation => html! { <DocumentationModal show={show} on_hide={on_hide} /> },
        Tab::Contact => html! { <ContactModal show={show} on_hide={on_hide} /> },
    }
}
