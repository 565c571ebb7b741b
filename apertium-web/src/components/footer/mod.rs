//! Page footer: info-dialog links, the mistake report link and the version.
mod modals;
mod nav;
mod report;
mod sticky;
mod tab;

pub use modals::{
    AboutModal, ContactModal, DocumentationModal, DownloadModal, ModalProps, TabModal,
    TabModalProps,
};
pub use nav::{FooterNav, Props as FooterNavProps};
pub use report::{issue_body, language_pair, report_issue_url};
pub use sticky::{FooterOffsets, use_sticky_footer};
pub use tab::{OpenTab, Tab};

use crate::config;
use crate::context::use_text_pair;
use crate::i18n::{current_lang, t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;
use yew_router::hooks::use_location;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct Props {
    /// Page content container; its bottom margin is pulled up by the footer height.
    #[prop_or_default]
    pub wrap_ref: NodeRef,
    /// Spacer at the end of `wrap`; sized to the footer height.
    #[prop_or_default]
    pub push_ref: NodeRef,
}

#[function_component(Footer)]
pub fn footer(props: &Props) -> Html {
    let open_tab = use_state(OpenTab::default);
    let text = use_text_pair();
    let location = use_location();
    let footer_ref = use_node_ref();
    use_sticky_footer(
        footer_ref.clone(),
        props.wrap_ref.clone(),
        props.push_ref.clone(),
    );

    let pair = location.as_ref().and_then(|loc| language_pair(loc.query_str()));
    let report_href = report_issue_url(pair.as_deref(), &text.src_text, &text.tgt_text);

    let version = config::version();
    let version_title = {
        let mut vars = BTreeMap::new();
        vars.insert("version", version.as_str());
        tr("footer.version", Some(&vars))
    };

    let on_hide = {
        let setter = open_tab.setter();
        Callback::from(move |()| setter.set(OpenTab::CLOSED))
    };

    html! {
        <>
            <footer id="footer" class="d-flex flex-column container" ref={footer_ref}>
                <div class="d-none d-md-flex flex-wrap flex-row justify-content-between position-relative row">
                    <FooterNav set_open_tab={open_tab.setter()} lang={AttrValue::from(current_lang())} />
                    <div class="mb-4 d-flex flex-column">
                        <div class="card d-inline-block bg-light p-2">
                            <span>{ t("footer.notice_mistake") }</span>
                            {" "}
                            <a class="p-0 report-mistake" href={report_href} rel="noreferrer" target="_blank">
                                { t("footer.help_improve") }
                            </a>
                        </div>
                        <small class="text-muted d-none d-lg-block version align-self-end" title={version_title}>
                            { version }
                        </small>
                    </div>
                </div>
            </footer>
            { for Tab::ALL.iter().map(|&tab| html! {
                <TabModal
                    key={tab.key()}
                    tab={tab}
                    show={open_tab.is_visible(tab)}
                    on_hide={on_hide.clone()}
                />
            }) }
        </>
    }
}
