use super::tab::{OpenTab, Tab};
use crate::i18n::t;
use yew::functional::UseStateSetter;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub set_open_tab: UseStateSetter<OpenTab>,
    /// Active interface locale; the labels are only re-read when it changes.
    #[prop_or_default]
    pub lang: AttrValue,
}

/// Footer link bar. Each item opens its tab's dialog and does nothing else.
///
/// The setter compares by identity, so parent re-renders with the same state
/// slot and locale skip the nav. A `set_lang` call is only picked up on the
/// next render of the Footer.
#[function_component(FooterNav)]
pub fn footer_nav(p: &Props) -> Html {
    html! {
        <ul class="nav nav-pills p-0" role="navigation" aria-label={t("footer.nav_label")} style="cursor: pointer">
            { for Tab::ALL.iter().map(|&tab| {
                let setter = p.set_open_tab.clone();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    setter.set(OpenTab::open(tab));
                });
                html! {
                    <li class="nav-item" key={tab.key()}>
                        <a
                            class="nav-link footer-link"
                            href={format!("#{}", tab.key())}
                            data-tab={tab.key()}
                            onclick={onclick}
                        >
                            <i class={classes!("fas", tab.icon())} aria-hidden="true"></i>
                            {" "}
                            { t(tab.label_key()) }
                        </a>
                    </li>
                }
            }) }
        </ul>
    }
}
