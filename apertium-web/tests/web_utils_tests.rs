use apertium_web::components::footer::{issue_body, language_pair, report_issue_url};
use apertium_web::url_params::get_url_param;
use apertium_web::{config, i18n};
use std::collections::BTreeMap;

#[test]
fn i18n_bundle_switches_and_falls_back() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");
    assert!(!i18n::is_rtl());
    assert_eq!(i18n::t("footer.nav.about"), "About");

    let mut vars = BTreeMap::new();
    vars.insert("version", "3.1.0");
    assert_eq!(i18n::tr("footer.version", Some(&vars)), "Version 3.1.0");
    assert_eq!(i18n::t("missing.key"), "missing.key");

    i18n::set_lang("fr");
    assert_eq!(i18n::t("footer.nav.download"), "Télécharger");
    i18n::set_lang("en");
}

#[test]
fn i18n_locales_metadata_is_accessible() {
    let metas = i18n::locales();
    assert!(metas.iter().any(|m| m.code == "en"));
    assert!(metas.iter().any(|m| m.code == "ar" && m.rtl));
    i18n::set_lang("ar");
    assert!(i18n::is_rtl());
    i18n::set_lang("en");
}

#[test]
fn report_link_uses_pair_from_query_string() {
    let query = "?dir=eng-spa&q=Hello";
    let url = report_issue_url(language_pair(query).as_deref(), "Hello", "Hola");
    assert!(url.contains("/apertium-eng-spa/"));

    let url = report_issue_url(language_pair("").as_deref(), "Hello", "Hola");
    assert!(url.contains("/apertium-default/"));
}

#[test]
fn report_body_round_trips_through_query_decoding() {
    let url = report_issue_url(None, "Hello", "Bonjour");
    let (_, query) = url.split_once('?').expect("url has a query");
    let body = get_url_param(query, "body").expect("body present");
    assert_eq!(body, issue_body("Hello", "Bonjour"));
    assert!(body.starts_with("SOURCE: Hello\n\nGOT: Bonjour\n\nEXPECTED:"));
}

#[test]
fn config_constants_describe_the_tracker() {
    assert_eq!(config::PAIR_PARAM, "dir");
    assert_eq!(config::DEFAULT_PAIR, "default");
    assert!(config::ISSUE_TRACKER_ORG.starts_with("https://"));
    assert!(!config::version().is_empty());
}

#[test]
fn logo_url_is_root_anchored() {
    assert!(config::asset_url(config::LOGO_ASSET).ends_with("/img/apertium.svg"));
}
