//! "Notice a mistake?" link into the per-pair issue tracker.
use crate::config::{DEFAULT_PAIR, EXPECTED_PLACEHOLDER, ISSUE_TITLE, ISSUE_TRACKER_ORG, PAIR_PARAM};
use crate::url_params::get_url_param;

/// Language pair selected in `query` (its `dir` parameter), if any.
///
/// An empty `dir=` counts as no selection, so the link never targets a bare
/// `apertium-` repository.
#[must_use]
pub fn language_pair(query: &str) -> Option<String> {
    get_url_param(query, PAIR_PARAM).filter(|pair| !pair.is_empty())
}

/// Plain-text issue body quoting the source and the machine translation.
#[must_use]
pub fn issue_body(src_text: &str, tgt_text: &str) -> String {
    format!("SOURCE: {src_text}\n\nGOT: {tgt_text}\n\nEXPECTED: {EXPECTED_PLACEHOLDER}")
}

/// New-issue URL on `apertium-{pair}` (or `apertium-default`) pre-filled with
/// the translation the user wants to correct.
#[must_use]
pub fn report_issue_url(pair: Option<&str>, src_text: &str, tgt_text: &str) -> String {
    let repo = format!("apertium-{}", pair.unwrap_or(DEFAULT_PAIR));
    format!(
        "{ISSUE_TRACKER_ORG}/{}/issues/new?title={}&body={}",
        urlencoding::encode(&repo),
        encode_query_value(ISSUE_TITLE),
        encode_query_value(&issue_body(src_text, tgt_text)),
    )
}

// Form encoding: spaces become `+`, everything else outside the unreserved set
// is percent-escaped.
fn encode_query_value(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}
