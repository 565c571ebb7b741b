//! Deployment constants, static asset URLs and the build version shown in the footer.
use once_cell::unsync::OnceCell;

/// Organisation hosting the per-pair issue trackers.
pub const ISSUE_TRACKER_ORG: &str = "https://github.com/apertium";
/// Query parameter carrying the active language pair (e.g. `eng-spa`).
pub const PAIR_PARAM: &str = "dir";
/// Repository suffix used when no pair is selected.
pub const DEFAULT_PAIR: &str = "default";
pub const ISSUE_TITLE: &str = "Suggested translation improvement";
pub const EXPECTED_PLACEHOLDER: &str = "[YOUR TRANSLATION SUGGESTION GOES HERE]";
/// `localStorage` key for the chosen interface language.
pub const LOCALE_STORAGE_KEY: &str = "apertium.locale";
/// Logo shown in the About dialog, relative to the deployment root.
pub const LOGO_ASSET: &str = "img/apertium.svg";

// Sub-directory the tool is served from, set through `PUBLIC_URL` at build
// time. Empty for root deployments; never ends in `/`.
fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").map_or("", |base| base.trim().trim_end_matches('/'))
}

/// Router basename, `None` for root deployments.
#[must_use]
pub fn router_base() -> Option<String> {
    Some(public_url())
        .filter(|base| !base.is_empty())
        .map(str::to_string)
}

/// URL of a static file shipped next to the wasm bundle.
#[must_use]
pub fn asset_url(relative: &str) -> String {
    under_public_url(public_url(), relative)
}

fn under_public_url(base: &str, relative: &str) -> String {
    format!("{base}/{}", relative.trim_start_matches('/'))
}

thread_local! {
    static VERSION: OnceCell<String> = const { OnceCell::new() };
}

/// Version label for the footer.
///
/// Prefers the `window.VERSION` global injected by the host page, then the
/// `APERTIUM_VERSION` build variable, then the crate version. Resolved once and
/// cached for the lifetime of the page.
#[must_use]
pub fn version() -> String {
    VERSION.with(|cell| {
        cell.get_or_init(|| injected_version().unwrap_or_else(build_version))
            .clone()
    })
}

fn build_version() -> String {
    build_version_from(option_env!("APERTIUM_VERSION"))
}

fn build_version_from(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(env!("CARGO_PKG_VERSION"))
        .to_string()
}

#[cfg(target_arch = "wasm32")]
fn injected_version() -> Option<String> {
    let window = crate::dom::try_window().ok()?;
    js_sys::Reflect::get(window.as_ref(), &wasm_bindgen::JsValue::from_str("VERSION"))
        .ok()?
        .as_string()
}

#[cfg(not(target_arch = "wasm32"))]
const fn injected_version() -> Option<String> {
    None
}
