#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod dom;
pub mod error;
pub mod i18n;
pub mod url_params;

pub use error::FooterError;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    let _ = console_log::init_with_level(log::Level::Debug);
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Ensure <html lang, dir> match the saved locale before the first render
    crate::i18n::set_lang(&crate::i18n::current_lang());
    log::debug!("apertium-web {} starting", crate::config::version());
    yew::Renderer::<app::App>::new().render();
}
