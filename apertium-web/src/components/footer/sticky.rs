//! Sticky footer: keeps the footer at the bottom of short pages.
//!
//! The page is laid out as `#wrap` (all content, `min-height: 100%`) holding a
//! trailing `#push` spacer, followed by the footer. Giving `#push` the footer's
//! height and pulling `#wrap` up by the same amount makes the footer sit on the
//! viewport's bottom edge until the content is taller than the viewport.
use crate::dom::{js_error_message, set_style, try_window};
use crate::error::FooterError;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, Window};
use yew::prelude::*;

/// Inline style values derived from one footer measurement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterOffsets {
    pub push_height: String,
    pub wrap_margin_bottom: String,
}

impl FooterOffsets {
    #[must_use]
    pub fn for_height(height: i32) -> Self {
        Self {
            push_height: format!("{height}px"),
            wrap_margin_bottom: format!("-{height}px"),
        }
    }
}

/// Measure the footer and write the offsets into `push` and `wrap`.
///
/// Returns `Ok(None)` without touching anything while any of the three nodes
/// is not mounted.
fn refresh_sizes(
    footer: &NodeRef,
    wrap: &NodeRef,
    push: &NodeRef,
) -> Result<Option<i32>, FooterError> {
    let (Some(footer), Some(wrap), Some(push)) = (
        footer.cast::<HtmlElement>(),
        wrap.cast::<HtmlElement>(),
        push.cast::<HtmlElement>(),
    ) else {
        return Ok(None);
    };

    let height = footer.offset_height();
    let offsets = FooterOffsets::for_height(height);
    set_style(&push, "height", &offsets.push_height)?;
    set_style(&wrap, "margin-bottom", &offsets.wrap_margin_bottom)?;
    Ok(Some(height))
}

fn refresh_and_log(footer: &NodeRef, wrap: &NodeRef, push: &NodeRef) {
    match refresh_sizes(footer, wrap, push) {
        Ok(Some(height)) => log::debug!("sticky footer offset set to {height}px"),
        Ok(None) => {}
        Err(err) => log::warn!("sticky footer not updated: {err}"),
    }
}

/// `resize` subscription on `window`, removed again on drop.
struct ResizeListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
    fn attach(handler: impl FnMut() + 'static) -> Result<Self, FooterError> {
        let window = try_window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .map_err(|err| FooterError::Listener(js_error_message(&err)))?;
        Ok(Self { window, callback })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
    }
}

/// Keep `push`/`wrap` in step with the rendered height of `footer_ref`.
///
/// Measures after every render of the caller (the first one included) and on
/// each window `resize`. The listener lives exactly as long as the caller is
/// mounted.
#[hook]
pub fn use_sticky_footer(footer_ref: NodeRef, wrap_ref: NodeRef, push_ref: NodeRef) {
    {
        let (footer, wrap, push) = (footer_ref.clone(), wrap_ref.clone(), push_ref.clone());
        use_effect(move || refresh_and_log(&footer, &wrap, &push));
    }

    use_effect_with((footer_ref, wrap_ref, push_ref), |(footer, wrap, push)| {
        let (footer, wrap, push) = (footer.clone(), wrap.clone(), push.clone());
        let listener = ResizeListener::attach(move || refresh_and_log(&footer, &wrap, &push))
            .inspect_err(|err| log::warn!("sticky footer will not follow resizes: {err}"))
            .ok();
        move || drop(listener)
    });
}
