#[cfg(target_arch = "wasm32")]
use crate::config::LOCALE_STORAGE_KEY;
use crate::i18n::locales::{ENGLISH, LocaleMeta, find_locale, load_translations};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Active locale with its translations and the English fallback.
pub struct I18nBundle {
    pub meta: &'static LocaleMeta,
    pub translations: Rc<Value>,
    pub fallback: Rc<Value>,
}

impl I18nBundle {
    fn for_locale(meta: &'static LocaleMeta) -> Self {
        Self {
            meta,
            translations: parsed(meta),
            fallback: parsed(ENGLISH),
        }
    }
}

thread_local! {
    // Each embedded bundle is parsed at most once per page.
    static PARSED: RefCell<BTreeMap<&'static str, Rc<Value>>> = const { RefCell::new(BTreeMap::new()) };

    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new(
        I18nBundle::for_locale(find_locale(&saved_lang()).unwrap_or(ENGLISH)),
    );
}

fn parsed(meta: &'static LocaleMeta) -> Rc<Value> {
    PARSED.with(|cache| {
        Rc::clone(cache.borrow_mut().entry(meta.code).or_insert_with(|| {
            Rc::new(load_translations(meta.code).unwrap_or_else(|| {
                log::warn!("translations for `{}` failed to parse", meta.code);
                Value::Object(serde_json::Map::new())
            }))
        }))
    })
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        crate::dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| ENGLISH.code.to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        ENGLISH.code.to_string()
    }
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the interface language.
///
/// Unknown codes are ignored. In the browser this also updates the `<html>`
/// `lang`/`dir` attributes and remembers the choice in `localStorage`.
pub fn set_lang(lang: &str) {
    let Some(meta) = find_locale(lang) else {
        log::warn!("no translations bundled for locale `{lang}`");
        return;
    };
    CURRENT.with(|cell| cell.replace(I18nBundle::for_locale(meta)));

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::try_window()
            .ok()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", meta.code);
            let _ = el.set_attribute("dir", if meta.rtl { "rtl" } else { "ltr" });
        }
        if let Ok(storage) = crate::dom::local_storage() {
            let _ = storage.set_item(LOCALE_STORAGE_KEY, meta.code);
        }
    }
}

#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.meta.code.to_string())
}

/// Whether the active locale is written right-to-left.
#[must_use]
pub fn is_rtl() -> bool {
    with_bundle(|bundle| bundle.meta.rtl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_locales_reuses_parsed_bundles() {
        set_lang("ar");
        let (ar, en) = with_bundle(|b| (Rc::clone(&b.translations), Rc::clone(&b.fallback)));
        assert!(is_rtl());

        set_lang("es");
        set_lang("ar");
        with_bundle(|b| {
            assert!(Rc::ptr_eq(&b.translations, &ar));
            assert!(Rc::ptr_eq(&b.fallback, &en));
        });
        set_lang("en");
    }

    #[test]
    fn english_is_its_own_fallback() {
        let bundle = I18nBundle::for_locale(ENGLISH);
        assert!(Rc::ptr_eq(&bundle.translations, &bundle.fallback));
        assert!(bundle.translations.is_object());
    }

    #[test]
    fn unknown_locale_leaves_current_bundle_alone() {
        set_lang("es");
        set_lang("xx");
        assert_eq!(current_lang(), "es");
        set_lang("en");
    }
}
