use yew::prelude::*;

/// Source text and its current translation, shared through a
/// `ContextProvider<TextPair>` by the translator page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextPair {
    pub src_text: AttrValue,
    pub tgt_text: AttrValue,
}

impl TextPair {
    #[must_use]
    pub fn new(src_text: impl Into<AttrValue>, tgt_text: impl Into<AttrValue>) -> Self {
        Self {
            src_text: src_text.into(),
            tgt_text: tgt_text.into(),
        }
    }
}

/// Read the shared pair, or an empty one when no provider is mounted.
#[hook]
pub fn use_text_pair() -> TextPair {
    use_context::<TextPair>().unwrap_or_default()
}
