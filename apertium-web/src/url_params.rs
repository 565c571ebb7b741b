//! Query-string lookups against the current router location.

/// Value of the first `name` parameter in `query`, decoded.
///
/// Accepts the query with or without its leading `?`. `+` decodes to a space
/// and percent escapes are resolved; an undecodable value is returned with
/// only the `+` substitution applied. A bare `name` with no `=` yields an
/// empty string.
#[must_use]
pub fn get_url_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key) == name).then(|| decode_component(value))
        })
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_else(|_| raw.replace('+', " "))
}
