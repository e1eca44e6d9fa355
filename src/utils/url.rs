//! URL building and query string utilities.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters left unescaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single path segment or query value.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Decode a query string component (`+` means space).
pub fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Set `key=value` in the URL's query string.
///
/// An existing `key` is replaced in place and any duplicates of it are
/// dropped; otherwise the pair is appended. Applying this twice with the
/// same key leaves exactly one occurrence carrying the latter value.
pub fn insert_param(url: &str, key: &str, value: &str) -> String {
    let (url, fragment) = match url.split_once('#') {
        Some((url, fragment)) => (url, Some(fragment)),
        None => (url, None),
    };
    let (base, query) = url.split_once('?').unwrap_or((url, ""));

    let key = encode_component(key);
    let pair = format!("{}={}", key, encode_component(value));

    let mut pairs: Vec<String> = Vec::new();
    let mut replaced = false;
    for existing in query.split('&').filter(|p| !p.is_empty()) {
        let name = existing.split('=').next().unwrap_or_default();
        if name == key {
            if !replaced {
                pairs.push(pair.clone());
                replaced = true;
            }
        } else {
            pairs.push(existing.to_string());
        }
    }
    if !replaced {
        pairs.push(pair);
    }

    let mut result = format!("{}?{}", base, pairs.join("&"));
    if let Some(fragment) = fragment {
        result.push('#');
        result.push_str(fragment);
    }
    result
}

/// First value of `key` in a `?a=b&c=d` style query string, decoded.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|p| !p.is_empty())
        .find_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(name) == key).then(|| decode_component(value))
        })
}
