// crates/domain/src/filters/query.rs
use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters left readable in free-text parameters.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Decodes a form value; `+` is a space. `None` for invalid UTF-8.
pub fn decode_component(value: &str) -> Option<String> {
    let spaced: Cow<'_, str> = if value.contains('+') {
        Cow::Owned(value.replace('+', " "))
    } else {
        Cow::Borrowed(value)
    };
    percent_decode_str(&spaced)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

/// Splits `a=1&b=2` into pairs, tolerating a leading `?` and empty segments.
pub fn pairs(input: &str) -> impl Iterator<Item = (&str, &str)> {
    input
        .strip_prefix('?')
        .unwrap_or(input)
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.split_once('=').unwrap_or((segment, "")))
}
