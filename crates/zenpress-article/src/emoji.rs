//! Unicode escape sequence decoding for emoji values.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `\U` followed by 8 or 4 hex digits.
static ESCAPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\U([a-fA-F0-9]{8}|[a-fA-F0-9]{4})").expect("invalid escape pattern")
});

/// Decode `\UXXXXXXXX` / `\UXXXX` escape sequences into their Unicode
/// characters. Text without escapes passes through unchanged, as do
/// escapes that name an invalid code point.
#[must_use]
pub fn decode_unicode_escapes(value: &str) -> String {
    ESCAPE_PATTERN
        .replace_all(value, |captures: &Captures<'_>| {
            u32::from_str_radix(&captures[1], 16)
                .ok()
                .and_then(char::from_u32)
                .map_or_else(|| captures[0].to_owned(), |c| c.to_string())
        })
        .into_owned()
}
