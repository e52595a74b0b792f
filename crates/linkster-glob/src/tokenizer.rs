//! Splitting of delimited range fields into individual range tokens.

use crate::error::GlobError;
use crate::range::validate_range;

/// Default separator between range tokens in a range field.
pub const DEFAULT_SEPARATOR: char = ',';

/// Splits `input` on every occurrence of `separator`.
///
/// With `preserve_empty` unset, runs of separators collapse into one and empty
/// leading/trailing segments are dropped. With it set, every separator is a token
/// boundary, so `"a,,b"` yields `["a", "", "b"]`.
///
/// An absent input yields `None`, an empty input yields an empty list.
pub fn split(input: Option<&str>, separator: char, preserve_empty: bool) -> Option<Vec<&str>> {
    let input = input?;
    if input.is_empty() {
        return Some(Vec::new());
    }

    let mut parts = Vec::new();
    let mut start = 0;
    // `in_token`: characters seen since the last boundary.
    // `after_separator`: the last character consumed was a separator.
    let mut in_token = false;
    let mut after_separator = false;

    for (idx, ch) in input.char_indices() {
        if ch == separator {
            if in_token || preserve_empty {
                parts.push(&input[start..idx]);
                in_token = false;
                after_separator = true;
            }
            start = idx + ch.len_utf8();
            continue;
        }
        after_separator = false;
        in_token = true;
    }

    if in_token || (preserve_empty && after_separator) {
        parts.push(&input[start..]);
    }

    Some(parts)
}

/// Converts a range field (e.g. `"1..2,1..10,A:a..f"`) into validated range tokens.
///
/// Empty segments are dropped. Every remaining token must parse as a numeric or
/// alphabetic range; the first malformed token fails the whole field.
pub fn convert_range(input: &str, separator: char) -> Result<Vec<String>, GlobError> {
    let tokens = split(Some(input), separator, false).unwrap_or_default();
    tokens
        .into_iter()
        .map(|token| {
            validate_range(token)?;
            Ok(token.to_string())
        })
        .collect()
}
