//! Range token parsing.
//!
//! A range token is either numeric (`<start>..<end>`, base-10, sign allowed) or
//! alphabetic (`A:<char>..<char>`, exactly one character per endpoint). Both are
//! inclusive and only ever walked upwards, so `5..1` is a valid but empty range.
//!
//! Mode selection has two deliberately separate checks:
//!
//! - [`looks_alpha_at_start`] is what the expander uses: the token must *begin*
//!   with `A:`.
//! - [`contains_alpha_marker`] is what [`parse_alpha_range`] uses: `A:` may appear
//!   anywhere.
//!
//! So `"xA:1..2"` is numeric (and malformed) to the expander, while
//! `parse_alpha_range("xA:1..2")` reads it as the alphabetic range `'1'..='2'`.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::GlobError;

/// Separator between the two endpoints of a range token.
pub const RANGE_SEPARATOR: &str = "..";

/// Prefix that requests alphabetic mode.
pub const ALPHA_MARKER: &str = "A:";

/// Shortest possible alphabetic token, `A:a..b`.
pub const MIN_ALPHA_TOKEN_LEN: usize = 6;

/// Whether a range walks integers or characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeMode {
    Numeric,
    Alpha,
}

impl RangeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeMode::Numeric => "numeric",
            RangeMode::Alpha => "alpha",
        }
    }
}

impl std::fmt::Display for RangeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved, inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Interval {
    Numeric { start: i64, end: i64 },
    Alpha { start: char, end: char },
}

impl Interval {
    pub fn mode(&self) -> RangeMode {
        match self {
            Interval::Numeric { .. } => RangeMode::Numeric,
            Interval::Alpha { .. } => RangeMode::Alpha,
        }
    }

    /// Returns true if walking the interval yields no values (`start > end`).
    pub fn is_empty(&self) -> bool {
        match *self {
            Interval::Numeric { start, end } => start > end,
            Interval::Alpha { start, end } => start > end,
        }
    }

    /// Number of values the interval produces.
    ///
    /// Alphabetic intervals skip the surrogate block, since those code points
    /// are not characters. The full `i64` span saturates at `u64::MAX`.
    pub fn size(&self) -> u64 {
        match *self {
            Interval::Numeric { start, end } if start <= end => {
                u64::try_from(i128::from(end) - i128::from(start) + 1).unwrap_or(u64::MAX)
            }
            Interval::Numeric { .. } => 0,
            Interval::Alpha { start, end } => (start..=end).count() as u64,
        }
    }

    /// Iterates the substitution strings in ascending order.
    pub fn values(&self) -> IntervalValues {
        match *self {
            Interval::Numeric { start, end } => IntervalValues::Numeric(start..=end),
            Interval::Alpha { start, end } => IntervalValues::Alpha(start..=end),
        }
    }
}

/// Iterator over the rendered values of an [`Interval`].
#[derive(Debug, Clone)]
pub enum IntervalValues {
    Numeric(RangeInclusive<i64>),
    Alpha(RangeInclusive<char>),
}

impl Iterator for IntervalValues {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self {
            IntervalValues::Numeric(range) => range.next().map(|v| v.to_string()),
            IntervalValues::Alpha(range) => range.next().map(String::from),
        }
    }
}

/// Top-level mode check: the token starts with `A:`.
pub fn looks_alpha_at_start(token: &str) -> bool {
    token.starts_with(ALPHA_MARKER)
}

/// Inner mode check: the token contains `A:` anywhere.
pub fn contains_alpha_marker(token: &str) -> bool {
    token.contains(ALPHA_MARKER)
}

/// Decides the mode of a token the way the expander does.
///
/// The token must be at least two characters long to be inspected.
pub fn range_mode(token: &str) -> Result<RangeMode, GlobError> {
    if token.chars().nth(1).is_none() {
        return Err(GlobError::TokenTooShort {
            token: token.to_string(),
        });
    }
    Ok(if looks_alpha_at_start(token) {
        RangeMode::Alpha
    } else {
        RangeMode::Numeric
    })
}

/// Parses a numeric range token, `<start>..<end>`.
///
/// No alphabetic detection happens here: `"A:a..c"` fails because `"A:a"` is not
/// an integer.
pub fn parse_range(token: &str) -> Result<Interval, GlobError> {
    let (start, end) = split_endpoints(token)?;
    Ok(Interval::Numeric {
        start: parse_endpoint(token, start)?,
        end: parse_endpoint(token, end)?,
    })
}

/// Parses an alphabetic range token, falling back to [`parse_range`] when the token
/// carries no `A:` marker.
pub fn parse_alpha_range(token: &str) -> Result<Interval, GlobError> {
    if token.chars().count() < MIN_ALPHA_TOKEN_LEN {
        return Err(GlobError::AlphaTooShort {
            token: token.to_string(),
        });
    }

    if !contains_alpha_marker(token) {
        return parse_range(token);
    }

    let body_start = token
        .find(ALPHA_MARKER)
        .map_or(0, |pos| pos + ALPHA_MARKER.len());
    let dots = token
        .find(RANGE_SEPARATOR)
        .ok_or_else(|| GlobError::MissingSeparator {
            token: token.to_string(),
        })?;

    // A marker sitting after the separator leaves no start text at all.
    let start = token.get(body_start..dots).unwrap_or("");
    let end = &token[dots + RANGE_SEPARATOR.len()..];

    match (single_char(start), single_char(end)) {
        (Some(start), Some(end)) => Ok(Interval::Alpha { start, end }),
        _ => Err(GlobError::InvalidAlphaEndpoints {
            start: start.to_string(),
            end: end.to_string(),
        }),
    }
}

/// Resolves a token using the expander's mode selection.
pub fn resolve_range(token: &str) -> Result<Interval, GlobError> {
    match range_mode(token)? {
        RangeMode::Alpha => parse_alpha_range(token),
        RangeMode::Numeric => parse_range(token),
    }
}

/// Checks that a token is a well-formed range without expanding it.
pub fn validate_range(token: &str) -> Result<(), GlobError> {
    resolve_range(token).map(|_| ())
}

fn split_endpoints(token: &str) -> Result<(&str, &str), GlobError> {
    token
        .split_once(RANGE_SEPARATOR)
        .ok_or_else(|| GlobError::MissingSeparator {
            token: token.to_string(),
        })
}

fn parse_endpoint(token: &str, endpoint: &str) -> Result<i64, GlobError> {
    endpoint
        .parse::<i64>()
        .map_err(|source| GlobError::InvalidEndpoint {
            token: token.to_string(),
            endpoint: endpoint.to_string(),
            source,
        })
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
