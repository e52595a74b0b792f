//! Error types for range parsing, template expansion and link planning.

use std::num::ParseIntError;

use thiserror::Error;

/// Classification of expansion errors.
///
/// Each kind carries a stable code so that callers (and the `--json` CLI output)
/// can branch on it without matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// G001: A numeric endpoint is not an integer, or the `..` separator is missing
    Format,
    /// G002: An alphabetic token is malformed, a token is too short to inspect, or a
    /// range is too large to expand
    InvalidRange,
    /// G003: The call itself was malformed (no ranges, no template, bad marker)
    InvalidArgument,
    /// G004: The template has no placeholder left to substitute
    NoPlaceholder,
}

impl ErrorKind {
    /// Returns the error code string (e.g., "G001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Format => "G001",
            ErrorKind::InvalidRange => "G002",
            ErrorKind::InvalidArgument => "G003",
            ErrorKind::NoPlaceholder => "G004",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised by the expansion engine.
///
/// Messages are meant to be shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlobError {
    /// An endpoint of a numeric range is not a base-10 integer.
    #[error("invalid range endpoint '{endpoint}' in '{token}': {source}")]
    InvalidEndpoint {
        token: String,
        endpoint: String,
        #[source]
        source: ParseIntError,
    },

    /// The token has no `..` between its endpoints.
    #[error("range '{token}' is missing the '..' separator")]
    MissingSeparator { token: String },

    /// The token is shorter than the smallest alphabetic range (`A:a..b`).
    #[error("Sequence too short for alpha-sequence")]
    AlphaTooShort { token: String },

    /// An alphabetic endpoint is not exactly one character.
    #[error("The parsed arguments are invalid ({start},{end})")]
    InvalidAlphaEndpoints { start: String, end: String },

    /// A single range would produce more values than one step may hold.
    #[error("range '{token}' produces {size} values, more than the limit of {limit}")]
    RangeTooLarge { token: String, size: u64, limit: u64 },

    /// The token is too short to tell numeric from alphabetic mode.
    #[error("range '{token}' is too short to determine its mode")]
    TokenTooShort { token: String },

    /// No ranges were supplied.
    #[error("Invalid sequence array")]
    EmptyRangeList,

    /// No template was supplied.
    #[error("Invalid template string")]
    MissingTemplate,

    /// The configured placeholder marker is unusable.
    #[error("Invalid placeholder marker '{marker}'")]
    InvalidPlaceholder { marker: String },

    /// Expansion was asked to start past the last range.
    #[error("range index {index} is out of bounds for {len} range(s)")]
    RangeIndexOutOfBounds { index: usize, len: usize },

    /// The template has no marker to substitute.
    #[error("template '{template}' contains no '{marker}' placeholder")]
    NoPlaceholder { template: String, marker: String },
}

impl GlobError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GlobError::InvalidEndpoint { .. } | GlobError::MissingSeparator { .. } => {
                ErrorKind::Format
            }
            GlobError::AlphaTooShort { .. }
            | GlobError::InvalidAlphaEndpoints { .. }
            | GlobError::TokenTooShort { .. }
            | GlobError::RangeTooLarge { .. } => ErrorKind::InvalidRange,
            GlobError::EmptyRangeList
            | GlobError::MissingTemplate
            | GlobError::InvalidPlaceholder { .. }
            | GlobError::RangeIndexOutOfBounds { .. } => ErrorKind::InvalidArgument,
            GlobError::NoPlaceholder { .. } => ErrorKind::NoPlaceholder,
        }
    }

    /// Returns the stable error code (shorthand for `self.kind().code()`).
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

/// Errors raised while analyzing a link plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// One of the sides compiled to nothing.
    #[error("One or both of the lists are empty")]
    EmptySide,

    /// The sides compiled to different numbers of entries.
    #[error("Sides do not match ({from} != {to})")]
    SizeMismatch { from: usize, to: usize },

    /// An entry could not be split into an ord and a slot.
    #[error("Could not parse ord ({entry})")]
    UnparsableOrd { entry: String },

    /// Compiling one of the sides failed.
    #[error(transparent)]
    Glob(#[from] GlobError),
}

impl PlanError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            PlanError::EmptySide => "P001",
            PlanError::SizeMismatch { .. } => "P002",
            PlanError::UnparsableOrd { .. } => "P003",
            PlanError::Glob(e) => e.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorKind::Format.code(), "G001");
        assert_eq!(ErrorKind::InvalidRange.code(), "G002");
        assert_eq!(ErrorKind::InvalidArgument.code(), "G003");
        assert_eq!(ErrorKind::NoPlaceholder.code(), "G004");
    }

    #[test]
    fn test_messages_are_verbatim() {
        assert_eq!(GlobError::EmptyRangeList.to_string(), "Invalid sequence array");
        assert_eq!(GlobError::MissingTemplate.to_string(), "Invalid template string");
        let err = GlobError::InvalidAlphaEndpoints {
            start: "ab".to_string(),
            end: "c".to_string(),
        };
        assert_eq!(err.to_string(), "The parsed arguments are invalid (ab,c)");
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
    }

    #[test]
    fn test_plan_error_codes() {
        let err = PlanError::SizeMismatch { from: 3, to: 2 };
        assert_eq!(err.to_string(), "Sides do not match (3 != 2)");
        assert_eq!(err.code(), "P002");

        let err = PlanError::from(GlobError::EmptyRangeList);
        assert_eq!(err.code(), "G003");
        assert_eq!(err.to_string(), "Invalid sequence array");
    }
}
