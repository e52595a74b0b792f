//! JSON output types for machine-readable CLI output.
//!
//! These back the `--json` flag on `expand`, `check-range` and `plan`.

use linkster_glob::{GlobError, Interval, LinkPair, PlanError, PlanSummary};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// Engine and planning errors pass their own codes through (`G00x`, `P00x`).
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "G001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&GlobError> for JsonError {
    fn from(err: &GlobError) -> Self {
        JsonError::new(err.code(), err.to_string())
    }
}

impl From<&PlanError> for JsonError {
    fn from(err: &PlanError) -> Self {
        JsonError::new(err.code(), err.to_string())
    }
}

/// JSON output for the `expand` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandOutput {
    pub success: bool,
    pub count: usize,
    pub results: Vec<String>,
    pub errors: Vec<JsonError>,
}

impl ExpandOutput {
    pub fn success(results: Vec<String>) -> Self {
        Self {
            success: true,
            count: results.len(),
            results,
            errors: Vec::new(),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            count: 0,
            results: Vec::new(),
            errors,
        }
    }
}

/// One token in `check-range` output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenReport {
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

impl TokenReport {
    pub fn from_result(token: &str, result: &Result<Interval, GlobError>) -> Self {
        match result {
            Ok(interval) => Self {
                token: token.to_string(),
                mode: Some(interval.mode().to_string()),
                size: Some(interval.size()),
                error: None,
            },
            Err(e) => Self {
                token: token.to_string(),
                mode: None,
                size: None,
                error: Some(JsonError::from(e)),
            },
        }
    }
}

/// JSON output for the `check-range` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRangeOutput {
    pub success: bool,
    pub tokens: Vec<TokenReport>,
}

/// One link in `plan` output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkRecord {
    pub index: usize,
    pub from: String,
    pub from_slot: String,
    pub to: String,
    pub to_slot: String,
    pub link_name: String,
}

impl LinkRecord {
    pub fn new(index: usize, pair: &LinkPair) -> Self {
        Self {
            index,
            from: pair.from.ord.clone(),
            from_slot: pair.from.slot.clone(),
            to: pair.to.ord.clone(),
            to_slot: pair.to.slot.clone(),
            link_name: pair.link_name(),
        }
    }
}

/// JSON output for the `plan` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<PlanSummary>,
    pub links: Vec<LinkRecord>,
    pub errors: Vec<JsonError>,
}

impl PlanOutput {
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            summary: None,
            links: Vec::new(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_error_to_json() {
        let err = JsonError::from(&GlobError::EmptyRangeList);
        assert_eq!(err.code, "G003");
        assert_eq!(err.message, "Invalid sequence array");
    }

    #[test]
    fn test_expand_output_serialization() {
        let output = ExpandOutput::success(vec!["F1".to_string(), "F2".to_string()]);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 2);
        assert_eq!(json["results"][1], "F2");
    }

    #[test]
    fn test_json_error_skips_missing_file() {
        let json = serde_json::to_string(&JsonError::new("CLI_001", "nope")).unwrap();
        assert!(!json.contains("file"));

        let json =
            serde_json::to_string(&JsonError::new("CLI_001", "nope").with_file("a.json")).unwrap();
        assert!(json.contains(r#""file":"a.json""#));
    }

    #[test]
    fn test_token_report() {
        let ok = TokenReport::from_result("1..4", &linkster_glob::resolve_range("1..4"));
        assert_eq!(ok.mode.as_deref(), Some("numeric"));
        assert_eq!(ok.size, Some(4));

        let bad = TokenReport::from_result("1-4", &linkster_glob::resolve_range("1-4"));
        assert_eq!(bad.error.unwrap().code, "G001");
    }
}
