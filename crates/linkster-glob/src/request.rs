//! JSON expansion requests.
//!
//! ```json
//! {
//!   "template": "slot:/Building{[]}/Floor{[]}",
//!   "ranges": "1..2,1..10",
//!   "placeholder": "{[]}"
//! }
//! ```
//!
//! `ranges` may also be an array of tokens, and may be spelled `range`. Every field is optional at parse time;
//! missing pieces are reported when the request runs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GlobConfig;
use crate::error::GlobError;
use crate::tokenizer::convert_range;

/// Range tokens, either listed or as a single separated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeSpec {
    /// Tokens used as-is, in order.
    List(Vec<String>),
    /// A separated field such as `"1..2,A:a..c"`. Every token is validated.
    Field(String),
}

impl Default for RangeSpec {
    fn default() -> Self {
        RangeSpec::List(Vec::new())
    }
}

impl RangeSpec {
    /// Returns the ordered range tokens.
    pub fn tokens(&self, separator: char) -> Result<Vec<String>, GlobError> {
        match self {
            RangeSpec::List(tokens) => Ok(tokens.clone()),
            RangeSpec::Field(field) => convert_range(field, separator),
        }
    }
}

/// A template plus the ranges to expand it with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandRequest {
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default, alias = "range")]
    pub ranges: RangeSpec,
    #[serde(flatten)]
    pub config: GlobConfig,
}

impl ExpandRequest {
    /// Creates a request with the default configuration.
    pub fn new(template: impl Into<String>, ranges: RangeSpec) -> Self {
        Self {
            template: Some(template.into()),
            ranges,
            config: GlobConfig::default(),
        }
    }

    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Runs the expansion.
    ///
    /// The range list is checked before the template, so a request missing both
    /// reports the missing ranges.
    pub fn run(&self) -> Result<Vec<String>, GlobError> {
        let expander = self.config.expander()?;
        let ranges = self.ranges.tokens(self.config.separator)?;
        if ranges.is_empty() {
            return Err(GlobError::EmptyRangeList);
        }
        let template = self.template.as_deref().ok_or(GlobError::MissingTemplate)?;

        let results = expander.expand(template, &ranges, 0)?;
        debug!(template, ranges = ranges.len(), results = results.len(), "request expanded");
        Ok(results)
    }
}
