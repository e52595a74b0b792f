//! Expansion settings shared by request and plan files.

use serde::{Deserialize, Serialize};

use crate::error::GlobError;
use crate::expander::{Expander, DEFAULT_PLACEHOLDER};
use crate::tokenizer::DEFAULT_SEPARATOR;

/// Placeholder marker and range separator.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobConfig {
    /// Marker substituted by each expansion step.
    pub placeholder: String,
    /// Character separating range tokens in a range field.
    pub separator: char,
}

impl Default for GlobConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl GlobConfig {
    /// Replaces the placeholder marker if one is given.
    pub fn with_placeholder_override(mut self, placeholder: Option<&str>) -> Self {
        if let Some(p) = placeholder {
            self.placeholder = p.to_string();
        }
        self
    }

    /// Builds the expander for this configuration.
    pub fn expander(&self) -> Result<Expander, GlobError> {
        Expander::with_placeholder(self.placeholder.as_str())
    }
}
