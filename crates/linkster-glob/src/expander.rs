//! Template expansion.
//!
//! An [`Expander`] resolves placeholder markers in a template, one marker per
//! range token, in range-list order. Each step replaces only the *first* marker
//! still present; the remaining markers ride along in the tail and are consumed
//! by later steps, which gives depth-first, row-major output:
//!
//! ```text
//! "B{[]}/F{[]}" x ["1..2", "1..2"]
//!   -> B1/F{[]} -> B1/F1, B1/F2
//!   -> B2/F{[]} -> B2/F1, B2/F2
//! ```

use tracing::{debug, trace};

use crate::error::GlobError;
use crate::range::resolve_range;

/// Marker used when no other is configured.
pub const DEFAULT_PLACEHOLDER: &str = "{[]}";

/// Most values a single range may produce in one expansion step.
pub const MAX_STEP_VALUES: u64 = 1_000_000;

/// Expands templates against range tokens.
///
/// The placeholder marker is fixed at construction; an `Expander` is immutable
/// and can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expander {
    placeholder: String,
}

impl Default for Expander {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl Expander {
    /// Creates an expander using [`DEFAULT_PLACEHOLDER`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an expander with a custom marker. The marker must not be empty.
    pub fn with_placeholder(marker: impl Into<String>) -> Result<Self, GlobError> {
        let placeholder = marker.into();
        if placeholder.is_empty() {
            return Err(GlobError::InvalidPlaceholder { marker: placeholder });
        }
        Ok(Self { placeholder })
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Returns true if `text` still contains an unresolved marker.
    pub fn has_placeholder(&self, text: &str) -> bool {
        text.contains(self.placeholder.as_str())
    }

    /// Expands the first marker of `template` against a single range token.
    ///
    /// Produces one string per value of the range, in ascending order. A range
    /// whose start lies above its end produces nothing.
    ///
    /// # Errors
    ///
    /// - [`GlobError::NoPlaceholder`] if the template has no marker
    /// - [`GlobError::RangeTooLarge`] if the range exceeds [`MAX_STEP_VALUES`]
    /// - any error from resolving `token` (see [`crate::range`])
    pub fn expand_once(&self, template: &str, token: &str) -> Result<Vec<String>, GlobError> {
        let position =
            template
                .find(self.placeholder.as_str())
                .ok_or_else(|| GlobError::NoPlaceholder {
                    template: template.to_string(),
                    marker: self.placeholder.clone(),
                })?;
        let prefix = &template[..position];
        let tail = &template[position + self.placeholder.len()..];

        let interval = resolve_range(token)?;
        let size = interval.size();
        if size > MAX_STEP_VALUES {
            return Err(GlobError::RangeTooLarge {
                token: token.to_string(),
                size,
                limit: MAX_STEP_VALUES,
            });
        }
        trace!(template, token, ?interval, "expanding first placeholder");

        Ok(interval
            .values()
            .map(|value| {
                let mut out = String::with_capacity(prefix.len() + value.len() + tail.len());
                out.push_str(prefix);
                out.push_str(&value);
                out.push_str(tail);
                out
            })
            .collect())
    }

    /// Expands every marker of `template`, consuming `ranges` in order starting at
    /// `start_index`.
    ///
    /// Recursion continues while the produced strings still hold a marker and an
    /// unused range remains. With fewer ranges than markers the leftover markers
    /// are returned unresolved; surplus ranges are ignored. A template with no
    /// marker comes back unchanged.
    ///
    /// # Errors
    ///
    /// - [`GlobError::EmptyRangeList`] if `ranges` is empty
    /// - [`GlobError::RangeIndexOutOfBounds`] if `start_index` is past the end
    /// - any error from a deeper expansion step, unchanged
    pub fn expand<S: AsRef<str>>(
        &self,
        template: &str,
        ranges: &[S],
        start_index: usize,
    ) -> Result<Vec<String>, GlobError> {
        if ranges.is_empty() {
            return Err(GlobError::EmptyRangeList);
        }
        let token: &str = ranges
            .get(start_index)
            .ok_or(GlobError::RangeIndexOutOfBounds {
                index: start_index,
                len: ranges.len(),
            })?
            .as_ref();

        if !self.has_placeholder(template) {
            return Ok(vec![template.to_string()]);
        }

        let step = self.expand_once(template, token)?;
        debug!(
            template,
            token,
            depth = start_index,
            produced = step.len(),
            "expansion step"
        );

        // Every string in a step shares the same tail, so the last one speaks for all.
        let unresolved = step.last().is_some_and(|last| self.has_placeholder(last));
        if !unresolved || start_index + 1 >= ranges.len() {
            return Ok(step);
        }

        let mut results = Vec::new();
        for partial in &step {
            results.extend(self.expand(partial, ranges, start_index + 1)?);
        }
        Ok(results)
    }
}
