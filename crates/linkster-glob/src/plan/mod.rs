//! Link planning.
//!
//! A link batch pairs the compiled entries of a "from" side with those of a "to"
//! side, index by index. Analysis only checks the shape of the two lists; it does
//! not resolve ords against any live component tree.

mod ord;
mod side;


use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::GlobConfig;
use crate::error::PlanError;

pub use ord::{LinkPair, OrdSlot};
pub use side::Side;

/// Index-aligned pairs ready for linking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkPlan {
    pub pairs: Vec<LinkPair>,
}

/// Counts describing a [`LinkPlan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub links: usize,
    pub source_ords: usize,
    pub target_ords: usize,
}

impl LinkPlan {
    /// Checks two compiled sides and pairs them up.
    ///
    /// # Errors
    ///
    /// - [`PlanError::EmptySide`] if either side is empty
    /// - [`PlanError::SizeMismatch`] if the sides differ in length
    /// - [`PlanError::UnparsableOrd`] for the first entry (from side first) that
    ///   is not `<ord>.<slot>`
    pub fn analyze<S: AsRef<str>>(from: &[S], to: &[S]) -> Result<Self, PlanError> {
        if from.is_empty() || to.is_empty() {
            return Err(PlanError::EmptySide);
        }
        if from.len() != to.len() {
            return Err(PlanError::SizeMismatch {
                from: from.len(),
                to: to.len(),
            });
        }

        let from = parse_entries(from)?;
        let to = parse_entries(to)?;
        let pairs: Vec<LinkPair> = from
            .into_iter()
            .zip(to)
            .map(|(from, to)| LinkPair { from, to })
            .collect();

        debug!(links = pairs.len(), "link plan analyzed");
        Ok(Self { pairs })
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn summary(&self) -> PlanSummary {
        let source_ords: BTreeSet<&str> = self.pairs.iter().map(|p| p.from.ord.as_str()).collect();
        let target_ords: BTreeSet<&str> = self.pairs.iter().map(|p| p.to.ord.as_str()).collect();
        PlanSummary {
            links: self.pairs.len(),
            source_ords: source_ords.len(),
            target_ords: target_ords.len(),
        }
    }
}

fn parse_entries<S: AsRef<str>>(entries: &[S]) -> Result<Vec<OrdSlot>, PlanError> {
    entries
        .iter()
        .map(|entry| OrdSlot::parse(entry.as_ref()))
        .collect()
}

/// A link batch as stored on disk.
///
/// ```json
/// {
///   "from": { "template": "slot:/AHU{[]}", "range": "1..3", "slot": "out" },
///   "to":   { "template": "slot:/VAV{[]}", "range": "1..3", "slot": "in" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFile {
    #[serde(default)]
    pub config: GlobConfig,
    pub from: Side,
    pub to: Side,
}

/// Both compiled sides of a plan file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSides {
    pub from: Vec<String>,
    pub to: Vec<String>,
}

impl PlanFile {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Compiles both sides with this file's configuration.
    pub fn compile(&self) -> Result<CompiledSides, PlanError> {
        let expander = self.config.expander()?;
        let from = self.from.compile(&expander, self.config.separator)?;
        let to = self.to.compile(&expander, self.config.separator)?;
        info!(from = from.len(), to = to.len(), "sides compiled");
        Ok(CompiledSides { from, to })
    }

    /// Compiles and analyzes both sides.
    pub fn build(&self) -> Result<LinkPlan, PlanError> {
        let sides = self.compile()?;
        LinkPlan::analyze(&sides.from, &sides.to)
    }
}
