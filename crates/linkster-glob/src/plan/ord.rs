//! Ord/slot entries and the pairs built from them.

use serde::Serialize;

use crate::error::PlanError;

/// A compiled entry split into its component path and slot name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OrdSlot {
    pub ord: String,
    pub slot: String,
}

impl OrdSlot {
    /// Splits `entry` at its last `'.'`. Both halves must be non-empty.
    pub fn parse(entry: &str) -> Result<Self, PlanError> {
        match entry.rsplit_once('.') {
            Some((ord, slot)) if !ord.is_empty() && !slot.is_empty() => Ok(Self {
                ord: ord.to_string(),
                slot: slot.to_string(),
            }),
            _ => Err(PlanError::UnparsableOrd {
                entry: entry.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for OrdSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.ord, self.slot)
    }
}

/// A source/target pair at the same index of both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkPair {
    pub from: OrdSlot,
    pub to: OrdSlot,
}

impl LinkPair {
    /// Name given to the link on the target component.
    pub fn link_name(&self) -> String {
        format!("rwLink_{}_{}", self.from.slot, self.to.slot)
    }
}

impl std::fmt::Display for LinkPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
