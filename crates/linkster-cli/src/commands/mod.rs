//! CLI command implementations

pub mod check_range;
pub mod expand;
pub mod json_output;
pub mod plan;
