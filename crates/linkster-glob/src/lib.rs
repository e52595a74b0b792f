//! Linkster template-sequence expansion.
//!
//! This crate turns a template containing placeholder markers plus an ordered list
//! of ranges into every concrete string those ranges describe. It is the engine
//! behind batch link creation: a template like
//! `slot:/Building{[]}/Floor{[]}` and ranges `1..2,1..10` name twenty components
//! in one go.
//!
//! # Example
//!
//! ```
//! use linkster_glob::Expander;
//!
//! let expander = Expander::default();
//! let results = expander
//!     .expand("Building{[]}/Floor{[]}", &["1..2", "A:a..b"], 0)
//!     .unwrap();
//!
//! assert_eq!(
//!     results,
//!     vec!["Building1/Floora", "Building1/Floorb", "Building2/Floora", "Building2/Floorb"]
//! );
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`]: splitting range fields into tokens
//! - [`range`]: numeric and alphabetic range parsing
//! - [`expander`]: single-step and recursive expansion
//! - [`request`]: JSON expansion requests
//! - [`plan`]: pairing two expanded sides into a link plan
//! - [`config`]: placeholder and separator settings
//! - [`error`]: error types and codes

pub mod config;
pub mod error;
pub mod expander;
pub mod plan;
pub mod range;
pub mod request;
pub mod tokenizer;

// Re-export commonly used types at the crate root
pub use config::GlobConfig;
pub use error::{ErrorKind, GlobError, PlanError};
pub use expander::{Expander, DEFAULT_PLACEHOLDER, MAX_STEP_VALUES};
pub use plan::{CompiledSides, LinkPair, LinkPlan, OrdSlot, PlanFile, PlanSummary, Side};
pub use range::{
    contains_alpha_marker, looks_alpha_at_start, parse_alpha_range, parse_range, resolve_range,
    validate_range, Interval, RangeMode,
};
pub use request::{ExpandRequest, RangeSpec};
pub use tokenizer::{convert_range, split, DEFAULT_SEPARATOR};
