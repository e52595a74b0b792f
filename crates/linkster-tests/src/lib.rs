//! Linkster Integration Test Infrastructure
//!
//! This crate holds the cross-crate tests for expansion and link planning:
//!
//! - **Scenarios**: fixed template/range inputs with exact expected output
//! - **Properties**: proptest checks for counts, ordering and idempotence
//! - **Plan files**: plan and request files driven through the CLI commands
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p linkster-tests
//! ```

pub mod fixtures;
pub mod harness;

pub use harness::TestHarness;
