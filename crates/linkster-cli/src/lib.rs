//! Linkster CLI library.
//!
//! This crate provides the command implementations behind the `linkster` binary:
//! template expansion, range checking and link planning.

pub mod commands;
pub mod logging;
