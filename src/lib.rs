//! compare-size - artifact size tracking
//!
//! Measures raw and compressed sizes of build outputs, compares them with
//! sizes recorded for branch tips and named labels, and keeps the results
//! in a JSON size cache.

pub mod cache;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod measure;
pub mod ui;
pub mod vcs;

pub use error::{SizeError, SizeResult};
