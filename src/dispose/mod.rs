//! Duplicate resolution and disposal module.
//!
//! Provides:
//! - The `process` entry point (encode, select, dispose)
//! - Per-file disposal outcomes and the run summary

pub mod outcome;
pub mod process;

pub use outcome::{Disposal, DisposalOutcome, Summary};
pub use process::process;
