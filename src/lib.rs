//! dupesweep - perceptual image duplicate remover
//!
//! This library finds near-identical images in a directory and disposes of
//! the redundant copies.
//!
//! # Features
//!
//! - Perceptual hashing with configurable algorithm and hash size
//! - Deterministic duplicate selection (one kept representative per cluster)
//! - Move-to-trash or permanent-delete disposal
//! - Per-file failure isolation: one bad file never blocks the batch
//! - Machine-readable per-file outcomes in the run summary
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use dupesweep::{process, Config, PerceptualHasher};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.options.directory = Some(PathBuf::from("photos"));
//!
//!     let provider = PerceptualHasher::new(config.hashing.clone());
//!     let summary = process(&provider, &config)?;
//!
//!     println!("{} duplicates removed", summary.duplicates);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod dispose;
pub mod error;
pub mod fs;
pub mod hash;
pub mod output;

// Re-exports for convenience
pub use config::{Config, DisposalMode, HashAlgorithm};
pub use dispose::{process, Disposal, DisposalOutcome, Summary};
pub use error::{Error, Result};
pub use hash::{EncodingMap, HashProvider, PerceptualHasher};
