//! Configuration module for dupesweep.
//!
//! This module handles:
//! - Loading and saving the TOML configuration file
//! - Disposal mode and hash algorithm definitions
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, HashingConfig, OptionsConfig};
pub use modes::{DisposalMode, HashAlgorithm};
pub use validation::validate_config;
