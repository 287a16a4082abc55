//! Disposal mode and hash algorithm definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do with a duplicate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisposalMode {
    /// Move duplicates into the trash folder (default).
    #[default]
    Trash,
    /// Delete duplicates permanently.
    Delete,
}

impl fmt::Display for DisposalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisposalMode::Trash => write!(f, "trash"),
            DisposalMode::Delete => write!(f, "delete"),
        }
    }
}

impl FromStr for DisposalMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trash" => Ok(DisposalMode::Trash),
            "delete" => Ok(DisposalMode::Delete),
            _ => Err(format!("Unknown disposal mode: {}", s)),
        }
    }
}

/// Perceptual hash algorithm used for encoding images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HashAlgorithm {
    /// Mean hash (fastest, least robust).
    Mean,
    /// Horizontal gradient hash.
    Gradient,
    /// Combined horizontal and vertical gradient hash (default).
    #[default]
    DoubleGradient,
    /// Blockhash.io algorithm.
    Blockhash,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Mean => write!(f, "mean"),
            HashAlgorithm::Gradient => write!(f, "gradient"),
            HashAlgorithm::DoubleGradient => write!(f, "double-gradient"),
            HashAlgorithm::Blockhash => write!(f, "blockhash"),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(HashAlgorithm::Mean),
            "gradient" => Ok(HashAlgorithm::Gradient),
            "double-gradient" | "doublegradient" => Ok(HashAlgorithm::DoubleGradient),
            "blockhash" => Ok(HashAlgorithm::Blockhash),
            _ => Err(format!("Unknown hash algorithm: {}", s)),
        }
    }
}
