//! Configuration structures and loading logic.

use crate::config::modes::{DisposalMode, HashAlgorithm};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub hashing: HashingConfig,
}

/// Disposal and output options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Directory to scan for duplicate images.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// What to do with duplicates (trash or delete).
    #[serde(default)]
    pub disposal_mode: DisposalMode,

    /// Name of the subfolder duplicates are moved into.
    #[serde(default = "default_trash_folder")]
    pub trash_folder: String,

    /// Whether to show progress bars.
    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// Whether to print per-file skip messages.
    #[serde(default)]
    pub show_skipped: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            directory: None,
            disposal_mode: DisposalMode::default(),
            trash_folder: default_trash_folder(),
            show_progress: true,
            show_skipped: false,
        }
    }
}

/// Perceptual hashing options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashingConfig {
    /// Hash algorithm to use.
    #[serde(default)]
    pub algorithm: HashAlgorithm,

    /// Hash size in bits per dimension.
    #[serde(default = "default_hash_size")]
    pub hash_size: u32,

    /// Maximum Hamming distance for two images to count as duplicates.
    #[serde(default = "default_distance_threshold")]
    pub distance_threshold: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::default(),
            hash_size: default_hash_size(),
            distance_threshold: default_distance_threshold(),
        }
    }
}

fn default_trash_folder() -> String {
    "duplicates".to_string()
}

fn default_true() -> bool {
    true
}

fn default_hash_size() -> u32 {
    16
}

fn default_distance_threshold() -> u32 {
    10
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the effective scan directory.
    pub fn scan_directory(&self) -> PathBuf {
        self.options
            .directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}
