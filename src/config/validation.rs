//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Minimum hash size accepted by the hasher.
const MIN_HASH_SIZE: u32 = 4;

/// Maximum hash size accepted by the hasher.
const MAX_HASH_SIZE: u32 = 64;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_trash_folder(&config.options.trash_folder)?;
    validate_hash_size(config.hashing.hash_size)?;
    validate_threshold(config.hashing.distance_threshold, config.hashing.hash_size)?;

    Ok(())
}

/// Validate the trash folder name.
///
/// The folder is created directly under the scanned directory, so the name
/// must be a single path component.
pub fn validate_trash_folder(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::MissingConfig("trash_folder".to_string()));
    }

    if name == "." || name == ".." || name.contains('/') || name.contains('\\') {
        return Err(Error::ConfigValidation {
            field: "trash_folder".to_string(),
            message: format!(
                "'{}' must be a plain folder name without path separators",
                name
            ),
        });
    }

    Ok(())
}

/// Validate the hash size.
pub fn validate_hash_size(hash_size: u32) -> Result<()> {
    if !(MIN_HASH_SIZE..=MAX_HASH_SIZE).contains(&hash_size) {
        return Err(Error::ConfigValidation {
            field: "hash_size".to_string(),
            message: format!(
                "Hash size must be between {} and {} (got {})",
                MIN_HASH_SIZE, MAX_HASH_SIZE, hash_size
            ),
        });
    }

    Ok(())
}

/// Validate the distance threshold against the hash size.
///
/// A hash of N×N bits can differ in at most N×N positions, so any larger
/// threshold would mark every image a duplicate of every other.
pub fn validate_threshold(threshold: u32, hash_size: u32) -> Result<()> {
    let max_distance = hash_size * hash_size;
    if threshold >= max_distance {
        return Err(Error::ConfigValidation {
            field: "distance_threshold".to_string(),
            message: format!(
                "Threshold must be below {} for a {}x{} hash (got {})",
                max_distance, hash_size, hash_size, threshold
            ),
        });
    }

    Ok(())
}
