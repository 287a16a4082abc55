//! Filesystem module.
//!
//! Provides:
//! - Trash folder resolution
//! - Idempotent directory creation
//! - Image file detection by MIME type

pub mod paths;

pub use paths::{ensure_dir, is_image_file, trash_dir};
