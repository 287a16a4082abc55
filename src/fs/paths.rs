//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

/// Get the folder duplicates are moved into for the configured directory.
pub fn trash_dir(config: &Config) -> PathBuf {
    config.scan_directory().join(&config.options.trash_folder)
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Check whether a path looks like an image file, based on its extension.
pub fn is_image_file(path: &Path) -> bool {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.type_() == mime_guess::mime::IMAGE)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trash_dir() {
        let mut config = Config::default();
        config.options.directory = Some(PathBuf::from("/photos"));

        assert_eq!(trash_dir(&config), PathBuf::from("/photos/duplicates"));

        config.options.trash_folder = "culled".to_string();
        assert_eq!(trash_dir(&config), PathBuf::from("/photos/culled"));
    }

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("a.jpg")));
        assert!(is_image_file(Path::new("b.PNG")));
        assert!(is_image_file(Path::new("c.webp")));
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("movie.mp4")));
        assert!(!is_image_file(Path::new("no_extension")));
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("duplicates");

        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }
}
