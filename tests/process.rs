//! Integration tests for the duplicate resolution and disposal flow.

use std::fs;
use std::path::{Path, PathBuf};

use dupesweep::{
    process, Config, DisposalMode, DisposalOutcome, EncodingMap, HashProvider, Result, Summary,
};

/// Provider stub returning canned encodings and duplicates, so the disposal
/// policy can be exercised without real images.
struct StubProvider {
    encodings: EncodingMap,
    duplicates: Vec<String>,
}

impl StubProvider {
    fn new(filenames: &[&str], duplicates: &[&str]) -> Self {
        let encodings: EncodingMap = filenames
            .iter()
            .map(|name| (name.to_string(), format!("enc-{}", name)))
            .collect();
        Self {
            encodings,
            duplicates: duplicates.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl HashProvider for StubProvider {
    fn encode(&self, _directory: &Path) -> Result<EncodingMap> {
        Ok(self.encodings.clone())
    }

    fn select_duplicates(&self, _encodings: &EncodingMap) -> Result<Vec<String>> {
        Ok(self.duplicates.clone())
    }
}

fn quiet_config(directory: &Path, mode: DisposalMode) -> Config {
    let mut config = Config::default();
    config.options.directory = Some(directory.to_path_buf());
    config.options.disposal_mode = mode;
    config.options.show_progress = false;
    config
}

fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), name.as_bytes()).unwrap();
    }
}

fn outcome_of<'a>(summary: &'a Summary, filename: &str) -> &'a DisposalOutcome {
    &summary
        .outcomes
        .iter()
        .find(|d| d.filename == filename)
        .unwrap()
        .outcome
}

#[test]
fn no_duplicates_means_no_mutations() {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), &["a.jpg", "b.jpg"]);

    let provider = StubProvider::new(&["a.jpg", "b.jpg"], &[]);
    let config = quiet_config(tmp.path(), DisposalMode::Trash);

    let summary = process(&provider, &config).unwrap();

    assert_eq!(summary.total_images, 2);
    assert_eq!(summary.duplicates, 0);
    assert_eq!(summary.unique_images(), 2);
    assert!(summary.trash_dir.is_none());
    assert!(summary.outcomes.is_empty());

    // No trash folder created, originals untouched.
    assert!(!tmp.path().join("duplicates").exists());
    assert!(tmp.path().join("a.jpg").exists());
    assert!(tmp.path().join("b.jpg").exists());
}

#[test]
fn move_mode_relocates_duplicates() {
    let tmp = tempfile::tempdir().unwrap();
    let files = ["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg"];
    touch(tmp.path(), &files);

    let provider = StubProvider::new(&files, &["b.jpg", "d.jpg"]);
    let config = quiet_config(tmp.path(), DisposalMode::Trash);

    let summary = process(&provider, &config).unwrap();

    assert_eq!(summary.total_images, 5);
    assert_eq!(summary.duplicates, 2);
    assert_eq!(summary.unique_images(), 3);
    assert_eq!(summary.moved_count(), 2);
    assert_eq!(summary.trash_dir, Some(tmp.path().join("duplicates")));

    for name in ["b.jpg", "d.jpg"] {
        assert!(!tmp.path().join(name).exists());
        assert!(tmp.path().join("duplicates").join(name).exists());
    }
    for name in ["a.jpg", "c.jpg", "e.jpg"] {
        assert!(tmp.path().join(name).exists());
    }
}

#[test]
fn delete_mode_removes_duplicates() {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), &["a.jpg", "b.jpg", "c.jpg"]);

    let provider = StubProvider::new(&["a.jpg", "b.jpg", "c.jpg"], &["c.jpg"]);
    let config = quiet_config(tmp.path(), DisposalMode::Delete);

    let summary = process(&provider, &config).unwrap();

    assert_eq!(summary.deleted_count(), 1);
    assert!(summary.trash_dir.is_none());
    assert!(!tmp.path().join("c.jpg").exists());
    assert!(!tmp.path().join("duplicates").exists());
    assert!(tmp.path().join("a.jpg").exists());
}

#[test]
fn missing_file_is_skipped_without_error() {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), &["a.jpg", "b.jpg"]);

    // "gone.jpg" was encoded but vanished before disposal.
    let provider = StubProvider::new(&["a.jpg", "b.jpg", "gone.jpg"], &["gone.jpg", "b.jpg"]);
    let config = quiet_config(tmp.path(), DisposalMode::Trash);

    let summary = process(&provider, &config).unwrap();

    // Aggregate counts are derived from the maps, not the skips.
    assert_eq!(summary.total_images, 3);
    assert_eq!(summary.duplicates, 2);
    assert_eq!(summary.unique_images(), 1);
    assert_eq!(summary.skipped_count(), 1);
    assert_eq!(summary.moved_count(), 1);
    assert_eq!(*outcome_of(&summary, "gone.jpg"), DisposalOutcome::Skipped);
    assert!(tmp.path().join("duplicates").join("b.jpg").exists());
}

#[test]
fn per_file_failure_does_not_block_the_batch() {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), &["a.jpg", "c.jpg"]);
    // A non-empty directory where a file is expected: remove_file fails on it.
    fs::create_dir(tmp.path().join("b.jpg")).unwrap();
    fs::write(tmp.path().join("b.jpg").join("inner"), "x").unwrap();

    let provider = StubProvider::new(&["a.jpg", "b.jpg", "c.jpg"], &["b.jpg", "c.jpg"]);
    let config = quiet_config(tmp.path(), DisposalMode::Delete);

    let summary = process(&provider, &config).unwrap();

    assert_eq!(summary.failed_count(), 1);
    assert!(matches!(
        outcome_of(&summary, "b.jpg"),
        DisposalOutcome::Failed { .. }
    ));
    // The failure did not stop the next file from being deleted.
    assert_eq!(*outcome_of(&summary, "c.jpg"), DisposalOutcome::Deleted);
    assert!(!tmp.path().join("c.jpg").exists());
}

#[test]
fn trash_folder_creation_is_idempotent() {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), &["a.jpg", "b.jpg"]);
    fs::create_dir(tmp.path().join("duplicates")).unwrap();

    let provider = StubProvider::new(&["a.jpg", "b.jpg"], &["b.jpg"]);
    let config = quiet_config(tmp.path(), DisposalMode::Trash);

    let summary = process(&provider, &config).unwrap();
    assert_eq!(summary.moved_count(), 1);
    assert!(tmp.path().join("duplicates").join("b.jpg").exists());
}

#[test]
fn second_run_after_move_does_not_crash() {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), &["a.jpg", "b.jpg"]);

    let provider = StubProvider::new(&["a.jpg", "b.jpg"], &["b.jpg"]);
    let config = quiet_config(tmp.path(), DisposalMode::Trash);
    let first = process(&provider, &config).unwrap();
    assert_eq!(first.moved_count(), 1);

    // Re-scan of the changed directory: b.jpg is gone from the top level.
    let provider = StubProvider::new(&["a.jpg"], &[]);
    let second = process(&provider, &config).unwrap();

    assert_eq!(second.total_images, 1);
    assert_eq!(second.duplicates, 0);
    assert!(second.duplicates < first.total_images);
}

#[test]
fn custom_trash_folder_is_honored() {
    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), &["a.jpg", "b.jpg"]);

    let provider = StubProvider::new(&["a.jpg", "b.jpg"], &["b.jpg"]);
    let mut config = quiet_config(tmp.path(), DisposalMode::Trash);
    config.options.trash_folder = "culled".to_string();

    let summary = process(&provider, &config).unwrap();

    assert_eq!(summary.trash_dir, Some(tmp.path().join("culled")));
    assert!(tmp.path().join("culled").join("b.jpg").exists());
    assert!(!tmp.path().join("duplicates").exists());
}

/// Provider failures are fatal: nothing is disposed of.
#[test]
fn provider_failure_propagates() {
    struct FailingProvider;

    impl HashProvider for FailingProvider {
        fn encode(&self, directory: &Path) -> Result<EncodingMap> {
            Err(dupesweep::Error::Scan(format!(
                "{}: unreadable",
                directory.display()
            )))
        }

        fn select_duplicates(&self, _encodings: &EncodingMap) -> Result<Vec<String>> {
            unreachable!("encode already failed")
        }
    }

    let tmp = tempfile::tempdir().unwrap();
    touch(tmp.path(), &["a.jpg"]);

    let config = quiet_config(tmp.path(), DisposalMode::Trash);
    assert!(process(&FailingProvider, &config).is_err());
    assert!(tmp.path().join("a.jpg").exists());
}

/// Stubs above pin the policy; this exercises the real perceptual provider
/// end to end on generated images.
#[test]
fn end_to_end_with_real_hasher() {
    use dupesweep::PerceptualHasher;
    use image::{DynamicImage, Rgb, RgbImage};

    fn gradient_png(path: &PathBuf, reversed: bool) {
        let img = RgbImage::from_fn(64, 64, |x, _| {
            let v = (x * 4) as u8;
            let v = if reversed { 255 - v } else { v };
            Rgb([v, v, v])
        });
        DynamicImage::ImageRgb8(img).save(path).unwrap();
    }

    let tmp = tempfile::tempdir().unwrap();
    gradient_png(&tmp.path().join("a.png"), false);
    gradient_png(&tmp.path().join("b.png"), false);
    gradient_png(&tmp.path().join("other.png"), true);

    let mut config = quiet_config(tmp.path(), DisposalMode::Trash);
    config.hashing.distance_threshold = 0;

    let provider = PerceptualHasher::new(config.hashing.clone());
    let summary = process(&provider, &config).unwrap();

    assert_eq!(summary.total_images, 3);
    assert_eq!(summary.duplicates, 1);
    // Sorted selection keeps a.png and removes b.png.
    assert!(tmp.path().join("a.png").exists());
    assert!(!tmp.path().join("b.png").exists());
    assert!(tmp.path().join("duplicates").join("b.png").exists());
    assert!(tmp.path().join("other.png").exists());
}
