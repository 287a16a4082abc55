//! Per-file disposal outcomes and the run summary.

use serde::Serialize;
use std::path::PathBuf;

/// What happened to a single duplicate file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "result")]
pub enum DisposalOutcome {
    /// Moved into the trash folder.
    Moved,
    /// Deleted permanently.
    Deleted,
    /// Already absent from disk; treated as handled.
    Skipped,
    /// Move or delete failed; the batch continued.
    Failed { message: String },
}

/// Outcome for one file of the duplicate set.
#[derive(Debug, Clone, Serialize)]
pub struct Disposal {
    pub filename: String,
    #[serde(flatten)]
    pub outcome: DisposalOutcome,
}

/// Aggregate result of a `process` run.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Total images encoded (size of the encoding map).
    pub total_images: usize,

    /// Duplicates reported by the hash provider.
    pub duplicates: usize,

    /// Destination folder when moving; `None` in delete mode or when the
    /// duplicate set was empty.
    pub trash_dir: Option<PathBuf>,

    /// Per-file outcomes, in disposal order.
    pub outcomes: Vec<Disposal>,
}

impl Summary {
    /// Create a summary with counts but no outcomes yet.
    pub fn new(total_images: usize, duplicates: usize) -> Self {
        Self {
            total_images,
            duplicates,
            trash_dir: None,
            outcomes: Vec::with_capacity(duplicates),
        }
    }

    /// Record the outcome for one file.
    pub fn record(&mut self, filename: String, outcome: DisposalOutcome) {
        self.outcomes.push(Disposal { filename, outcome });
    }

    /// Unique images remaining after disposal.
    pub fn unique_images(&self) -> usize {
        self.total_images - self.duplicates
    }

    /// Number of files moved into the trash folder.
    pub fn moved_count(&self) -> usize {
        self.count(|o| matches!(o, DisposalOutcome::Moved))
    }

    /// Number of files deleted.
    pub fn deleted_count(&self) -> usize {
        self.count(|o| matches!(o, DisposalOutcome::Deleted))
    }

    /// Number of files that were already absent.
    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, DisposalOutcome::Skipped))
    }

    /// Number of files whose disposal failed.
    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, DisposalOutcome::Failed { .. }))
    }

    /// Whether any disposal failed.
    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    fn count(&self, predicate: impl Fn(&DisposalOutcome) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|d| predicate(&d.outcome))
            .count()
    }
}
