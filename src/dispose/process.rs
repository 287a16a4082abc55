//! Duplicate resolution and disposal.

use std::fs;

use crate::config::{Config, DisposalMode};
use crate::dispose::outcome::{DisposalOutcome, Summary};
use crate::error::Result;
use crate::fs::{ensure_dir, trash_dir};
use crate::hash::HashProvider;
use crate::output::{create_item_bar, print_info, print_warning};

/// Find duplicates under the configured directory and dispose of them.
///
/// Disposal runs strictly one file at a time, in the order the provider
/// produced. A failure on one file is recorded and does not abort the rest
/// of the batch; a file already absent from disk is skipped as handled.
/// Provider failures are fatal and propagate.
pub fn process<P: HashProvider>(provider: &P, config: &Config) -> Result<Summary> {
    let directory = config.scan_directory();

    let encodings = provider.encode(&directory)?;
    let duplicates = provider.select_duplicates(&encodings)?;

    let mut summary = Summary::new(encodings.len(), duplicates.len());
    if duplicates.is_empty() {
        return Ok(summary);
    }

    let destination = match config.options.disposal_mode {
        DisposalMode::Trash => {
            let dir = trash_dir(config);
            ensure_dir(&dir)?;
            summary.trash_dir = Some(dir.clone());
            Some(dir)
        }
        DisposalMode::Delete => None,
    };

    let bar = config
        .options
        .show_progress
        .then(|| create_item_bar(duplicates.len() as u64, "Disposing"));

    for filename in duplicates {
        let path = directory.join(&filename);

        let outcome = if !path.exists() {
            if config.options.show_skipped {
                print_info(&format!("Skipping {} (already gone)", filename));
            }
            DisposalOutcome::Skipped
        } else {
            let result = match &destination {
                // Filename is preserved; on a name clash the last move wins.
                Some(dir) => fs::rename(&path, dir.join(&filename)).map(|_| DisposalOutcome::Moved),
                None => fs::remove_file(&path).map(|_| DisposalOutcome::Deleted),
            };

            match result {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!("Failed to dispose of {}: {}", filename, e);
                    if config.options.show_progress {
                        print_warning(&format!("Error processing {}: {}", filename, e));
                    }
                    DisposalOutcome::Failed {
                        message: e.to_string(),
                    }
                }
            }
        };

        summary.record(filename, outcome);
        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }

    Ok(summary)
}
