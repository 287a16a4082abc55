//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, DisposalMode, HashAlgorithm};

/// Perceptual image duplicate remover CLI.
#[derive(Parser, Debug)]
#[command(
    name = "dupesweep",
    version,
    about = "Find and remove perceptually duplicate images",
    long_about = "Scans a directory for near-identical images using perceptual hashing,\n\
                  keeps one representative per duplicate cluster and moves the rest into\n\
                  a 'duplicates' folder (or deletes them with --delete)."
)]
pub struct Args {
    /// Directory to scan for duplicate images.
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Delete duplicates instead of moving them to the trash folder.
    #[arg(long)]
    pub delete: bool,

    /// Name of the folder duplicates are moved into.
    #[arg(long, value_name = "NAME")]
    pub trash_folder: Option<String>,

    /// Perceptual hash algorithm.
    #[arg(long, value_enum)]
    pub algorithm: Option<HashAlgorithmArg>,

    /// Hash size in bits per dimension.
    #[arg(long)]
    pub hash_size: Option<u32>,

    /// Maximum Hamming distance for two images to count as duplicates.
    #[arg(long)]
    pub threshold: Option<u32>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "dupesweep.toml")]
    pub config: PathBuf,

    /// Hide progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Show information about skipped files.
    #[arg(long)]
    pub show_skipped: bool,

    /// Print the summary as JSON instead of styled text.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI hash algorithm argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HashAlgorithmArg {
    /// Mean hash (fastest, least robust).
    Mean,
    /// Horizontal gradient hash.
    Gradient,
    /// Combined horizontal and vertical gradient hash.
    DoubleGradient,
    /// Blockhash.io algorithm.
    Blockhash,
}

impl From<HashAlgorithmArg> for HashAlgorithm {
    fn from(arg: HashAlgorithmArg) -> Self {
        match arg {
            HashAlgorithmArg::Mean => HashAlgorithm::Mean,
            HashAlgorithmArg::Gradient => HashAlgorithm::Gradient,
            HashAlgorithmArg::DoubleGradient => HashAlgorithm::DoubleGradient,
            HashAlgorithmArg::Blockhash => HashAlgorithm::Blockhash,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        config.options.directory = Some(self.directory);

        if self.delete {
            config.options.disposal_mode = DisposalMode::Delete;
        }

        if let Some(folder) = self.trash_folder {
            config.options.trash_folder = folder;
        }

        if let Some(algorithm) = self.algorithm {
            config.hashing.algorithm = algorithm.into();
        }

        if let Some(hash_size) = self.hash_size {
            config.hashing.hash_size = hash_size;
        }

        if let Some(threshold) = self.threshold {
            config.hashing.distance_threshold = threshold;
        }

        // Boolean flags (only override if set to non-default)
        if self.quiet {
            config.options.show_progress = false;
            config.options.show_skipped = false;
        }

        if self.show_skipped {
            config.options.show_skipped = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["dupesweep"]);
        assert_eq!(args.directory, PathBuf::from("."));
        assert!(!args.delete);
        assert!(!args.json);
    }

    #[test]
    fn test_merge_overrides() {
        let args = Args::parse_from([
            "dupesweep",
            "/photos",
            "--delete",
            "--threshold",
            "4",
            "--trash-folder",
            "culled",
        ]);

        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.options.directory, Some(PathBuf::from("/photos")));
        assert_eq!(config.options.disposal_mode, DisposalMode::Delete);
        assert_eq!(config.options.trash_folder, "culled");
        assert_eq!(config.hashing.distance_threshold, 4);
    }

    #[test]
    fn test_quiet_disables_progress() {
        let args = Args::parse_from(["dupesweep", "--quiet"]);
        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert!(!config.options.show_progress);
        assert!(!config.options.show_skipped);
    }
}
