//! dupesweep - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use dupesweep::{
    cli::Args,
    config::{validate_config, Config},
    dispose::process,
    error::{exit_codes, Error, Result},
    hash::PerceptualHasher,
    output::{
        print_banner, print_config_summary, print_error, print_info, print_run_stats,
        print_success,
    },
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Scan(_) | Error::Image(_) | Error::Encoding(_) => {
                    ExitCode::from(exit_codes::SCAN_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();
    let json_output = args.json;
    let quiet = args.quiet || args.json;

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);
    if quiet {
        config.options.show_progress = false;
    }

    // Validate configuration
    validate_config(&config)?;

    if !quiet {
        print_banner();
        print_config_summary(
            &config.scan_directory().display().to_string(),
            &config.options.disposal_mode.to_string(),
            &config.hashing.algorithm.to_string(),
        );
    }

    let provider = PerceptualHasher::new(config.hashing.clone());

    if !quiet {
        print_info("Generating image hashes...");
    }
    let summary = process(&provider, &config)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if summary.duplicates == 0 {
        print_info(&format!(
            "No duplicates found among {} image(s)",
            summary.total_images
        ));
        return Ok(());
    }

    print_success(&format!("Found {} duplicate file(s)", summary.duplicates));
    print_run_stats(&summary);

    Ok(())
}
