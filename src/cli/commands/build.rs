use log::{info, warn, LevelFilter};
use std::path::PathBuf;

use crate::builder;
use crate::cli::logging::set_log_level;
use crate::config;
use crate::utils::error::{BuildResult, DocpressError};

/// Handle the build command
pub fn handle_build_command(
    source: Option<&PathBuf>,
    destination: Option<&PathBuf>,
    config_files: &[PathBuf],
    verbose: bool,
    quiet: bool,
) -> BuildResult<()> {
    if verbose {
        set_log_level(LevelFilter::Debug);
    } else if quiet {
        set_log_level(LevelFilter::Error);
    }

    let source_dir = source.cloned().unwrap_or_else(|| PathBuf::from("."));
    let config_paths = if config_files.is_empty() {
        None
    } else {
        Some(config_files.to_vec())
    };

    let mut config = config::load_config(&source_dir, config_paths)?;

    // A destination given on the command line is taken as is
    if let Some(destination) = destination {
        config.destination = destination.clone();
    }

    info!("Building site...");
    let report = builder::build_site(&config)?;

    if report.is_success() {
        info!("Site built successfully at {}", config.destination.display());
        Ok(())
    } else {
        for (source, error) in &report.failures {
            warn!("  {}: {}", source.display(), error);
        }
        Err(DocpressError::Generic(format!(
            "{} of {} pages failed to build",
            report.failures.len(),
            report.failures.len() + report.pages_written.len()
        )))
    }
}
