use log::{info, warn};

use crate::config::Config;
use crate::markdown::toc::{HeadingFilter, TocConfig};
use crate::utils::error::{BuildResult, DocpressError};

/// Validate the configuration
pub fn validate_config(config: &Config) -> BuildResult<()> {
    validate_source_directory(config)?;
    validate_template(config)?;
    validate_toc_config(&config.toc.resolve())?;
    Ok(())
}

/// Validate the source directory
fn validate_source_directory(config: &Config) -> BuildResult<()> {
    let source = &config.source;

    if !source.exists() {
        return Err(DocpressError::Config(format!(
            "Source directory does not exist: {}",
            source.display()
        )));
    }

    if !source.is_dir() {
        return Err(DocpressError::Config(format!(
            "Source path is not a directory: {}",
            source.display()
        )));
    }

    info!("Source directory: {}", source.display());
    Ok(())
}

/// The custom page template, when configured, must be a readable file
fn validate_template(config: &Config) -> BuildResult<()> {
    match &config.template {
        Some(template) if !template.is_file() => Err(DocpressError::Config(format!(
            "Template file does not exist: {}",
            template.display()
        ))),
        _ => Ok(()),
    }
}

/// Validate resolved TOC settings.
///
/// Depths outside 1..=6 or an inverted window only produce warnings, since
/// they yield an empty or partial list rather than a broken page. Exclude
/// patterns that fail to compile are errors.
pub fn validate_toc_config(toc: &TocConfig) -> BuildResult<()> {
    for (name, depth) in [("minDepth", toc.min_depth), ("maxDepth", toc.max_depth)] {
        if !(1..=6).contains(&depth) {
            warn!("TOC {} {} is outside the heading range 1-6", name, depth);
        }
    }

    if toc.min_depth > toc.max_depth {
        warn!(
            "TOC minDepth {} is greater than maxDepth {}; no headings will be listed",
            toc.min_depth, toc.max_depth
        );
    }

    HeadingFilter::from_config(toc)?;
    Ok(())
}
