use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, error, info};
use rayon::prelude::*;

use crate::builder::page::{
    collect_pages, determine_output_path, load_template, render_page_with_template, Page,
};
use crate::config::Config;
use crate::markdown::MarkdownRenderer;
use crate::utils::error::{BuildResult, DocpressError};
use crate::utils::fs;

/// Outcome of a site build
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Output files written
    pub pages_written: Vec<PathBuf>,
    /// Source files that failed, with the reason
    pub failures: Vec<(PathBuf, DocpressError)>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Build every Markdown document under the source directory.
///
/// Documents render in parallel and independently; a failing document is
/// recorded in the report and does not stop the others.
pub fn build_site(config: &Config) -> BuildResult<BuildReport> {
    let start_time = Instant::now();
    info!("Using source directory: {}", config.source.display());
    info!("Output will be generated in: {}", config.destination.display());

    fs::create_directory(&config.destination)?;
    let template = load_template(config.template.as_deref())?;

    let sources = collect_pages(config);
    info!("Rendering {} pages...", sources.len());

    let results: Vec<(PathBuf, BuildResult<PathBuf>)> = sources
        .par_iter()
        .map_init(MarkdownRenderer::new, |renderer, source| {
            let result = build_one(source, config, renderer, template.as_deref());
            (source.clone(), result)
        })
        .collect();

    let mut report = BuildReport::default();
    for (source, result) in results {
        match result {
            Ok(output) => report.pages_written.push(output),
            Err(e) => {
                error!("Failed to build {}: {}", source.display(), e);
                report.failures.push((source, e));
            }
        }
    }

    info!("Site built in {:.2?}", start_time.elapsed());
    info!(
        "Pages: {}, Errors: {}",
        report.pages_written.len(),
        report.failures.len()
    );

    Ok(report)
}

fn build_one(
    source: &Path,
    config: &Config,
    renderer: &MarkdownRenderer,
    template: Option<&str>,
) -> BuildResult<PathBuf> {
    let page = Page::load(source, &config.source)?;
    let rendered = render_page_with_template(&page, config, renderer, template)?;

    let output = determine_output_path(
        &page.relative_path,
        &config.destination,
        config.preserve_directory_structure,
    );
    fs::write_file(&output, &rendered.html)?;

    debug!("Wrote {} -> {}", source.display(), output.display());
    Ok(output)
}
