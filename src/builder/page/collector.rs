use std::path::PathBuf;

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;

/// Collect the Markdown files under the configured source directory.
///
/// Dotfiles, names on the exclude list and the destination directory are
/// skipped. Paths come back sorted so builds are deterministic.
pub fn collect_pages(config: &Config) -> Vec<PathBuf> {
    debug!("Collecting pages from {}", config.source.display());

    let walker = WalkDir::new(&config.source)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_excluded_entry(entry, config));

    let mut pages = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_file() && config.is_markdown_file(entry.path()) {
            pages.push(entry.into_path());
        }
    }

    pages.sort();
    debug!("Collected {} pages", pages.len());
    pages
}

fn is_excluded_entry(entry: &DirEntry, config: &Config) -> bool {
    // The root itself is never filtered, even if it is named `.`
    if entry.depth() == 0 {
        return false;
    }

    if entry.path().starts_with(&config.destination) {
        return true;
    }

    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || config.is_excluded_name(&name)
}
