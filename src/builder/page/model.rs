use std::path::{Path, PathBuf};

use crate::front_matter::{extract_front_matter, extract_title_from_content, FrontMatter};
use crate::utils::error::{BuildResult, DocpressError};
use crate::utils::fs;

const UNTITLED: &str = "Untitled Document";

/// A Markdown document in the site
#[derive(Debug, Clone)]
pub struct Page {
    pub source_path: PathBuf,
    /// Path relative to the source directory
    pub relative_path: PathBuf,
    pub front_matter: FrontMatter,
    /// Markdown body with front matter removed
    pub body: String,
}

impl Page {
    /// Read and split a document from disk
    pub fn load(source_path: &Path, source_dir: &Path) -> BuildResult<Self> {
        let content = fs::read_file(source_path)?;
        let relative_path = source_path
            .strip_prefix(source_dir)
            .unwrap_or(source_path)
            .to_path_buf();

        Self::from_content(source_path.to_path_buf(), relative_path, &content)
    }

    /// Build a page from already loaded content
    pub fn from_content(
        source_path: PathBuf,
        relative_path: PathBuf,
        content: &str,
    ) -> BuildResult<Self> {
        let (front_matter, body) =
            extract_front_matter(content).map_err(|e| DocpressError::FrontMatter {
                path: source_path.clone(),
                message: e.to_string(),
            })?;

        Ok(Page {
            source_path,
            relative_path,
            front_matter,
            body: body.to_string(),
        })
    }

    /// Front matter title, else the first `# ` heading, else a placeholder
    pub fn title(&self) -> String {
        self.front_matter
            .title
            .clone()
            .or_else(|| extract_title_from_content(&self.body))
            .unwrap_or_else(|| UNTITLED.to_string())
    }
}
