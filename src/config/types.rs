use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::markdown::toc::PartialTocConfig;

/// Site configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the Markdown sources
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Directory the generated site is written to
    #[serde(default = "defaults::default_destination")]
    pub destination: PathBuf,

    /// Site title, used in page `<title>` tags
    #[serde(default = "defaults::default_site_title")]
    pub title: String,

    /// Mirror the source directory layout in the output
    #[serde(
        default = "defaults::default_preserve_directory_structure",
        alias = "preserveDirectoryStructure"
    )]
    pub preserve_directory_structure: bool,

    /// Extensions treated as Markdown
    #[serde(default = "defaults::default_markdown_ext", alias = "markdownExt")]
    pub markdown_ext: Vec<String>,

    /// File and directory names skipped while walking the source tree
    #[serde(default = "defaults::default_exclude")]
    pub exclude: Vec<String>,

    /// HTML file with `{{content}}` placeholders used instead of the
    /// built-in page layout
    #[serde(default)]
    pub template: Option<PathBuf>,

    /// Site-wide table of contents settings
    #[serde(default)]
    pub toc: PartialTocConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: defaults::default_source(),
            destination: defaults::default_destination(),
            title: defaults::default_site_title(),
            preserve_directory_structure: defaults::default_preserve_directory_structure(),
            markdown_ext: defaults::default_markdown_ext(),
            exclude: defaults::default_exclude(),
            template: None,
            toc: PartialTocConfig::default(),
        }
    }
}

impl Config {
    /// Check if a file is a markdown file based on extension
    pub fn is_markdown_file(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .map_or(false, |ext| self.markdown_ext.iter().any(|candidate| *candidate == ext))
    }

    /// Whether a file or directory name is on the exclude list
    pub fn is_excluded_name(&self, name: &str) -> bool {
        self.exclude.iter().any(|excluded| excluded == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_markdown_file() {
        let config = Config::default();
        assert!(config.is_markdown_file(Path::new("docs/guide.md")));
        assert!(config.is_markdown_file(Path::new("README.MARKDOWN")));
        assert!(!config.is_markdown_file(Path::new("style.css")));
        assert!(!config.is_markdown_file(Path::new("Makefile")));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: Config = serde_yaml::from_str("title: My Docs\ntoc:\n  minDepth: 1").unwrap();
        assert_eq!(config.title, "My Docs");
        assert_eq!(config.destination, PathBuf::from("_site"));
        assert!(config.preserve_directory_structure);
        assert_eq!(config.toc.min_depth, Some(1));
    }
}
