use std::path::{Path, PathBuf};

use crate::cli::types::OutputFormat;
use crate::front_matter::extract_front_matter;
use crate::markdown::toc::{build_toc_data, render_positions, PartialTocConfig, TocPosition};
use crate::utils::error::{BuildResult, DocpressError};
use crate::utils::fs;

/// TOC settings given on the command line
#[derive(Debug, Default)]
pub struct TocArgs {
    pub position: Vec<String>,
    pub min_depth: Option<u8>,
    pub max_depth: Option<u8>,
    pub exclude: Vec<String>,
    pub title: Option<String>,
}

impl TocArgs {
    fn to_partial(&self) -> PartialTocConfig {
        PartialTocConfig {
            position: non_empty(&self.position)
                .map(|positions| positions.iter().map(|p| TocPosition::from(p.as_str())).collect()),
            min_depth: self.min_depth,
            max_depth: self.max_depth,
            exclude: non_empty(&self.exclude).map(<[String]>::to_vec),
            title: self.title.clone(),
            ..PartialTocConfig::default()
        }
    }
}

fn non_empty(values: &[String]) -> Option<&[String]> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Handle the toc command: print the TOC of one file to stdout
pub fn handle_toc_command(file: &Path, format: OutputFormat, args: &TocArgs) -> BuildResult<()> {
    println!("{}", render_file_toc(file, format, args)?);
    Ok(())
}

/// Render the TOC of `file`; command line settings win over front matter
fn render_file_toc(file: &Path, format: OutputFormat, args: &TocArgs) -> BuildResult<String> {
    let content = fs::read_file(file)?;
    let (front_matter, body) =
        extract_front_matter(&content).map_err(|e| DocpressError::FrontMatter {
            path: PathBuf::from(file),
            message: e.to_string(),
        })?;

    let settings = front_matter
        .toc
        .unwrap_or_default()
        .merge(&args.to_partial());
    let data = build_toc_data(body, settings.resolve())?;

    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&data)
            .map_err(|e| DocpressError::Generic(format!("Failed to serialize TOC: {}", e))),
        OutputFormat::Html => Ok(render_positions(&data)
            .into_iter()
            .map(|rendered| rendered.html)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("doc.md");
        std_fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_html_per_position() {
        let dir = TempDir::new().unwrap();
        let file = write(&dir, "## One\n### Two\n");
        let args = TocArgs {
            position: vec!["sidebar".to_string(), "floating".to_string()],
            ..TocArgs::default()
        };

        let html = render_file_toc(&file, OutputFormat::Html, &args).unwrap();
        assert!(html.contains("toc-sidebar sidebar-toc"));
        assert!(html.contains("toc-floating floating-toc"));
        assert_eq!(html.matches("href=\"#two\"").count(), 2);
    }

    #[test]
    fn test_json_output() {
        let dir = TempDir::new().unwrap();
        let file = write(&dir, "---\ntoc:\n  title: Contents\n---\n## One\n## Appendix\n");
        let args = TocArgs {
            exclude: vec!["Appendix".to_string()],
            ..TocArgs::default()
        };

        let json = render_file_toc(&file, OutputFormat::Json, &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Contents");
        assert_eq!(value["items"].as_array().unwrap().len(), 1);
        assert_eq!(value["items"][0]["id"], "one");
    }

    #[test]
    fn test_flags_override_front_matter() {
        let dir = TempDir::new().unwrap();
        let file = write(&dir, "---\ntoc:\n  maxDepth: 2\n---\n## One\n### Two\n");
        let args = TocArgs {
            max_depth: Some(3),
            ..TocArgs::default()
        };

        let json = render_file_toc(&file, OutputFormat::Json, &args).unwrap();
        assert!(json.contains("\"two\""));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = render_file_toc(&dir.path().join("nope.md"), OutputFormat::Html, &TocArgs::default()).unwrap_err();
        assert!(matches!(err, DocpressError::Io(_)));
    }
}
