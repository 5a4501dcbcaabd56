use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_yaml::Value;

use crate::config::defaults;
use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BuildResult, DocpressError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 4] = [
    "docpress.yml",
    "docpress.yaml",
    "docpress.toml",
    "docpress.json",
];

/// Load site configuration from config files.
///
/// Files are merged in order, later keys winning, nested mappings merged
/// key by key. Relative `source` and `destination` resolve against
/// `source_dir`.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> BuildResult<Config> {
    let source_dir = source_dir.as_ref();

    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(source_dir),
    };

    let mut merged = Value::Mapping(Default::default());
    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            let value = read_config_file(&path)?;
            merge_values(&mut merged, value);
        }
    }

    let mut config: Config = serde_yaml::from_value(merged)
        .map_err(|e| DocpressError::Config(format!("Invalid configuration: {}", e)))?;

    if config.source == defaults::default_source() {
        config.source = source_dir.to_path_buf();
    } else if config.source.is_relative() {
        config.source = source_dir.join(&config.source);
    }

    if config.destination.is_relative() {
        config.destination = config.source.join(&config.destination);
    }

    if let Some(template) = config.template.take() {
        config.template = Some(if template.is_relative() {
            config.source.join(template)
        } else {
            template
        });
    }

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files(source_dir: &Path) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Read one configuration file into a generic YAML value
fn read_config_file(config_path: &Path) -> BuildResult<Value> {
    let content = fs::read_to_string(config_path).map_err(|e| {
        DocpressError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "yml".to_string());

    match ext.as_str() {
        "yml" | "yaml" => parse_yaml_config(&content, config_path),
        "toml" => parse_toml_config(&content, config_path),
        "json" => parse_json_config(&content, config_path),
        other => Err(DocpressError::Config(format!(
            "Unsupported configuration file format: {}",
            other
        ))),
    }
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> BuildResult<Value> {
    serde_yaml::from_str(content).map_err(|e| {
        DocpressError::Config(format!(
            "Failed to parse YAML configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> BuildResult<Value> {
    let value: toml::Value = toml::from_str(content).map_err(|e| {
        DocpressError::Config(format!(
            "Failed to parse TOML configuration ({}): {}",
            path.display(),
            e
        ))
    })?;
    to_yaml_value(&value, path)
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> BuildResult<Value> {
    let value: serde_json::Value = serde_json::from_str(content).map_err(|e| {
        DocpressError::Config(format!(
            "Failed to parse JSON configuration ({}): {}",
            path.display(),
            e
        ))
    })?;
    to_yaml_value(&value, path)
}

fn to_yaml_value<T: serde::Serialize>(value: &T, path: &Path) -> BuildResult<Value> {
    serde_yaml::to_value(value).map_err(|e| {
        DocpressError::Config(format!(
            "Failed to convert configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

/// Merge `overlay` into `target`, recursing into mappings present in both
fn merge_values(target: &mut Value, overlay: Value) {
    match (target, overlay) {
        (_, Value::Null) => {}
        (Value::Mapping(target_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match target_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        target_map.insert(key, value);
                    }
                }
            }
        }
        (target, overlay) => *target = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::toc::TocPosition;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_files() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path(), None).unwrap();

        assert_eq!(config.source, dir.path());
        assert_eq!(config.destination, dir.path().join("_site"));
        assert_eq!(config.title, "Documentation");
    }

    #[test]
    fn test_yaml_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("docpress.yml"),
            "title: Handbook\ndestination: public\ntoc:\n  position: [sidebar, floating]\n  maxDepth: 3\n",
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.title, "Handbook");
        assert_eq!(config.destination, dir.path().join("public"));
        assert_eq!(
            config.toc.position,
            Some(vec![TocPosition::Sidebar, TocPosition::Floating])
        );
        assert_eq!(config.toc.max_depth, Some(3));
    }

    #[test]
    fn test_later_files_override_nested_keys() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("base.toml");
        let local = dir.path().join("local.json");
        fs::write(&base, "title = \"Base\"\n[toc]\nminDepth = 1\nmaxDepth = 4\n").unwrap();
        fs::write(&local, r#"{"toc": {"maxDepth": 2}}"#).unwrap();

        let config = load_config(dir.path(), Some(vec![base, local])).unwrap();
        assert_eq!(config.title, "Base");
        assert_eq!(config.toc.min_depth, Some(1));
        assert_eq!(config.toc.max_depth, Some(2));
    }

    #[test]
    fn test_template_resolves_against_source() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("layout.html"), "<main>{{content}}</main>").unwrap();
        fs::write(dir.path().join("docpress.yml"), "template: layout.html\n").unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.template, Some(dir.path().join("layout.html")));
    }

    #[test]
    fn test_missing_template_fails_at_load() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("docpress.yml"), "template: nowhere.html\n").unwrap();

        let err = load_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("Template file does not exist"));
    }

    #[test]
    fn test_invalid_exclude_fails_at_load() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("docpress.yml"), "toc:\n  exclude: ['/(oops/']\n").unwrap();

        let err = load_config(dir.path(), None).unwrap_err();
        assert!(matches!(err, DocpressError::InvalidExcludePattern { .. }));
    }

    #[test]
    fn test_unsupported_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docpress.ini");
        fs::write(&path, "title=x").unwrap();

        let err = load_config(dir.path(), Some(vec![path])).unwrap_err();
        assert!(err.to_string().contains("Unsupported configuration file format"));
    }

    #[test]
    fn test_merge_values() {
        let mut target: Value = serde_yaml::from_str("a: 1\nnested:\n  x: 1\n  y: 2").unwrap();
        let overlay: Value = serde_yaml::from_str("nested:\n  y: 3\nb: true").unwrap();
        merge_values(&mut target, overlay);

        let expected: Value = serde_yaml::from_str("a: 1\nnested:\n  x: 1\n  y: 3\nb: true").unwrap();
        assert_eq!(target, expected);
    }
}
