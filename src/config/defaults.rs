use std::path::PathBuf;

/// Default source directory
pub fn default_source() -> PathBuf {
    PathBuf::from(".")
}

/// Default destination directory
pub fn default_destination() -> PathBuf {
    PathBuf::from("_site")
}

/// Default site title
pub fn default_site_title() -> String {
    "Documentation".to_string()
}

/// Mirror the source tree under the destination by default
pub fn default_preserve_directory_structure() -> bool {
    true
}

/// Extensions treated as Markdown
pub fn default_markdown_ext() -> Vec<String> {
    vec!["md".to_string(), "markdown".to_string()]
}

/// File and directory names skipped while walking the source tree
pub fn default_exclude() -> Vec<String> {
    vec![
        ".git".to_string(),
        "node_modules".to_string(),
        "target".to_string(),
        "vendor".to_string(),
        "_site".to_string(),
    ]
}
