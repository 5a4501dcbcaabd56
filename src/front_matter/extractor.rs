use once_cell::sync::Lazy;
use regex::Regex;

static H1_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").expect("valid h1 regex"));

/// Extract title from the first level-one Markdown heading
pub fn extract_title_from_content(content: &str) -> Option<String> {
    H1_REGEX
        .captures(content)
        .map(|captures| captures[1].trim().to_string())
        .filter(|title| !title.is_empty())
}
