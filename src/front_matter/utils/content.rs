use crate::front_matter::types::FrontMatter;

/// Split content into its raw front matter YAML and the body after it.
///
/// Front matter must open on the very first line with `---` and close with
/// a line holding only `---`. Returns `None` when there is no complete
/// front matter block.
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

/// Check if content has front matter
pub fn has_front_matter(content: &str) -> bool {
    split_front_matter(content).is_some()
}

/// Extract front matter and the remaining content
pub fn extract_front_matter(content: &str) -> Result<(FrontMatter, &str), serde_yaml::Error> {
    match split_front_matter(content) {
        Some((yaml, body)) => Ok((FrontMatter::from_yaml(yaml)?, body)),
        None => Ok((FrontMatter::default(), content)),
    }
}
