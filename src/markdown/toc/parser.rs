use std::collections::HashSet;

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::slug::generate_unique_slug;
use super::types::Heading;
use crate::markdown::utils::html_to_plain_text;

/// Marker that keeps a heading out of the table of contents while it still
/// renders on the page, written as `## Heading <!-- toc-ignore -->`
pub const TOC_IGNORE_MARKER: &str = "toc-ignore";

static HEADING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(#{1,6})[ \t]+(.+)$").expect("valid heading regex"));

static IGNORE_COMMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*<!--\s*toc-ignore\s*-->\s*").expect("valid marker regex"));

static INLINE_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid inline code regex"));

/// Extract headings from Markdown content, in document order.
///
/// Every heading gets an id that is unique within this call.
pub fn extract_headings(markdown: &str) -> Vec<Heading> {
    let mut existing_slugs = HashSet::new();
    extract_headings_with_slugs(markdown, &mut existing_slugs)
}

/// Extract headings, assigning ids against a caller-owned slug set.
///
/// Ids already in `existing_slugs` are avoided and every id handed out is
/// added to it.
pub fn extract_headings_with_slugs(
    markdown: &str,
    existing_slugs: &mut HashSet<String>,
) -> Vec<Heading> {
    let mut headings = Vec::new();

    for cap in HEADING_REGEX.captures_iter(markdown) {
        let level = cap[1].len() as u8;
        let text = cap[2].trim();

        if text.is_empty() {
            continue;
        }

        if text.contains(TOC_IGNORE_MARKER) {
            trace!("Skipping ignored heading: {}", text);
            continue;
        }

        let without_marker = IGNORE_COMMENT_REGEX.replace_all(text, "");
        let without_marker = without_marker.trim();
        let has_code = INLINE_CODE_REGEX.is_match(without_marker);
        let processed = INLINE_CODE_REGEX
            .replace_all(without_marker, |caps: &Captures| {
                format!("<code>{}</code>", html_escape::encode_text(&caps[1]))
            })
            .into_owned();

        let id = generate_unique_slug(&html_to_plain_text(&processed), existing_slugs);

        headings.push(Heading {
            level,
            text: processed,
            id,
            children: Vec::new(),
            has_code,
        });
    }

    debug!("Extracted {} headings", headings.len());
    headings
}

/// Build a hierarchical TOC structure from flat headings.
///
/// A heading nests under the nearest preceding heading with a smaller
/// level. Skipped levels are not filled in: an h3 right after an h1 becomes
/// the h1's child.
pub fn build_toc_hierarchy(headings: Vec<Heading>) -> Vec<Heading> {
    let mut roots = Vec::new();
    // Open ancestors, deepest last. A node is attached to its parent when
    // it is popped, which keeps siblings in source order.
    let mut stack: Vec<Heading> = Vec::new();

    for heading in headings {
        while stack.last().map_or(false, |top| top.level >= heading.level) {
            close_top(&mut stack, &mut roots);
        }
        stack.push(heading);
    }

    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }

    roots
}

fn close_top(stack: &mut Vec<Heading>, roots: &mut Vec<Heading>) {
    if let Some(completed) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(completed),
            None => roots.push(completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn flat(headings: &[Heading]) -> Vec<(u8, &str, &str)> {
        headings
            .iter()
            .map(|h| (h.level, h.text.as_str(), h.id.as_str()))
            .collect()
    }

    fn assert_levels_increase(nodes: &[Heading]) {
        for node in nodes {
            for child in &node.children {
                assert!(child.level > node.level, "{} nested under {}", child.id, node.id);
            }
            assert_levels_increase(&node.children);
        }
    }

    #[test]
    fn test_extract_headings() {
        let headings = extract_headings("# A\n## B\n## C\n### D");
        assert_eq!(
            flat(&headings),
            vec![(1, "A", "a"), (2, "B", "b"), (2, "C", "c"), (3, "D", "d")]
        );
        assert!(headings.iter().all(|h| h.children.is_empty()));
    }

    #[test]
    fn test_extract_ignores_non_headings() {
        let markdown = "#NoSpace\n####### Seven\n#   \nText with # inside\n  # Indented\n## Real";
        let headings = extract_headings(markdown);
        assert_eq!(flat(&headings), vec![(2, "Real", "real")]);
    }

    #[test]
    fn test_extract_handles_crlf() {
        let headings = extract_headings("# Title\r\n\r\n## Next\r\n");
        assert_eq!(flat(&headings), vec![(1, "Title", "title"), (2, "Next", "next")]);
    }

    #[test]
    fn test_ignore_marker() {
        let headings = extract_headings("# Visible\n## Hidden <!-- toc-ignore -->\n## Also Visible");
        assert_eq!(
            flat(&headings),
            vec![(1, "Visible", "visible"), (2, "Also Visible", "also-visible")]
        );
    }

    #[test]
    fn test_inline_code() {
        let headings = extract_headings("## Using `cargo build` today\n## Plain");
        assert_eq!(headings[0].text, "Using <code>cargo build</code> today");
        assert_eq!(headings[0].id, "using-cargo-build-today");
        assert!(headings[0].has_code);
        assert!(!headings[1].has_code);
    }

    #[test]
    fn test_inline_code_is_escaped() {
        let headings = extract_headings("## The `Vec<T>` type");
        assert_eq!(headings[0].text, "The <code>Vec&lt;T&gt;</code> type");
        assert_eq!(headings[0].id, "the-vec-type");
    }

    #[test]
    fn test_duplicate_headings() {
        let markdown = "## Usage\n### Basic Usage\n## Usage\n### Advanced Usage";
        let ids: Vec<_> = extract_headings(markdown).into_iter().map(|h| h.id).collect();
        assert_eq!(ids, vec!["usage", "basic-usage", "usage-1", "advanced-usage"]);
    }

    #[test]
    fn test_extract_with_shared_slugs() {
        let mut slugs = HashSet::new();
        slugs.insert("intro".to_string());
        let headings = extract_headings_with_slugs("## Intro", &mut slugs);
        assert_eq!(headings[0].id, "intro-1");
        assert!(slugs.contains("intro-1"));
    }

    #[test]
    fn test_build_hierarchy() {
        let tree = build_toc_hierarchy(extract_headings("# A\n## B\n## C\n### D"));

        assert_eq!(tree.len(), 1);
        let a = &tree[0];
        assert_eq!(a.id, "a");
        assert_eq!(a.children.iter().map(|h| h.id.as_str()).collect::<Vec<_>>(), vec!["b", "c"]);
        assert!(a.children[0].children.is_empty());
        assert_eq!(a.children[1].children.len(), 1);
        assert_eq!(a.children[1].children[0].id, "d");
    }

    #[test]
    fn test_build_hierarchy_skipped_levels() {
        let tree = build_toc_hierarchy(extract_headings("# Top\n### Deep\n## Mid\n# Second"));

        assert_eq!(tree.len(), 2);
        let ids: Vec<_> = tree[0].children.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["deep", "mid"]);
        assert_eq!(tree[1].id, "second");
    }

    #[test]
    fn test_build_hierarchy_starting_deep() {
        let tree = build_toc_hierarchy(extract_headings("### Three\n## Two\n# One\n## Two Again"));

        let roots: Vec<_> = tree.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(roots, vec!["three", "two", "one"]);
        assert_eq!(tree[2].children[0].id, "two-again");
    }

    #[test]
    fn test_hierarchy_invariant() {
        let markdown = "## a\n# b\n###### c\n### d\n#### e\n## f\n##### g\n# h\n### i\n## j";
        let headings = extract_headings(markdown);
        let total = headings.len();
        let tree = build_toc_hierarchy(headings);

        assert_levels_increase(&tree);
        assert_eq!(tree.iter().map(Heading::count).sum::<usize>(), total);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_headings("").is_empty());
        assert!(build_toc_hierarchy(Vec::new()).is_empty());
    }
}
