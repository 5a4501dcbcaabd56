use log::{debug, trace};
use regex::Regex;

use super::types::{Heading, TocConfig};
use crate::utils::error::{BuildResult, DocpressError};

/// One compiled entry of the `exclude` list
#[derive(Debug, Clone)]
pub enum ExcludePattern {
    /// Written as `/body/`; matches anywhere in the heading text
    Regex(Regex),
    /// Anything else; must equal the heading text exactly
    Exact(String),
}

impl ExcludePattern {
    /// Compile a pattern, failing right here if a `/regex/` does not parse
    pub fn parse(pattern: &str) -> BuildResult<Self> {
        if pattern.len() >= 2 && pattern.starts_with('/') && pattern.ends_with('/') {
            let body = &pattern[1..pattern.len() - 1];
            Regex::new(body)
                .map(ExcludePattern::Regex)
                .map_err(|source| DocpressError::InvalidExcludePattern {
                    pattern: pattern.to_string(),
                    source,
                })
        } else {
            Ok(ExcludePattern::Exact(pattern.to_string()))
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        match self {
            ExcludePattern::Regex(regex) => regex.is_match(text),
            ExcludePattern::Exact(exact) => exact == text,
        }
    }
}

/// Depth window and exclusion rules applied to a heading tree.
///
/// Excluded headings and headings deeper than `max_depth` are cut together
/// with their whole subtree. Headings shallower than `min_depth` are
/// dropped but their surviving children take their place.
#[derive(Debug, Clone)]
pub struct HeadingFilter {
    min_depth: u8,
    max_depth: u8,
    exclude: Vec<ExcludePattern>,
}

impl HeadingFilter {
    pub fn new<S: AsRef<str>>(min_depth: u8, max_depth: u8, exclude: &[S]) -> BuildResult<Self> {
        let exclude = exclude
            .iter()
            .map(|pattern| ExcludePattern::parse(pattern.as_ref()))
            .collect::<BuildResult<Vec<_>>>()?;

        Ok(Self {
            min_depth,
            max_depth,
            exclude,
        })
    }

    pub fn from_config(config: &TocConfig) -> BuildResult<Self> {
        Self::new(config.min_depth, config.max_depth, config.exclude.as_slice())
    }

    /// Patterns are tried against the heading text as stored (inline code
    /// escaped) and with entities decoded, so `Run <code>Vec<T></code>`
    /// excludes the heading written as ``Run `Vec<T>` ``.
    pub fn is_excluded(&self, heading: &Heading) -> bool {
        if self.exclude.is_empty() {
            return false;
        }

        let unescaped = html_escape::decode_html_entities(&heading.text);
        self.exclude
            .iter()
            .any(|pattern| pattern.matches(&heading.text) || pattern.matches(&unescaped))
    }

    /// Filter a heading tree, preserving the relative order of survivors
    pub fn apply(&self, headings: Vec<Heading>) -> Vec<Heading> {
        let mut filtered = Vec::with_capacity(headings.len());
        self.filter_into(headings, &mut filtered);
        filtered
    }

    fn filter_into(&self, headings: Vec<Heading>, out: &mut Vec<Heading>) {
        for mut heading in headings {
            if self.is_excluded(&heading) {
                trace!("Excluding heading '{}' and its subtree", heading.text);
                continue;
            }

            if heading.level > self.max_depth {
                continue;
            }

            let children = self.apply(std::mem::take(&mut heading.children));

            if heading.level >= self.min_depth {
                heading.children = children;
                out.push(heading);
            } else {
                // Too shallow: its children take its place
                out.extend(children);
            }
        }
    }
}

/// Filter headings based on the depth window and exclude list of `config`
pub fn filter_headings(headings: Vec<Heading>, config: &TocConfig) -> BuildResult<Vec<Heading>> {
    let filter = HeadingFilter::from_config(config)?;
    let filtered = filter.apply(headings);
    debug!("{} top-level TOC entries after filtering", filtered.len());
    Ok(filtered)
}
