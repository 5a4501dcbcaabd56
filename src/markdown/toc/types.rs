use std::fmt;

use serde::{Deserialize, Serialize};

use super::deserializers::deserialize_positions;

/// Represents a single heading in the table of contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    /// Heading level, 1 through 6
    pub level: u8,
    /// Heading text after inline processing (inline code becomes `<code>`)
    pub text: String,
    /// Anchor id, unique within its document
    pub id: String,
    #[serde(default)]
    pub children: Vec<Heading>,
    /// Whether `text` carries an inline code span
    #[serde(default)]
    pub has_code: bool,
}

impl Heading {
    pub fn new(level: u8, text: impl Into<String>, id: impl Into<String>) -> Self {
        let text = text.into();
        let has_code = text.contains("<code>");
        Self {
            level,
            text,
            id: id.into(),
            children: Vec::new(),
            has_code,
        }
    }

    /// Total number of headings in this subtree, including `self`
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Heading::count).sum::<usize>()
    }
}

/// Placement target for a rendered table of contents
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TocPosition {
    Sidebar,
    Inline,
    Floating,
    /// Any value we do not recognize; rendered with the plain base markup
    Other(String),
}

impl TocPosition {
    pub fn as_str(&self) -> &str {
        match self {
            TocPosition::Sidebar => "sidebar",
            TocPosition::Inline => "inline",
            TocPosition::Floating => "floating",
            TocPosition::Other(value) => value,
        }
    }

    /// Extra classes added to the root `<nav>` for this position
    pub fn css_classes(&self) -> Option<&'static str> {
        match self {
            TocPosition::Sidebar => Some("toc-sidebar sidebar-toc"),
            TocPosition::Inline => Some("toc-inline inline-toc"),
            TocPosition::Floating => Some("toc-floating floating-toc"),
            TocPosition::Other(_) => None,
        }
    }
}

impl From<String> for TocPosition {
    fn from(value: String) -> Self {
        match value.as_str() {
            "sidebar" => TocPosition::Sidebar,
            "inline" => TocPosition::Inline,
            "floating" => TocPosition::Floating,
            _ => TocPosition::Other(value),
        }
    }
}

impl From<&str> for TocPosition {
    fn from(value: &str) -> Self {
        TocPosition::from(value.to_string())
    }
}

impl From<TocPosition> for String {
    fn from(position: TocPosition) -> Self {
        position.as_str().to_string()
    }
}

impl fmt::Display for TocPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved table of contents configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocConfig {
    pub enabled: bool,
    pub position: Vec<TocPosition>,
    pub title: String,
    pub min_depth: u8,
    pub max_depth: u8,
    pub class_name: String,
    pub smooth_scroll: bool,
    pub active_highlight: bool,
    pub collapsible: bool,
    /// `/regex/` patterns or exact heading texts to drop with their subtrees
    pub exclude: Vec<String>,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            position: vec![TocPosition::Sidebar],
            title: "Table of Contents".to_string(),
            min_depth: 2,
            max_depth: 6,
            class_name: "table-of-contents".to_string(),
            smooth_scroll: true,
            active_highlight: true,
            collapsible: true,
            exclude: Vec::new(),
        }
    }
}

impl TocConfig {
    /// Whether any of the interactive script features is switched on
    pub fn wants_scripts(&self) -> bool {
        self.smooth_scroll || self.active_highlight || self.collapsible
    }
}

/// Table of contents settings as they appear in site config or front matter.
///
/// Every field is optional; unset fields fall through to whatever is
/// underneath when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialTocConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Accepts a single position or a list of positions
    #[serde(
        default,
        deserialize_with = "deserialize_positions",
        skip_serializing_if = "Option::is_none"
    )]
    pub position: Option<Vec<TocPosition>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, alias = "min_depth", skip_serializing_if = "Option::is_none")]
    pub min_depth: Option<u8>,

    #[serde(default, alias = "max_depth", skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u8>,

    #[serde(default, alias = "class_name", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    #[serde(default, alias = "smooth_scroll", skip_serializing_if = "Option::is_none")]
    pub smooth_scroll: Option<bool>,

    #[serde(default, alias = "active_highlight", skip_serializing_if = "Option::is_none")]
    pub active_highlight: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsible: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

impl PartialTocConfig {
    /// Lay `other` over `self`: any field set in `other` wins
    pub fn merge(&self, other: &PartialTocConfig) -> PartialTocConfig {
        PartialTocConfig {
            enabled: other.enabled.or(self.enabled),
            position: other.position.clone().or_else(|| self.position.clone()),
            title: other.title.clone().or_else(|| self.title.clone()),
            min_depth: other.min_depth.or(self.min_depth),
            max_depth: other.max_depth.or(self.max_depth),
            class_name: other.class_name.clone().or_else(|| self.class_name.clone()),
            smooth_scroll: other.smooth_scroll.or(self.smooth_scroll),
            active_highlight: other.active_highlight.or(self.active_highlight),
            collapsible: other.collapsible.or(self.collapsible),
            exclude: other.exclude.clone().or_else(|| self.exclude.clone()),
        }
    }

    /// Lay this partial over the documented defaults
    pub fn resolve(&self) -> TocConfig {
        let defaults = TocConfig::default();
        TocConfig {
            enabled: self.enabled.unwrap_or(defaults.enabled),
            position: self.position.clone().unwrap_or(defaults.position),
            title: self.title.clone().unwrap_or(defaults.title),
            min_depth: self.min_depth.unwrap_or(defaults.min_depth),
            max_depth: self.max_depth.unwrap_or(defaults.max_depth),
            class_name: self.class_name.clone().unwrap_or(defaults.class_name),
            smooth_scroll: self.smooth_scroll.unwrap_or(defaults.smooth_scroll),
            active_highlight: self.active_highlight.unwrap_or(defaults.active_highlight),
            collapsible: self.collapsible.unwrap_or(defaults.collapsible),
            exclude: self.exclude.clone().unwrap_or(defaults.exclude),
        }
    }
}

/// Assembled table of contents for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocData {
    pub title: String,
    /// Filtered heading tree
    pub items: Vec<Heading>,
    pub config: TocConfig,
}

/// One rendered table of contents per requested position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocPositionData {
    pub position: TocPosition,
    pub data: TocData,
    pub html: String,
}
