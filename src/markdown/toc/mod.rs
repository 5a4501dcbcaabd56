//! Table of contents engine.
//!
//! Markdown text flows through four stages: [`extract_headings`] produces a
//! flat list with unique ids, [`build_toc_hierarchy`] nests it by level,
//! [`filter_headings`] applies the depth window and exclude list, and the
//! renderers in [`generator`] turn the result into `<nav>` markup.
//! [`enhance_headings_with_anchors`] runs the same slug rules over rendered
//! HTML so page headings carry the ids the TOC links point at.

pub mod assets;
mod deserializers;
pub mod filter;
pub mod generator;
pub mod parser;
pub mod slug;
pub mod types;

pub use assets::{generate_toc_scripts, generate_toc_styles, toc_scripts_for, toc_styles_for};
pub use filter::{filter_headings, ExcludePattern, HeadingFilter};
pub use generator::{
    build_toc_data, enhance_headings_with_anchors, generate_floating_toc_html,
    generate_inline_toc_html, generate_sidebar_toc_html, generate_toc_data, generate_toc_html,
    generate_toc_positions, process_inline_toc_syntax, render_positions, render_toc,
};
pub use parser::{build_toc_hierarchy, extract_headings, extract_headings_with_slugs, TOC_IGNORE_MARKER};
pub use slug::{generate_slug, generate_unique_slug};
pub use types::{Heading, PartialTocConfig, TocConfig, TocData, TocPosition, TocPositionData};
