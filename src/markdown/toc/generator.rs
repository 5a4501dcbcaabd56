use std::collections::HashSet;

use html_escape::{encode_double_quoted_attribute, encode_text};
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, NoExpand, Regex};

use super::filter::filter_headings;
use super::parser::{build_toc_hierarchy, extract_headings};
use super::slug::generate_unique_slug;
use super::types::{Heading, PartialTocConfig, TocConfig, TocData, TocPosition, TocPositionData};
use crate::markdown::utils::{html_to_plain_text, truncate_html, visible_char_count};
use crate::utils::error::BuildResult;

/// Longest heading text shown in a TOC entry before it is cut
const MAX_DISPLAY_CHARS: usize = 50;

// A placeholder alone in its paragraph replaces the whole paragraph
static INLINE_TOC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<p>\s*\[\[toc\]\]\s*</p>|\[\[toc\]\]").expect("valid placeholder regex")
});

static HTML_HEADING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<h([1-6])>(.*?)</h[1-6]>").expect("valid heading regex"));

/// Render the table of contents, adding the classes of `position` (if any)
/// to the root `<nav>`
pub fn render_toc(data: &TocData, position: Option<&TocPosition>) -> String {
    let mut class = data.config.class_name.clone();
    if let Some(extra) = position.and_then(TocPosition::css_classes) {
        class.push(' ');
        class.push_str(extra);
    }

    let mut html = format!(
        "<nav class=\"{}\" role=\"navigation\" aria-label=\"{}\">\n<h2 class=\"toc-title\">{}</h2>\n",
        encode_double_quoted_attribute(&class),
        encode_double_quoted_attribute(&data.title),
        encode_text(&data.title)
    );
    render_list(&mut html, &data.items, 0, data.config.collapsible);
    html.push_str("</nav>");
    html
}

fn render_list(html: &mut String, headings: &[Heading], depth: usize, collapsible: bool) {
    let (list_class, item_class) = if depth == 0 {
        ("toc-list", "toc-item")
    } else {
        ("toc-sublist", "toc-subitem")
    };

    html.push_str(&format!("<ul class=\"{}\">\n", list_class));

    for heading in headings {
        let has_children = !heading.children.is_empty();
        let truncated = visible_char_count(&heading.text) > MAX_DISPLAY_CHARS;

        let mut classes = vec![item_class];
        if has_children && collapsible {
            classes.push("toc-expand");
        }
        if truncated {
            classes.push("toc-truncate");
        }
        if heading.has_code {
            classes.push("toc-code");
        }

        html.push_str(&format!(
            "<li class=\"{}\">\n<a href=\"#{}\" class=\"toc-link\" title=\"{}\">{}</a>\n",
            classes.join(" "),
            heading.id,
            encode_double_quoted_attribute(&html_to_plain_text(&heading.text)),
            truncate_html(&heading.text, MAX_DISPLAY_CHARS)
        ));

        if has_children {
            render_list(html, &heading.children, depth + 1, collapsible);
        }

        html.push_str("</li>\n");
    }

    html.push_str("</ul>\n");
}

/// Generate TOC HTML without any position classes
pub fn generate_toc_html(data: &TocData) -> String {
    render_toc(data, None)
}

/// Generate inline TOC HTML (for the `[[toc]]` placeholder)
pub fn generate_inline_toc_html(data: &TocData) -> String {
    render_toc(data, Some(&TocPosition::Inline))
}

/// Generate sidebar TOC HTML
pub fn generate_sidebar_toc_html(data: &TocData) -> String {
    render_toc(data, Some(&TocPosition::Sidebar))
}

/// Generate floating TOC HTML
pub fn generate_floating_toc_html(data: &TocData) -> String {
    render_toc(data, Some(&TocPosition::Floating))
}

/// Generate TOC data from Markdown content, with `options` laid over the
/// defaults
pub fn generate_toc_data(markdown: &str, options: &PartialTocConfig) -> BuildResult<TocData> {
    build_toc_data(markdown, options.resolve())
}

/// Extract, nest and filter the headings of `markdown` under `config`
pub fn build_toc_data(markdown: &str, config: TocConfig) -> BuildResult<TocData> {
    let headings = extract_headings(markdown);
    let hierarchy = build_toc_hierarchy(headings);
    let items = filter_headings(hierarchy, &config)?;

    Ok(TocData {
        title: config.title.clone(),
        items,
        config,
    })
}

/// Generate one rendered TOC per configured position
pub fn generate_toc_positions(
    markdown: &str,
    options: &PartialTocConfig,
) -> BuildResult<Vec<TocPositionData>> {
    let data = generate_toc_data(markdown, options)?;
    Ok(render_positions(&data))
}

/// Render already assembled TOC data for each of its configured positions
pub fn render_positions(data: &TocData) -> Vec<TocPositionData> {
    data.config
        .position
        .iter()
        .map(|position| {
            let html = match position {
                TocPosition::Inline => generate_inline_toc_html(data),
                TocPosition::Sidebar => generate_sidebar_toc_html(data),
                TocPosition::Floating => generate_floating_toc_html(data),
                TocPosition::Other(name) => {
                    debug!("Unknown TOC position '{}', using base markup", name);
                    generate_toc_html(data)
                }
            };

            TocPositionData {
                position: position.clone(),
                data: data.clone(),
                html,
            }
        })
        .collect()
}

/// Replace every `[[toc]]` placeholder (any case) in rendered HTML with the
/// inline TOC
pub fn process_inline_toc_syntax(html: &str, data: &TocData) -> String {
    if !INLINE_TOC_REGEX.is_match(html) {
        return html.to_string();
    }

    let inline_toc = generate_inline_toc_html(data);
    INLINE_TOC_REGEX
        .replace_all(html, NoExpand(&inline_toc))
        .into_owned()
}

/// Give every bare `<hN>` in rendered HTML a unique id and a leading anchor
/// link.
///
/// Ids come from the same slug rules as `extract_headings`, against a fresh
/// slug set, so a document whose headings render one-to-one gets the ids its
/// TOC links point at. Headings that already carry attributes are left alone.
pub fn enhance_headings_with_anchors(html: &str) -> String {
    let mut existing_slugs = HashSet::new();

    HTML_HEADING_REGEX
        .replace_all(html, |caps: &Captures| {
            let level = &caps[1];
            let content = &caps[2];
            let slug = generate_unique_slug(&html_to_plain_text(content), &mut existing_slugs);

            format!(
                "<h{level} id=\"{slug}\"><a href=\"#{slug}\" class=\"heading-anchor\">#</a>{content}</h{level}>"
            )
        })
        .into_owned()
}
