use std::path::Path;

use html_escape::{encode_double_quoted_attribute, encode_text};
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::front_matter::FrontMatter;
use crate::utils::error::BuildResult;
use crate::utils::fs;

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_.-]+)\s*\}\}").expect("valid placeholder regex")
});

const FRONT_MATTER_PREFIX: &str = "frontmatter.";

/// Pieces of a finished page, already rendered to HTML
#[derive(Debug, Default)]
pub struct PageParts<'a> {
    pub title: &'a str,
    pub site_title: &'a str,
    pub description: Option<&'a str>,
    pub layout: &'a str,
    pub styles: &'a str,
    pub scripts: &'a str,
    pub sidebar: &'a str,
    pub content: &'a str,
    pub floating: &'a str,
}

fn full_title(parts: &PageParts) -> String {
    if parts.site_title.is_empty() || parts.site_title == parts.title {
        parts.title.to_string()
    } else {
        format!("{} | {}", parts.title, parts.site_title)
    }
}

/// Read the configured custom template, if any
pub fn load_template(template: Option<&Path>) -> BuildResult<Option<String>> {
    match template {
        Some(path) => {
            debug!("Using page template {}", path.display());
            Ok(Some(fs::read_file(path)?))
        }
        None => Ok(None),
    }
}

/// Fill a custom page template.
///
/// Known placeholders are `{{content}}`, `{{title}}`, `{{toc.sidebar}}`,
/// `{{toc.floating}}`, `{{toc.styles}}`, `{{toc.scripts}}` and
/// `{{frontmatter.KEY}}` for scalar front matter values. Unknown
/// placeholders are left as written. TOC styles and scripts the template
/// does not place itself go before `</head>` and `</body>`.
pub fn render_custom_template(
    template: &str,
    parts: &PageParts,
    front_matter: &FrontMatter,
) -> String {
    let mut places_styles = false;
    let mut places_scripts = false;

    let mut html = PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            match key {
                "content" => parts.content.to_string(),
                "title" => encode_text(&full_title(parts)).into_owned(),
                "toc.sidebar" => parts.sidebar.to_string(),
                "toc.floating" => parts.floating.to_string(),
                "toc.styles" => {
                    places_styles = true;
                    wrap_styles(parts.styles)
                }
                "toc.scripts" => {
                    places_scripts = true;
                    wrap_scripts(parts.scripts)
                }
                _ => key
                    .strip_prefix(FRONT_MATTER_PREFIX)
                    .and_then(|field| front_matter.field(field))
                    .map(|value| encode_text(&value).into_owned())
                    .unwrap_or_else(|| caps[0].to_string()),
            }
        })
        .into_owned();

    if !places_styles && !parts.styles.is_empty() {
        html = insert_before(&html, "</head>", &wrap_styles(parts.styles));
    }
    if !places_scripts && !parts.scripts.is_empty() {
        html = insert_before(&html, "</body>", &wrap_scripts(parts.scripts));
    }

    html
}

fn wrap_styles(styles: &str) -> String {
    if styles.is_empty() {
        String::new()
    } else {
        format!("<style>\n{}\n</style>", styles)
    }
}

fn wrap_scripts(scripts: &str) -> String {
    if scripts.is_empty() {
        String::new()
    } else {
        format!("<script>\n{}\n</script>", scripts)
    }
}

// Falls back to appending when the closing tag is missing
fn insert_before(html: &str, closing_tag: &str, snippet: &str) -> String {
    match html.rfind(closing_tag) {
        Some(idx) => format!("{}{}\n{}", &html[..idx], snippet, &html[idx..]),
        None => format!("{}\n{}", html, snippet),
    }
}

/// Splice the rendered pieces into the default page layout.
///
/// The sidebar TOC precedes the article and the floating TOC follows it.
pub fn render_template(parts: &PageParts) -> String {
    let full_title = full_title(parts);

    let mut html = String::from(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
"#,
    );

    if let Some(description) = parts.description {
        html.push_str(&format!(
            "    <meta name=\"description\" content=\"{}\">\n",
            encode_double_quoted_attribute(description)
        ));
    }

    html.push_str(&format!("    <title>{}</title>\n", encode_text(&full_title)));

    if !parts.styles.is_empty() {
        html.push_str("    <style>\n");
        html.push_str(parts.styles);
        html.push_str("\n    </style>\n");
    }

    html.push_str("</head>\n");
    html.push_str(&format!(
        "<body data-layout=\"{}\">\n",
        encode_double_quoted_attribute(parts.layout)
    ));

    if !parts.sidebar.is_empty() {
        html.push_str(parts.sidebar);
        html.push('\n');
    }

    html.push_str("<article class=\"markdown-body\">\n");
    html.push_str(parts.content);
    html.push_str("</article>\n");

    if !parts.floating.is_empty() {
        html.push_str(parts.floating);
        html.push('\n');
    }

    if !parts.scripts.is_empty() {
        html.push_str("<script>\n");
        html.push_str(parts.scripts);
        html.push_str("\n</script>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}
