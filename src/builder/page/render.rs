use log::debug;

use crate::builder::page::model::Page;
use crate::builder::page::template::{render_custom_template, render_template, PageParts};
use crate::config::Config;
use crate::markdown::toc::{
    build_toc_data, enhance_headings_with_anchors, process_inline_toc_syntax, render_positions,
    toc_scripts_for, toc_styles_for, TocData, TocPosition,
};
use crate::markdown::MarkdownRenderer;
use crate::utils::error::BuildResult;

const DEFAULT_LAYOUT: &str = "doc";

/// A page turned into a complete HTML document
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub title: String,
    pub html: String,
    /// Table of contents, when enabled for this page
    pub toc: Option<TocData>,
}

/// Render one page: Markdown body, table of contents, heading anchors and
/// the surrounding layout.
///
/// Front matter `toc` settings are laid over the site-wide ones.
pub fn render_page(
    page: &Page,
    config: &Config,
    renderer: &MarkdownRenderer,
) -> BuildResult<RenderedPage> {
    render_page_with_template(page, config, renderer, None)
}

/// Like [`render_page`], filling `template` instead of the built-in layout
/// when one is given
pub fn render_page_with_template(
    page: &Page,
    config: &Config,
    renderer: &MarkdownRenderer,
    template: Option<&str>,
) -> BuildResult<RenderedPage> {
    let title = page.title();
    let mut content = renderer.render(&page.body);

    let toc_settings = match &page.front_matter.toc {
        Some(page_toc) => config.toc.merge(page_toc),
        None => config.toc.clone(),
    };
    let toc_config = toc_settings.resolve();

    let mut sidebar = String::new();
    let mut floating = String::new();
    let mut styles = String::new();
    let mut scripts = String::new();
    let mut toc = None;

    if toc_config.enabled {
        styles = toc_styles_for(&toc_config);
        scripts = toc_scripts_for(&toc_config).unwrap_or_default();
        let data = build_toc_data(&page.body, toc_config)?;
        debug!(
            "{}: {} top-level TOC entries",
            page.relative_path.display(),
            data.items.len()
        );

        content = process_inline_toc_syntax(&content, &data);

        for rendered in render_positions(&data) {
            match rendered.position {
                TocPosition::Sidebar if sidebar.is_empty() => sidebar = rendered.html,
                TocPosition::Floating if floating.is_empty() => floating = rendered.html,
                _ => {}
            }
        }

        toc = Some(data);
    }

    let content = enhance_headings_with_anchors(&content);

    let parts = PageParts {
        title: &title,
        site_title: &config.title,
        description: page.front_matter.description.as_deref(),
        layout: page.front_matter.layout.as_deref().unwrap_or(DEFAULT_LAYOUT),
        styles: &styles,
        scripts: &scripts,
        sidebar: &sidebar,
        content: &content,
        floating: &floating,
    };
    let html = match template {
        Some(template) => render_custom_template(template, &parts, &page.front_matter),
        None => render_template(&parts),
    };

    Ok(RenderedPage { title, html, toc })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::toc::PartialTocConfig;
    use crate::utils::error::DocpressError;
    use std::path::PathBuf;

    fn page(content: &str) -> Page {
        Page::from_content(PathBuf::from("/docs/page.md"), PathBuf::from("page.md"), content).unwrap()
    }

    #[test]
    fn test_default_page() {
        let renderer = MarkdownRenderer::new();
        let rendered = render_page(
            &page("# Guide\n\n## Install\n\n## Usage\n"),
            &Config::default(),
            &renderer,
        )
        .unwrap();

        assert_eq!(rendered.title, "Guide");
        assert!(rendered.html.contains("toc-sidebar sidebar-toc"));
        assert!(rendered.html.contains("<a href=\"#install\" class=\"toc-link\""));
        assert!(rendered.html.contains("<h2 id=\"install\"><a href=\"#install\" class=\"heading-anchor\">#</a>Install</h2>"));
        assert!(rendered.html.contains("<script>"));
        assert_eq!(rendered.toc.unwrap().items.len(), 2);
    }

    #[test]
    fn test_front_matter_overrides_site_toc() {
        let renderer = MarkdownRenderer::new();
        let config = Config {
            toc: PartialTocConfig {
                position: Some(vec![TocPosition::Sidebar]),
                ..PartialTocConfig::default()
            },
            ..Config::default()
        };
        let page = page(
            "---\ntoc:\n  position: floating\n  smoothScroll: false\n  activeHighlight: false\n  collapsible: false\n---\n## One\n",
        );

        let rendered = render_page(&page, &config, &renderer).unwrap();
        assert!(rendered.html.contains("toc-floating floating-toc"));
        assert!(!rendered.html.contains("toc-sidebar"));
        assert!(!rendered.html.contains("<script>"));
        assert!(rendered.html.contains(".table-of-contents"));
    }

    #[test]
    fn test_smooth_scroll_switched_off() {
        let renderer = MarkdownRenderer::new();
        let rendered = render_page(
            &page("---\ntoc:\n  smoothScroll: false\n---\n## One\n\n### Two\n"),
            &Config::default(),
            &renderer,
        )
        .unwrap();

        assert!(!rendered.html.contains("scroll-behavior: smooth"));
        assert!(!rendered.html.contains("behavior: 'smooth'"));
        assert!(rendered.html.contains("updateActiveTocItem"));
        assert!(rendered.html.contains("classList.toggle('collapsed')"));
    }

    #[test]
    fn test_active_highlight_switched_off() {
        let renderer = MarkdownRenderer::new();
        let rendered = render_page(
            &page("---\ntoc:\n  activeHighlight: false\n---\n## One\n"),
            &Config::default(),
            &renderer,
        )
        .unwrap();

        assert!(!rendered.html.contains("updateActiveTocItem"));
        assert!(rendered.html.contains("scroll-behavior: smooth"));
    }

    #[test]
    fn test_custom_template() {
        let renderer = MarkdownRenderer::new();
        let template = "<html><head></head><body>{{toc.sidebar}}<main>{{content}}</main><p>{{frontmatter.author}}</p></body></html>";
        let rendered = render_page_with_template(
            &page("---\nauthor: Sam\n---\n# Doc\n\n## Section\n"),
            &Config::default(),
            &renderer,
            Some(template),
        )
        .unwrap();

        assert!(rendered.html.starts_with("<html><head>"));
        assert!(rendered.html.contains("toc-sidebar sidebar-toc"));
        assert!(rendered.html.contains("<main><h1 id=\"doc\">"));
        assert!(rendered.html.contains("<p>Sam</p>"));
        assert!(rendered.html.contains("</style>\n</head>"));
        assert!(!rendered.html.contains("<article"));
    }

    #[test]
    fn test_inline_placeholder() {
        let renderer = MarkdownRenderer::new();
        let rendered = render_page(
            &page("# Doc\n\n[[toc]]\n\n## Section\n"),
            &Config::default(),
            &renderer,
        )
        .unwrap();

        assert!(rendered.html.contains("toc-inline inline-toc"));
        assert!(!rendered.html.contains("[[toc]]"));
    }

    #[test]
    fn test_disabled_toc() {
        let renderer = MarkdownRenderer::new();
        let rendered = render_page(
            &page("---\ntoc:\n  enabled: false\n---\n## Section\n\n[[toc]]\n"),
            &Config::default(),
            &renderer,
        )
        .unwrap();

        assert!(rendered.toc.is_none());
        assert!(!rendered.html.contains("<nav"));
        assert!(!rendered.html.contains("<style>"));
        assert!(rendered.html.contains("[[toc]]"));
        assert!(rendered.html.contains("<h2 id=\"section\">"));
    }

    #[test]
    fn test_bad_page_exclude_pattern() {
        let renderer = MarkdownRenderer::new();
        let err = render_page(
            &page("---\ntoc:\n  exclude: ['/(/']\n---\n## Section\n"),
            &Config::default(),
            &renderer,
        )
        .unwrap_err();

        assert!(matches!(err, DocpressError::InvalidExcludePattern { .. }));
    }
}
