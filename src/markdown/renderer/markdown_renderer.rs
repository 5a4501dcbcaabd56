use crate::markdown::engine::{create_comrak_options, render_markdown};

/// Markdown renderer backed by comrak
pub struct MarkdownRenderer<'a> {
    options: comrak::Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Create a new markdown renderer with the site's comrak settings
    pub fn new() -> Self {
        MarkdownRenderer {
            options: create_comrak_options(),
        }
    }

    /// Render Markdown content to HTML
    pub fn render(&self, content: &str) -> String {
        render_markdown(content, &self.options)
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Render markdown content to HTML - convenience function
pub fn markdownify<'a>(content: &str, renderer: &MarkdownRenderer<'a>) -> String {
    renderer.render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_rendering() {
        let renderer = MarkdownRenderer::new();

        let markdown = "# Hello, World!\n\nThis is a **bold** statement.";
        let html = renderer.render(markdown);

        assert!(html.contains("<h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_inline_code_in_heading() {
        let renderer = MarkdownRenderer::default();
        let html = markdownify("## Run `make`", &renderer);

        assert!(html.contains("<h2>Run <code>make</code></h2>"));
    }

    #[test]
    fn test_code_fence_language() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```");

        assert!(html.contains("<pre lang=\"rust\"><code>"));
    }
}
