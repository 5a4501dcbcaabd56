use ::comrak::Options;

/// Create ComrakOptions with GitHub Flavored Markdown settings
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.tagfilter = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    options.extension.footnotes = true;
    options.extension.description_lists = true;
    // Heading ids are assigned by the TOC anchor pass instead
    options.extension.header_ids = None;

    // Render options
    options.render.hardbreaks = false;
    options.render.github_pre_lang = true;
    // Raw HTML must survive so `<!-- toc-ignore -->` reaches the anchor pass
    options.render.unsafe_ = true;

    // Smart quotes would make rendered heading text differ from the source
    options.parse.smart = false;
    options.parse.default_info_string = Some("text".to_string());

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown<'a>(content: &str, options: &Options<'a>) -> String {
    ::comrak::markdown_to_html(content, options)
}
