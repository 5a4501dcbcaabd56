pub mod engine;
pub mod renderer;
pub mod toc;
pub mod utils;

pub use renderer::{markdownify, MarkdownRenderer};
pub use toc::{extract_headings, generate_toc_data, TocConfig, TocData};
pub use utils::{html_to_plain_text, strip_html_tags};
