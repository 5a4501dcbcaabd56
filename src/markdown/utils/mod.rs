mod text;

pub use text::{html_to_plain_text, strip_html_tags, truncate_html, visible_char_count};
