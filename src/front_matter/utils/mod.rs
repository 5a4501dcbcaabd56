mod content;

pub use content::{extract_front_matter, has_front_matter, split_front_matter};
