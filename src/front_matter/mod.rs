pub mod extractor;
pub mod types;
pub mod utils;

// Re-export the most common items for convenience
pub use extractor::extract_title_from_content;
pub use types::FrontMatter;
pub use utils::{extract_front_matter, has_front_matter, split_front_matter};
