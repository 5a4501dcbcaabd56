mod collector;
mod model;
mod render;
mod template;
mod utils;

pub use collector::collect_pages;
pub use model::Page;
pub use render::{render_page, render_page_with_template, RenderedPage};
pub use template::{load_template, render_custom_template, render_template, PageParts};
pub use utils::determine_output_path;
