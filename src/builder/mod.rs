pub mod page;
pub mod site;

pub use page::{render_page, Page, RenderedPage};
pub use site::{build_site, BuildReport};
