mod build;
mod toc;

pub use build::handle_build_command;
pub use toc::{handle_toc_command, TocArgs};
