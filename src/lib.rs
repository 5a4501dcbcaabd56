//! Markdown documentation builder.
//!
//! Documents are rendered with comrak and decorated with a generated table
//! of contents; see [`markdown::toc`] for the heading pipeline and
//! [`builder`] for whole-site builds.

pub mod builder;
pub mod cli;
pub mod config;
pub mod front_matter;
pub mod markdown;
pub mod utils;

pub use config::Config;
pub use utils::error::{BuildResult, DocpressError};
