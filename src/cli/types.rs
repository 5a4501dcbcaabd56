use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "docpress")]
#[command(about = "Markdown documentation builder with generated tables of contents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, global = true, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, global = true, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the site
    #[command(alias = "b")]
    Build {
        /// Source directory (defaults to ./)
        #[arg(short, long, value_name = "DIR")]
        source: Option<PathBuf>,

        /// Destination directory (defaults to <source>/_site)
        #[arg(short, long, value_name = "DIR")]
        destination: Option<PathBuf>,

        /// Custom configuration file, may be repeated
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Vec<PathBuf>,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,

        /// Silence output
        #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
        quiet: bool,
    },

    /// Print the table of contents of a single Markdown file
    Toc {
        /// Markdown file to read
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Position to render, may be repeated
        #[arg(short, long, value_name = "POSITION")]
        position: Vec<String>,

        /// Shallowest heading level listed
        #[arg(long, value_name = "N")]
        min_depth: Option<u8>,

        /// Deepest heading level listed
        #[arg(long, value_name = "N")]
        max_depth: Option<u8>,

        /// Heading text or /regex/ to leave out, may be repeated
        #[arg(short, long, value_name = "PATTERN")]
        exclude: Vec<String>,

        /// Title shown above the list
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,
    },
}

/// Output format of the `toc` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}
