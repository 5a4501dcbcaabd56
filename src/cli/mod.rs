pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;

use crate::utils::error::BuildResult;

/// Run the command-line interface
pub fn run() -> BuildResult<()> {
    let cli = types::Cli::parse();

    logging::init_logging(cli.debug)?;
    logging::configure_backtrace(cli.trace);

    match cli.command {
        types::Commands::Build {
            source,
            destination,
            config,
            verbose,
            quiet,
        } => commands::handle_build_command(
            source.as_ref(),
            destination.as_ref(),
            &config,
            verbose,
            quiet,
        ),
        types::Commands::Toc {
            file,
            format,
            position,
            min_depth,
            max_depth,
            exclude,
            title,
        } => {
            let args = commands::TocArgs {
                position,
                min_depth,
                max_depth,
                exclude,
                title,
            };
            commands::handle_toc_command(&file, format, &args)
        }
    }
}
