use log::LevelFilter;
use simple_logger::SimpleLogger;

use crate::utils::error::{BuildResult, DocpressError};

/// Raise or lower the level of the already installed logger
pub fn set_log_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Initialize logging with the specified level
pub fn init_logging(debug: bool) -> BuildResult<LevelFilter> {
    let log_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    SimpleLogger::new()
        .with_level(log_level)
        .init()
        .map_err(|e| DocpressError::Generic(format!("Failed to initialize logging: {}", e)))?;

    Ok(log_level)
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
