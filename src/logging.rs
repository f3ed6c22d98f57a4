//! Logging setup

use crate::config::LoggingSettings;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Setup logging with the specified level
///
/// `RUST_LOG` takes precedence over `level`. Calling this more than once is
/// harmless; later calls leave the first subscriber in place.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .ok();
}

/// Setup logging from configuration
pub fn init_from_settings(settings: &LoggingSettings) {
    if !settings.json_format {
        init_logging(&settings.level);
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.level));

    tracing_subscriber::registry()
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .ok();
}
