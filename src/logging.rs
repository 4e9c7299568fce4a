//! Logging setup
//!
//! Installs a `tracing` subscriber writing to stderr so that stdout stays
//! reserved for scan output. `RUST_LOG` takes precedence over the level chosen
//! here.

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for this crate's own events
    pub level: Level,
    /// Include file and line information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Configuration for `--verbose` runs
    pub fn verbose() -> Self {
        Self {
            level: Level::DEBUG,
            include_location: true,
        }
    }
}

/// Initialize logging; later calls are ignored
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("infrascan={}", config.level)));

        // try_init: a test harness or embedding application may own the global subscriber
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(config.include_location)
                    .with_line_number(config.include_location),
            )
            .try_init();
    });
}

/// Initialize logging for the CLI
pub fn init(verbose: bool) {
    if verbose {
        init_logging(LoggingConfig::verbose());
    } else {
        init_logging(LoggingConfig::default());
    }
}
