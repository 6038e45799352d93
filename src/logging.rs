//! Diagnostic logging via `tracing` and `tracing-subscriber`.
//!
//! Logs always go to stderr so standard output carries only selected columns.
//!
//! - default: `warn`
//! - `-v`: `debug` (input opened, row counts)
//! - `-vv`: `trace` (per-line selection)

use std::io::{self, IsTerminal};

use anyhow::Context;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Maximum level emitted.
    pub level: Level,
    /// Whether to use ANSI colors.
    pub with_ansi: bool,
}

impl LogConfig {
    /// Create a `LogConfig` from the `-v` count.
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            with_ansi: io::stderr().is_terminal(),
        }
    }
}

/// Install the global subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::new(format!(
        "warn,csvcol={}",
        config.level.as_str().to_lowercase()
    ));
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("failed to install tracing subscriber")
}
