//! Logging setup using `tracing`, `tracing-subscriber` and `tracing-appender`.
//!
//! Events go to stderr, and optionally to a daily rolling file when
//! `[log] dir` is configured. `TAGDECK_LOG` overrides the configured level
//! with any `EnvFilter` directive.

use std::{fs, io};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LogConfig;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "TAGDECK_LOG";

/// File name prefix for rolling log files.
pub const LOG_FILE_PREFIX: &str = "tagdeck.log";

/// Maps CLI verbosity onto a level directive.
///
/// - 0: configured level
/// - 1 (`-v`): debug
/// - 2+ (`-vv`): trace
pub fn level_for_verbosity(config: &LogConfig, verbosity: u8) -> &str {
    match verbosity {
        0 => config.level.as_str(),
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber.
///
/// Returns the file appender guard when file logging is enabled; keep it
/// alive until exit so buffered lines are flushed. Installing a second
/// time keeps the first subscriber.
pub fn init(config: &LogConfig, verbosity: u8) -> Result<Option<WorkerGuard>> {
    let level = level_for_verbosity(config, verbosity);
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) if verbosity == 0 => filter,
        _ => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level directive '{level}'"))?,
    };

    let stderr_layer = fmt::layer().with_writer(io::stderr).with_target(false);

    let (file_layer, guard) = match &config.dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    if tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_overrides_configured_level() {
        let config = LogConfig {
            level: "warn".into(),
            dir: None,
        };
        assert_eq!(level_for_verbosity(&config, 0), "warn");
        assert_eq!(level_for_verbosity(&config, 1), "debug");
        assert_eq!(level_for_verbosity(&config, 5), "trace");
    }

    #[test]
    fn test_init_twice_is_not_an_error() {
        let config = LogConfig::default();
        assert!(init(&config, 0).is_ok());
        assert!(init(&config, 1).is_ok());
    }
}
