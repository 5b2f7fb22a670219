//! Logging setup on top of `tracing-subscriber`.
//!
//! A daily-rolling file layer always runs; a console layer on stderr is
//! added when configured. `RUST_LOG` replaces the configured filter when set.

use std::collections::HashMap;
use std::path::Path;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use portal_core::config::LoggingConfig;
use portal_core::{PortalError, Result};

/// Flushes the file writer when dropped.
pub use tracing_appender::non_blocking::WorkerGuard as LogGuard;

const LOG_FILE_PREFIX: &str = "portal.log";

/// Noisy dependencies held back regardless of the base level.
const QUIET_TARGETS: &[(&str, &str)] = &[
    ("hyper", "warn"),
    ("hyper_util", "warn"),
    ("reqwest", "warn"),
    ("rustyline", "warn"),
];

/// Builds the filter directives from the base level and per-target overrides.
pub fn build_directives(level: &str, targets: &HashMap<String, String>) -> String {
    let mut directives = vec![level.to_string()];
    for (target, lvl) in QUIET_TARGETS {
        directives.push(format!("{}={}", target, lvl));
    }

    let mut overrides: Vec<_> = targets.iter().collect();
    overrides.sort();
    for (target, lvl) in overrides {
        directives.push(format!("{}={}", target, lvl));
    }

    directives.join(",")
}

fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(from_env) = EnvFilter::try_from_default_env() {
        return Ok(from_env);
    }

    let directives = build_directives(&config.level, &config.targets);
    EnvFilter::try_new(&directives)
        .map_err(|e| PortalError::config(format!("Invalid log filter '{}': {}", directives, e)))
}

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// life of the process.
pub fn init_logging(config: &LoggingConfig, logs_dir: &Path) -> Result<LogGuard> {
    std::fs::create_dir_all(logs_dir)?;

    let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .with_target(true)
        .with_filter(build_env_filter(config)?);

    let console_layer = if config.console {
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(build_env_filter(config)?),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| PortalError::internal(format!("Logging already initialized: {}", e)))?;

    tracing::debug!(
        "Logging initialized: level={}, console={}, dir={}",
        config.level,
        config.console,
        logs_dir.display()
    );

    Ok(guard)
}
