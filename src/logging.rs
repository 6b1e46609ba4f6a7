//! File logging setup.
//!
//! The terminal belongs to the game, so logs only ever go to a file, and only
//! when a log directory is configured.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

const LOG_FILE: &str = "jewel-shuffle.log";

/// Install the global subscriber if logging is enabled.
///
/// The returned guard must be kept alive until exit so buffered lines flush.
/// Precedence: `RUST_LOG` > `JEWEL_LOG_LEVEL` > `info`.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>> {
    let Some(dir) = config.log_dir.as_ref() else {
        return Ok(None);
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "jewel_shuffle={0},jewel_shuffle_core={0}",
            config.log_level
        ))
    });

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .context("installing tracing subscriber")?;

    Ok(Some(guard))
}
