//! Logging setup: stderr always, plus an optional log file.

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;

const LOG_FILE: &str = "custom-stamina.log";

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held until
/// the program exits.
pub fn setup_logging(config: &CliConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let log_dir = config
        .log_to_file
        .then(|| config.log_dir.clone().unwrap_or_else(log_directory));

    let (file_layer, guard) = if let Some(log_dir) = &log_dir {
        std::fs::create_dir_all(log_dir)?;

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_file)
            .with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(log_dir) = &log_dir {
        tracing::debug!("Log file: {}", log_dir.join(LOG_FILE).display());
    }

    Ok(guard)
}

/// Platform-specific log directory.
///
/// - Linux: `~/.cache/custom-stamina/logs`
/// - macOS: `~/Library/Caches/custom-stamina/logs`
/// - Windows: `%LOCALAPPDATA%\custom-stamina\logs`
fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "custom-stamina")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("custom-stamina"))
        .join("logs")
}
