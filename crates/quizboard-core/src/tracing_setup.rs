use crate::constants::LOG_FILE_ENV;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize logging. The TUI owns the terminal, so nothing is written to
/// stdout/stderr; a fmt layer writing to a file is installed only when
/// `QUIZBOARD_LOG_FILE` is set. `RUST_LOG` controls the filter
/// (default `quizboard=debug`).
pub fn init_tracing() -> Result<()> {
    let Some(log_path) = std::env::var(LOG_FILE_ENV).ok() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizboard=debug"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(file_layer).init();
    Ok(())
}
