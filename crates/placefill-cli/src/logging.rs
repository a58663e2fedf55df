//! Process-wide `tracing` subscriber, installed once by `main`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs a subscriber that writes to stdout and appends to `log_file`.
///
/// `RUST_LOG` takes precedence over `level`. If the log file cannot be
/// opened the run continues with stdout logging only.
pub(crate) fn init_logging(level: &str, log_file: &Path) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(placefill_core::DEFAULT_LOG_LEVEL));

    let (file_layer, file_error) = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(file) => (
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            ),
            None,
        ),
        Err(e) => (None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        tracing::warn!(
            path = %log_file.display(),
            error = %e,
            "could not open log file; logging to stdout only"
        );
    }
}
