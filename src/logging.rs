//! File logging setup.
//!
//! The terminal is owned by the user interface, so log records go to a file in the configured
//! log directory instead of stdout. Filtering follows `RUST_LOG` and falls back to
//! [`DEFAULT_FILTER`].

use std::{fs, path::Path};

use color_eyre::eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

/// Filter applied when `RUST_LOG` is not set.
pub(crate) const DEFAULT_FILTER: &str = "mazewalk=info";

/// Name of the log file inside the log directory.
pub(crate) const LOG_FILE_NAME: &str = "mazewalk.log";

/// Installs the global tracing subscriber writing to `log_dir`.
///
/// The returned guard flushes pending records when dropped, so it must be kept alive until the
/// program exits.
///
/// # Errors
///
/// This function may return errors if:
/// - The log directory cannot be created
/// - A global subscriber has already been installed
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)?;

    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()?;

    Ok(guard)
}
