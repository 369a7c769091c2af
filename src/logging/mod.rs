//! Tracing subscriber initialization.
//!
//! Logs are written to a file so they never interleave with command output.
//! Users can monitor logs via `tail -f` in a separate terminal.

pub mod diagnostics;

pub use diagnostics::{Diagnostic, DiagnosticLayer};

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Log path has no parent directory
    #[error("Log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Initialize the tracing subscriber with file-based logging.
///
/// Respects RUST_LOG environment variable, defaults to "info" level.
/// Creates the log directory if it doesn't exist.
///
/// # Errors
///
/// Returns `LoggingError` if the subscriber was already initialized or the
/// log directory cannot be created.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    install(log_path, None)
}

/// Like [`init`], additionally forwarding warnings to `diagnostics`.
///
/// # Errors
///
/// Same as [`init`].
pub fn init_with_diagnostics(
    log_path: &Path,
    diagnostics: Sender<Diagnostic>,
) -> Result<(), LoggingError> {
    install(log_path, Some(DiagnosticLayer::new(diagnostics)))
}

fn install(log_path: &Path, diagnostics: Option<DiagnosticLayer>) -> Result<(), LoggingError> {
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;

    // Create log directory if it doesn't exist
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| LoggingError::DirectoryCreation {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::NoParentDirectory(log_path.to_path_buf()))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);

    // Respect RUST_LOG, default to "info"
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    build_subscriber(file_appender, env_filter, diagnostics)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

/// File layer filtered by `env_filter`; diagnostics keep their own threshold.
fn build_subscriber<W>(
    writer: W,
    env_filter: tracing_subscriber::EnvFilter,
    diagnostics: Option<DiagnosticLayer>,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> tracing_subscriber::fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Layer;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false) // No ANSI colors in log files
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(diagnostics)
}
