//! Logging and observability
//!
//! Structured logging through `tracing`, with console output and optional
//! JSON files with rotation.
//!
//! ```no_run
//! use tubeharvest::logging::init_logging;
//! use tubeharvest::config::LoggingConfig;
//!
//! let _guard = init_logging("info", &LoggingConfig::default()).expect("Failed to initialize logging");
//! tracing::info!(handle = "@alpha", "Processing channel");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log progress through the input rows
///
/// ```no_run
/// use tubeharvest::log_row_progress;
///
/// log_row_progress!(3, 10, "@alpha");
/// ```
#[macro_export]
macro_rules! log_row_progress {
    ($index:expr, $total:expr, $handle:expr) => {
        tracing::info!(
            row = $index + 1,
            total = $total,
            handle = %$handle,
            "Processing channel"
        );
    };
}

/// Log an error with context
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
