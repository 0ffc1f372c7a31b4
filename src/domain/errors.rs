//! Domain error types
//!
//! The error hierarchy for TubeHarvest. Errors are domain-specific and don't
//! expose third-party types; conversions from library errors keep only the
//! message.

use thiserror::Error;

/// Main TubeHarvest error type
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input sheet could not be read or has no handle column
    #[error("Input error: {0}")]
    Input(String),

    /// Remote video platform errors
    #[error("YouTube API error: {0}")]
    YouTube(#[from] YouTubeError),

    /// Checkpoint could not be read, written or removed
    #[error("Checkpoint error: {0}")]
    Checkpoint(String),

    /// Output file could not be written
    #[error("Output error: {0}")]
    Sink(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Processing stopped by a shutdown signal
    #[error("Interrupted: {0}")]
    Interrupted(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors returned by the remote video platform
///
/// Every variant is treated as "absent" by the data source; the distinction
/// only matters for logging.
#[derive(Debug, Error)]
pub enum YouTubeError {
    /// Request never reached the service
    #[error("Failed to connect to YouTube API: {0}")]
    ConnectionFailed(String),

    /// Daily quota or rate limit exhausted (403)
    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

impl From<std::io::Error> for HarvestError {
    fn from(err: std::io::Error) -> Self {
        HarvestError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HarvestError {
    fn from(err: serde_json::Error) -> Self {
        HarvestError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for HarvestError {
    fn from(err: toml::de::Error) -> Self {
        HarvestError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<csv::Error> for HarvestError {
    fn from(err: csv::Error) -> Self {
        HarvestError::Sink(format!("CSV error: {err}"))
    }
}
