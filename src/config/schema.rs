//! Configuration schema types
//!
//! This module defines the configuration structure for TubeHarvest. Every
//! option is fixed at start; nothing is reconfigured while a harvest runs.

use crate::config::SecretString;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main TubeHarvest configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Remote video platform settings
    #[serde(default)]
    pub youtube: YouTubeConfig,

    /// Input sheet with channel handles
    #[serde(default)]
    pub input: InputConfig,

    /// Output table
    #[serde(default)]
    pub output: OutputConfig,

    /// Checkpoint and flush settings
    #[serde(default)]
    pub state: StateConfig,

    /// Fixed delays between remote calls
    #[serde(default)]
    pub pacing: PacingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HarvestConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.youtube.validate()?;
        self.input.validate()?;
        self.output.validate()?;
        self.state.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Remote video platform configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubeConfig {
    /// API key sent with every request
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Base URL of the Data API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl YouTubeConfig {
    fn validate(&self) -> Result<(), String> {
        match &self.api_key {
            Some(key) if !key.expose_secret().is_empty() => {}
            _ => return Err("youtube.api_key cannot be empty".to_string()),
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("youtube.base_url must start with http:// or https://".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("youtube.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

/// Input sheet configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Path to the spreadsheet (.xlsx, .xls, .ods) or CSV file
    #[serde(default)]
    pub path: String,

    /// Column holding the handles; when absent the canonical name is tried,
    /// then a column of mostly `@`-prefixed values
    #[serde(default)]
    pub handle_column: Option<String>,

    /// Worksheet name (defaults to the first sheet)
    #[serde(default)]
    pub sheet: Option<String>,
}

impl InputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("input.path cannot be empty".to_string());
        }
        if let Some(column) = &self.handle_column {
            if column.trim().is_empty() {
                return Err("input.handle_column cannot be empty when set".to_string());
            }
        }
        Ok(())
    }
}

/// Output table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the CSV file, rewritten on every flush
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("output.path cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Checkpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Path of the JSON checkpoint file
    #[serde(default = "default_checkpoint_path")]
    pub checkpoint_path: String,

    /// Input rows between intermediate output flushes
    #[serde(default = "default_flush_every_rows")]
    pub flush_every_rows: usize,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            checkpoint_path: default_checkpoint_path(),
            flush_every_rows: default_flush_every_rows(),
        }
    }
}

impl StateConfig {
    fn validate(&self) -> Result<(), String> {
        if self.checkpoint_path.trim().is_empty() {
            return Err("state.checkpoint_path cannot be empty".to_string());
        }
        if self.flush_every_rows == 0 {
            return Err("state.flush_every_rows must be > 0".to_string());
        }
        Ok(())
    }
}

/// Fixed delays dictated by the remote service's rate limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Delay between playlist pages
    #[serde(default = "default_page_delay_ms")]
    pub page_delay_ms: u64,

    /// Delay after each statistics batch
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,

    /// Delay after each fully processed input row
    #[serde(default = "default_row_delay_ms")]
    pub row_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            page_delay_ms: default_page_delay_ms(),
            batch_delay_ms: default_batch_delay_ms(),
            row_delay_ms: default_row_delay_ms(),
        }
    }
}

impl PacingConfig {
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }

    pub fn row_delay(&self) -> Duration {
        Duration::from_millis(self.row_delay_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_output_path() -> String {
    "youtube_results.csv".to_string()
}

fn default_checkpoint_path() -> String {
    "tubeharvest_checkpoint.json".to_string()
}

fn default_flush_every_rows() -> usize {
    5
}

fn default_page_delay_ms() -> u64 {
    500
}

fn default_batch_delay_ms() -> u64 {
    1000
}

fn default_row_delay_ms() -> u64 {
    2000
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
