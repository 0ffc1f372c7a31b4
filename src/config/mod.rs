//! Configuration management for TubeHarvest.
//!
//! TubeHarvest uses a TOML configuration file with:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `TUBEHARVEST_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [youtube]
//! api_key = "${YOUTUBE_API_KEY}"
//!
//! [input]
//! path = "channels.xlsx"
//!
//! [output]
//! path = "youtube_results.csv"
//!
//! [state]
//! checkpoint_path = "tubeharvest_checkpoint.json"
//! flush_every_rows = 5
//! ```
//!
//! ```rust,no_run
//! use tubeharvest::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("tubeharvest.toml")?;
//! println!("Input: {}", config.input.path);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, parse_config};
pub use schema::{
    ApplicationConfig, HarvestConfig, InputConfig, LoggingConfig, OutputConfig, PacingConfig,
    StateConfig, YouTubeConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
