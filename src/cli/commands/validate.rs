//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the TubeHarvest configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates as part of loading
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  YouTube API: {}", config.youtube.base_url);
        println!("  API Key: configured");
        println!("  Request Timeout: {}s", config.youtube.timeout_seconds);
        println!("  Input: {}", config.input.path);
        println!(
            "  Handle Column: {}",
            config
                .input
                .handle_column
                .as_deref()
                .unwrap_or("channel_user (or detected @handles)")
        );
        if let Some(sheet) = &config.input.sheet {
            println!("  Sheet: {sheet}");
        }
        println!("  Output: {}", config.output.path);
        println!("  Checkpoint: {}", config.state.checkpoint_path);
        println!("  Flush Every: {} rows", config.state.flush_every_rows);
        println!(
            "  Delays: page {}ms, batch {}ms, row {}ms",
            config.pacing.page_delay_ms, config.pacing.batch_delay_ms, config.pacing.row_delay_ms
        );
        println!();
        Ok(0)
    }
}
