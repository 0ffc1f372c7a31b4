//! Status command implementation
//!
//! Shows how far the last interrupted harvest got.

use crate::config::load_config;
use crate::core::input::{default_selector, read_table, ColumnSelector};
use crate::core::state::CheckpointStore;
use clap::Args;
use std::collections::BTreeSet;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// List every channel present in the checkpoint
    #[arg(long)]
    pub channels: bool,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Checking harvest status");

        println!("📊 Harvest Status");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let store = CheckpointStore::new(&config.state.checkpoint_path);
        if !store.exists() {
            println!("No checkpoint found at {}.", store.path().display());
            println!("The next 'tubeharvest harvest' starts from the first row.");
            return Ok(0);
        }

        let checkpoint = match store.load() {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to read checkpoint");
                println!("   Error: {e}");
                return Ok(1);
            }
        };

        // The input may have moved since the checkpoint was written
        let total_rows = read_table(&config.input.path, config.input.sheet.as_deref())
            .ok()
            .and_then(|table| {
                default_selector(config.input.handle_column.as_deref())
                    .select(&table)
                    .map(|column| table.handles(column).len())
            });

        let channels: BTreeSet<&str> = checkpoint
            .results
            .iter()
            .map(|row| row.channel_user.as_str())
            .collect();

        println!("  Checkpoint: {}", store.path().display());
        match total_rows {
            Some(total) => println!(
                "  Processed Rows: {} of {}",
                checkpoint.processed_row_count, total
            ),
            None => println!("  Processed Rows: {}", checkpoint.processed_row_count),
        }
        println!("  Channels With Results: {}", channels.len());
        println!("  Videos Collected: {}", checkpoint.results.len());
        if let Some(saved_at) = checkpoint.saved_at {
            println!("  Last Saved: {}", saved_at.format("%Y-%m-%d %H:%M:%S UTC"));
        }

        if self.channels && !channels.is_empty() {
            println!();
            println!("  Channels:");
            for channel in &channels {
                let videos = checkpoint
                    .results
                    .iter()
                    .filter(|row| row.channel_user == *channel)
                    .count();
                println!("    - {channel} ({videos} videos)");
            }
        }

        println!();
        println!("Run 'tubeharvest harvest' to resume, or add --restart to start over.");
        Ok(0)
    }
}
