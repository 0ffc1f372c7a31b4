//! Harvest command implementation
//!
//! Loads the configuration and input sheet, then hands the handle rows to
//! the [`HarvestCoordinator`].

use crate::config::{parse_config, HarvestConfig};
use crate::core::harvest::{HarvestCoordinator, HarvestOutcome, HarvestSummary};
use crate::core::input::{default_selector, read_table, ColumnSelector};
use crate::core::state::CheckpointStore;
use clap::Args;
use tokio::sync::watch;

/// Arguments for the harvest command
#[derive(Args, Debug)]
pub struct HarvestArgs {
    /// Override the input sheet path
    #[arg(long)]
    pub input: Option<String>,

    /// Override the output CSV path
    #[arg(long)]
    pub output: Option<String>,

    /// Override the checkpoint file path
    #[arg(long)]
    pub checkpoint: Option<String>,

    /// Override the number of rows between output flushes
    #[arg(long)]
    pub flush_every: Option<usize>,

    /// Discard any existing checkpoint and start from the first row
    #[arg(long)]
    pub restart: bool,
}

impl HarvestArgs {
    /// Execute the harvest command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting harvest command");

        // Overrides may supply fields the file leaves out, so validate after applying them
        let contents = match std::fs::read_to_string(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to read configuration file {config_path}: {e}");
                return Ok(2); // Configuration error exit code
            }
        };
        let mut config = match parse_config(&contents) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2);
            }
        };
        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("❌ Configuration validation failed: {e}");
            return Ok(2);
        }

        // Input problems are fatal before any remote call
        let table = match read_table(&config.input.path, config.input.sheet.as_deref()) {
            Ok(t) => t,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read input");
                eprintln!("❌ {e}");
                return Ok(2); // Input error exit code
            }
        };

        let selector = default_selector(config.input.handle_column.as_deref());
        let Some(column) = selector.select(&table) else {
            tracing::error!(strategy = %selector.describe(), "No handle column found");
            eprintln!(
                "❌ Could not find a column with channel handles (@username) in {}",
                config.input.path
            );
            eprintln!("   Looked for: {}", selector.describe());
            return Ok(2);
        };
        let rows = table.handles(column);

        if self.restart {
            let store = CheckpointStore::new(&config.state.checkpoint_path);
            if store.exists() {
                tracing::info!(path = %store.path().display(), "Restart requested, clearing checkpoint");
                println!("🧹 Removing checkpoint {}", store.path().display());
            }
            store.clear()?;
        }

        let coordinator = match HarvestCoordinator::from_config(&config, shutdown_signal) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create harvest coordinator");
                eprintln!("❌ Failed to initialize harvest: {e}");
                return Ok(2);
            }
        };

        println!("🚀 Harvesting {} channel rows from {}", rows.len(), config.input.path);
        println!();

        let summary = match coordinator.run(&rows).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Harvest could not start");
                eprintln!("❌ {e}");
                eprintln!(
                    "   Delete {} or pass --restart to start over",
                    config.state.checkpoint_path
                );
                return Ok(2);
            }
        };

        print_summary(&summary, &config);
        Ok(exit_code(&summary.outcome))
    }

    fn apply_overrides(&self, config: &mut HarvestConfig) {
        if let Some(input) = &self.input {
            tracing::info!(input = %input, "Overriding input path from CLI");
            config.input.path = input.clone();
        }
        if let Some(output) = &self.output {
            tracing::info!(output = %output, "Overriding output path from CLI");
            config.output.path = output.clone();
        }
        if let Some(checkpoint) = &self.checkpoint {
            tracing::info!(checkpoint = %checkpoint, "Overriding checkpoint path from CLI");
            config.state.checkpoint_path = checkpoint.clone();
        }
        if let Some(rows) = self.flush_every {
            tracing::info!(flush_every_rows = rows, "Overriding flush interval from CLI");
            config.state.flush_every_rows = rows;
        }
    }
}

/// Process exit code for a finished run
pub fn exit_code(outcome: &HarvestOutcome) -> i32 {
    match outcome {
        HarvestOutcome::Completed => 0,
        HarvestOutcome::Aborted(_) => 1,
        HarvestOutcome::Interrupted => 130,
    }
}

fn print_summary(summary: &HarvestSummary, config: &HarvestConfig) {
    println!();
    println!("📊 Harvest Summary:");
    println!("  Input Rows: {}", summary.total_rows);
    if summary.resumed_from > 0 {
        println!("  Resumed From Row: {}", summary.resumed_from + 1);
    }
    println!("  Processed Rows: {}", summary.processed_rows);
    println!("  Harvested Channels: {}", summary.harvested_rows);
    println!("  Skipped Rows: {}", summary.skipped_rows);
    println!("  Videos: {}", summary.videos_written);
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();

    match &summary.outcome {
        HarvestOutcome::Completed => {
            println!("✅ Harvest completed. Results saved to {}", config.output.path);
        }
        HarvestOutcome::Interrupted => {
            println!("⚠️  Harvest interrupted after {} rows", summary.processed_rows);
            println!("   Progress saved to {}", config.state.checkpoint_path);
            println!("   Run the same command again to resume");
        }
        HarvestOutcome::Aborted(reason) => {
            println!("❌ Harvest stopped: {reason}");
            println!("   Progress saved to {}", config.state.checkpoint_path);
            println!("   Run the same command again to resume");
        }
    }
}
