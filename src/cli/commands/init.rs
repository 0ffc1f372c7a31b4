//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "tubeharvest.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing TubeHarvest configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your input and output paths", self.output);
                println!("  2. Create a .env file with YOUTUBE_API_KEY=<your key>");
                println!("  3. Validate configuration: tubeharvest validate-config");
                println!("  4. Run the harvest: tubeharvest harvest");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(1)
            }
        }
    }
}

/// Sample configuration with every option at its default
pub fn sample_config() -> &'static str {
    r#"# TubeHarvest Configuration File
# Resumable YouTube channel harvester

[application]
log_level = "info"  # trace | debug | info | warn | error

[youtube]
api_key = "${YOUTUBE_API_KEY}"
base_url = "https://www.googleapis.com/youtube/v3"
timeout_seconds = 60

[input]
path = "Rechecked Channels List.xlsx"
# Column holding the @handles. Defaults to "channel_user", then to the
# first column where most values start with "@".
# handle_column = "channel_user"
# sheet = "Sheet1"

[output]
path = "youtube_results.csv"

[state]
checkpoint_path = "tubeharvest_checkpoint.json"
# Rows between intermediate rewrites of the output file
flush_every_rows = 5

[pacing]
# Fixed delays required by the API rate limits
page_delay_ms = 500
batch_delay_ms = 1000
row_delay_ms = 2000

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"  # daily | hourly | never
"#
}
