//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for TubeHarvest using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// TubeHarvest - Resumable YouTube channel harvester
#[derive(Parser, Debug)]
#[command(name = "tubeharvest")]
#[command(version, about, long_about = None)]
#[command(author = "TubeHarvest Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "tubeharvest.toml", env = "TUBEHARVEST_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "TUBEHARVEST_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Harvest video metadata for every channel in the input sheet
    Harvest(commands::harvest::HarvestArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show checkpoint progress
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
