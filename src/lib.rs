// TubeHarvest - Resumable YouTube channel harvester
// Copyright (c) 2025 TubeHarvest Contributors
// Licensed under the MIT License

//! # TubeHarvest - Resumable YouTube channel harvester
//!
//! TubeHarvest reads a sheet of channel `@handles`, fetches every video of
//! each channel with its engagement statistics from the YouTube Data API, and
//! writes one CSV row per video. Progress is checkpointed after every input
//! row, so an interrupted run picks up where it stopped.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (input, checkpoint state, sink, harvest loop)
//! - [`adapters`] - External integrations (YouTube Data API)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tubeharvest::config::load_config;
//! use tubeharvest::core::harvest::HarvestCoordinator;
//! use tubeharvest::domain::InputRow;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("tubeharvest.toml")?;
//!     let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!
//!     let coordinator = HarvestCoordinator::from_config(&config, shutdown_rx)?;
//!     let rows = vec![InputRow::new(0, "@alpha"), InputRow::new(1, "@beta")];
//!     let summary = coordinator.run(&rows).await?;
//!
//!     println!("Harvested {} videos", summary.videos_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Resuming
//!
//! The checkpoint holds the number of input rows fully processed and every
//! result row collected so far. It is saved only between rows, so a crash
//! loses at most the row in progress, and it is deleted once the whole input
//! has been processed.
//!
//! ```rust,no_run
//! use tubeharvest::core::state::CheckpointStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = CheckpointStore::new("tubeharvest_checkpoint.json");
//! let checkpoint = store.load()?;
//! println!("Next row: {}", checkpoint.processed_row_count + 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Library code returns [`domain::HarvestError`]. Remote failures never stop
//! a run on their own: the data source logs them and reports the lookup as
//! not found, so the affected row is skipped or under-reported.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
