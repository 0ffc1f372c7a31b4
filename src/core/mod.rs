//! Core business logic for TubeHarvest.
//!
//! # Modules
//!
//! - [`input`] - Input sheet reading and handle column selection
//! - [`state`] - Checkpoint persistence for resumable runs
//! - [`sink`] - CSV output
//! - [`harvest`] - Row-by-row orchestration and run summary
//!
//! # Harvest Workflow
//!
//! 1. **Load Input**: Read the sheet and pick the handle column
//! 2. **Load State**: Read the checkpoint, if any, and skip rows already done
//! 3. **Fetch**: Resolve the handle, fetch channel info, list uploads, fetch statistics
//! 4. **Join**: Build one result row per video
//! 5. **Checkpoint**: Save the cursor and results after every whole row
//! 6. **Flush**: Rewrite the output file every few rows and at the end
//! 7. **Clear**: Remove the checkpoint once every row is done
//!
//! # Example
//!
//! ```rust,no_run
//! use tubeharvest::config::load_config;
//! use tubeharvest::core::harvest::HarvestCoordinator;
//! use tubeharvest::core::input::{default_selector, read_table, ColumnSelector};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("tubeharvest.toml")?;
//! let table = read_table(&config.input.path, config.input.sheet.as_deref())?;
//! let column = default_selector(config.input.handle_column.as_deref())
//!     .select(&table)
//!     .ok_or("no handle column")?;
//!
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! let coordinator = HarvestCoordinator::from_config(&config, shutdown_rx)?;
//! let summary = coordinator.run(&table.handles(column)).await?;
//!
//! println!("Videos: {}", summary.videos_written);
//! # Ok(())
//! # }
//! ```

pub(crate) mod atomic;
pub mod harvest;
pub mod input;
pub mod sink;
pub mod state;
