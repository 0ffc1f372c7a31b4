//! Harvest orchestration
//!
//! - [`coordinator`] - resumable row-by-row harvest loop
//! - [`summary`] - run summary and outcome

pub mod coordinator;
pub mod summary;

pub use coordinator::HarvestCoordinator;
pub use summary::{HarvestOutcome, HarvestSummary};
