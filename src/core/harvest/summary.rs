//! Harvest summary and reporting

use std::time::Duration;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarvestOutcome {
    /// Every input row was processed; the checkpoint has been removed
    Completed,
    /// A shutdown signal stopped the run; the checkpoint was kept
    Interrupted,
    /// A row-fatal error stopped the run; the checkpoint was kept
    Aborted(String),
}

/// Summary of a harvest run
#[derive(Debug, Clone)]
pub struct HarvestSummary {
    /// Rows in the input sheet
    pub total_rows: usize,

    /// Cursor loaded from the checkpoint
    pub resumed_from: usize,

    /// Cursor when the run stopped
    pub processed_rows: usize,

    /// Rows in this run that produced output
    pub harvested_rows: usize,

    /// Rows in this run skipped as not found or empty
    pub skipped_rows: usize,

    /// Total result rows (including resumed ones) held at the end
    pub videos_written: usize,

    pub outcome: HarvestOutcome,

    pub duration: Duration,
}

impl HarvestSummary {
    pub fn new(total_rows: usize, resumed_from: usize) -> Self {
        Self {
            total_rows,
            resumed_from,
            processed_rows: resumed_from,
            harvested_rows: 0,
            skipped_rows: 0,
            videos_written: 0,
            outcome: HarvestOutcome::Completed,
            duration: Duration::from_secs(0),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_complete(&self) -> bool {
        self.outcome == HarvestOutcome::Completed
    }

    pub fn remaining_rows(&self) -> usize {
        self.total_rows.saturating_sub(self.processed_rows)
    }

    pub fn log_summary(&self) {
        match &self.outcome {
            HarvestOutcome::Completed => tracing::info!(
                total_rows = self.total_rows,
                resumed_from = self.resumed_from,
                harvested = self.harvested_rows,
                skipped = self.skipped_rows,
                videos = self.videos_written,
                duration_secs = self.duration.as_secs(),
                "Harvest completed"
            ),
            HarvestOutcome::Interrupted => tracing::warn!(
                processed_rows = self.processed_rows,
                remaining = self.remaining_rows(),
                videos = self.videos_written,
                "Harvest interrupted, progress saved"
            ),
            HarvestOutcome::Aborted(reason) => tracing::error!(
                processed_rows = self.processed_rows,
                remaining = self.remaining_rows(),
                videos = self.videos_written,
                reason = %reason,
                "Harvest aborted, progress saved"
            ),
        }
    }
}
