//! Harvest coordinator - drives the row-by-row workflow
//!
//! For each input row the coordinator resolves the handle, fetches the
//! channel, lists its uploads, fetches statistics and joins them into result
//! rows. After every whole row the checkpoint is saved; every
//! `flush_every_rows` rows the output file is rewritten.
//!
//! A shutdown signal or a row-fatal error ends the run early. In both cases
//! the checkpoint and the output file are written from the results of the
//! rows completed so far, and the summary reports how the run ended.

use crate::adapters::youtube::source::pace;
use crate::adapters::youtube::{DataSource, YouTubeClient};
use crate::config::HarvestConfig;
use crate::core::harvest::summary::{HarvestOutcome, HarvestSummary};
use crate::core::sink::CsvSink;
use crate::core::state::CheckpointStore;
use crate::domain::{InputRow, Result, ResultRow, VideoId, VideoStats};
use crate::{log_error_with_context, log_row_progress};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;

/// Result of processing a single input row
#[derive(Debug)]
enum RowOutcome {
    Harvested(Vec<ResultRow>),
    Skipped(&'static str),
}

pub struct HarvestCoordinator {
    source: DataSource,
    store: CheckpointStore,
    sink: CsvSink,
    flush_every_rows: usize,
    row_delay: Duration,
    shutdown: watch::Receiver<bool>,
}

impl HarvestCoordinator {
    pub fn new(
        config: &HarvestConfig,
        source: DataSource,
        store: CheckpointStore,
        sink: CsvSink,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            source,
            store,
            sink,
            flush_every_rows: config.state.flush_every_rows.max(1),
            row_delay: config.pacing.row_delay(),
            shutdown,
        }
    }

    /// Builds the coordinator and its YouTube client from configuration
    pub fn from_config(config: &HarvestConfig, shutdown: watch::Receiver<bool>) -> Result<Self> {
        let client = YouTubeClient::new(&config.youtube)?;
        let source = DataSource::new(Arc::new(client), config.pacing.clone());

        Ok(Self::new(
            config,
            source,
            CheckpointStore::new(&config.state.checkpoint_path),
            CsvSink::new(&config.output.path),
            shutdown,
        ))
    }

    pub fn store(&self) -> &CheckpointStore {
        &self.store
    }

    /// Runs the harvest over `rows`, resuming from the stored checkpoint
    ///
    /// # Errors
    ///
    /// Only a checkpoint that cannot be loaded is returned as an error. Once
    /// processing has started, failures end the run with
    /// [`HarvestOutcome::Aborted`] instead.
    pub async fn run(&self, rows: &[InputRow]) -> Result<HarvestSummary> {
        let start_time = Instant::now();
        let total = rows.len();

        let checkpoint = self.store.load()?;
        let mut processed = checkpoint.processed_row_count;
        if processed > total {
            tracing::warn!(
                processed_row_count = processed,
                total_rows = total,
                "Checkpoint is ahead of the input, treating all rows as processed"
            );
            processed = total;
        }
        let mut results = checkpoint.results;

        let mut summary = HarvestSummary::new(total, processed);
        if processed > 0 {
            tracing::info!(
                resumed_from = processed,
                results = results.len(),
                "Resuming from checkpoint"
            );
        }

        let mut shutdown = self.shutdown.clone();
        let mut outcome = HarvestOutcome::Completed;

        for row in &rows[processed..] {
            if *shutdown.borrow() {
                outcome = HarvestOutcome::Interrupted;
                break;
            }

            log_row_progress!(row.index, total, row.raw);

            let row_outcome = tokio::select! {
                biased;
                _ = shutdown_requested(&mut shutdown) => None,
                done = self.process_row(row) => Some(done),
            };

            match row_outcome {
                None => {
                    tracing::warn!(row = row.index + 1, "Shutdown requested, abandoning current row");
                    outcome = HarvestOutcome::Interrupted;
                    break;
                }
                Some(RowOutcome::Skipped(reason)) => {
                    tracing::info!(row = row.index + 1, handle = %row.raw, reason, "Skipping row");
                    summary.skipped_rows += 1;
                }
                Some(RowOutcome::Harvested(new_rows)) => {
                    tracing::info!(
                        row = row.index + 1,
                        handle = %row.raw,
                        videos = new_rows.len(),
                        "Harvested channel"
                    );
                    results.extend(new_rows);
                    summary.harvested_rows += 1;
                }
            }

            processed += 1;

            if let Err(e) = self.store.save(processed, &results) {
                log_error_with_context!(e, "Saving checkpoint");
                outcome = HarvestOutcome::Aborted(e.to_string());
                break;
            }

            if processed % self.flush_every_rows == 0 && processed < total {
                if let Err(e) = self.sink.write_all(&results) {
                    log_error_with_context!(e, "Flushing results");
                    outcome = HarvestOutcome::Aborted(e.to_string());
                    break;
                }
            }

            if processed < total {
                let interrupted = tokio::select! {
                    biased;
                    _ = shutdown_requested(&mut shutdown) => true,
                    _ = pace(self.row_delay) => false,
                };
                if interrupted {
                    outcome = HarvestOutcome::Interrupted;
                    break;
                }
            }
        }

        summary.processed_rows = processed;
        summary.videos_written = results.len();
        summary.outcome = self.finish(outcome, processed, &results);

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }

    /// Final flush, then either clear the checkpoint or make sure it is saved
    fn finish(
        &self,
        outcome: HarvestOutcome,
        processed: usize,
        results: &[ResultRow],
    ) -> HarvestOutcome {
        if outcome == HarvestOutcome::Completed {
            if let Err(e) = self.sink.write_all(results) {
                log_error_with_context!(e, "Writing final results");
                return HarvestOutcome::Aborted(e.to_string());
            }
            if let Err(e) = self.store.clear() {
                log_error_with_context!(e, "Clearing checkpoint");
            }
            return outcome;
        }

        if let Err(e) = self.store.save(processed, results) {
            log_error_with_context!(e, "Saving checkpoint before exit");
        }
        if let Err(e) = self.sink.write_all(results) {
            log_error_with_context!(e, "Flushing results before exit");
        }
        outcome
    }

    async fn process_row(&self, row: &InputRow) -> RowOutcome {
        let Some(handle) = row.handle() else {
            return RowOutcome::Skipped("blank handle");
        };

        let Some(channel_id) = self.source.resolve_handle(&handle).await else {
            return RowOutcome::Skipped("handle did not resolve");
        };

        let Some(channel) = self.source.fetch_channel_info(&channel_id).await else {
            return RowOutcome::Skipped("channel info unavailable");
        };

        let Some(uploads) = channel.uploads_playlist.as_ref() else {
            return RowOutcome::Skipped("channel has no uploads collection");
        };

        let videos = self.source.list_videos(uploads).await;
        if videos.is_empty() {
            return RowOutcome::Skipped("no videos found");
        }

        let video_ids: Vec<VideoId> = videos.iter().map(|v| v.video_id.clone()).collect();
        let stats = self.source.fetch_video_stats(&video_ids).await;
        let stats_by_id: HashMap<&VideoId, &VideoStats> = stats
            .iter()
            .filter_map(|s| s.video_id.as_ref().map(|id| (id, s)))
            .collect();

        RowOutcome::Harvested(
            videos
                .iter()
                .map(|video| {
                    ResultRow::join(
                        &handle,
                        &channel,
                        video,
                        stats_by_id.get(&video.video_id).copied(),
                    )
                })
                .collect(),
        )
    }
}

/// Resolves once the shutdown flag is set; never resolves if the sender is gone
async fn shutdown_requested(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
