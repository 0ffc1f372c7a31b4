//! Remote video platform trait
//!
//! `YouTubeApi` is the seam between harvesting logic and the HTTP service:
//! one method per remote call, no pagination, batching or pacing. Those live
//! in [`DataSource`](super::DataSource), so tests can swap in a scripted
//! implementation.

use crate::domain::{ChannelId, ChannelInfo, PlaylistId, Result, VideoId, VideoPage, VideoStats};
use async_trait::async_trait;

#[async_trait]
pub trait YouTubeApi: Send + Sync {
    /// Runs a channel search and returns the first result's id
    ///
    /// `Ok(None)` means the search succeeded but matched nothing.
    async fn search_channel(&self, query: &str) -> Result<Option<ChannelId>>;

    /// Looks up one channel's snippet, statistics and uploads collection
    async fn channel(&self, channel_id: &ChannelId) -> Result<Option<ChannelInfo>>;

    /// Fetches one page of a playlist, `page_token` being the continuation
    /// returned with the previous page
    async fn playlist_page(
        &self,
        playlist_id: &PlaylistId,
        page_token: Option<&str>,
    ) -> Result<VideoPage>;

    /// Fetches statistics for at most [`STATS_BATCH_SIZE`](super::STATS_BATCH_SIZE) videos
    async fn video_stats(&self, video_ids: &[VideoId]) -> Result<Vec<VideoStats>>;
}
