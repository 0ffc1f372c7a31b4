//! Remote data source with the harvest's failure semantics
//!
//! [`DataSource`] wraps a [`YouTubeApi`] and turns its four raw calls into the
//! operations the coordinator needs. No operation fails: a remote error is
//! logged and reported as "not found", an empty list, or a partial result.
//! Failed calls are skipped, never retried in place.

use super::api::YouTubeApi;
use crate::config::PacingConfig;
use crate::domain::{ChannelHandle, ChannelId, ChannelInfo, PlaylistId, VideoId, VideoRecord, VideoStats};
use std::sync::Arc;
use std::time::Duration;

/// Maximum number of video ids per statistics request
pub const STATS_BATCH_SIZE: usize = 50;

pub struct DataSource {
    api: Arc<dyn YouTubeApi>,
    pacing: PacingConfig,
}

impl DataSource {
    pub fn new(api: Arc<dyn YouTubeApi>, pacing: PacingConfig) -> Self {
        Self { api, pacing }
    }

    /// Resolves a handle to its channel id
    ///
    /// Tries the `@handle` form first, then the bare name as a plain text
    /// query. A failed first search ends the lookup.
    pub async fn resolve_handle(&self, handle: &ChannelHandle) -> Option<ChannelId> {
        for query in [handle.at_form(), handle.bare().to_string()] {
            match self.api.search_channel(&query).await {
                Ok(Some(channel_id)) => {
                    tracing::debug!(handle = %handle, query = %query, channel_id = %channel_id, "Resolved handle");
                    return Some(channel_id);
                }
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(handle = %handle, error = %e, "Error finding channel from handle");
                    return None;
                }
            }
        }

        tracing::warn!(handle = %handle, "Could not find channel ID for handle");
        None
    }

    /// Fetches channel metadata, `None` if the channel has no data or the
    /// call failed
    pub async fn fetch_channel_info(&self, channel_id: &ChannelId) -> Option<ChannelInfo> {
        match self.api.channel(channel_id).await {
            Ok(Some(info)) => Some(info),
            Ok(None) => {
                tracing::warn!(channel_id = %channel_id, "Channel returned no data");
                None
            }
            Err(e) => {
                tracing::warn!(channel_id = %channel_id, error = %e, "Error getting channel info");
                None
            }
        }
    }

    /// Lists every video in a playlist
    ///
    /// Pages are followed until no continuation token is returned. On error
    /// the videos gathered so far are returned.
    pub async fn list_videos(&self, playlist_id: &PlaylistId) -> Vec<VideoRecord> {
        let mut videos = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = match self
                .api
                .playlist_page(playlist_id, page_token.as_deref())
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(
                        playlist_id = %playlist_id,
                        fetched = videos.len(),
                        error = %e,
                        "Error getting videos, keeping partial list"
                    );
                    break;
                }
            };

            videos.extend(page.items);
            tracing::info!(playlist_id = %playlist_id, fetched = videos.len(), "Fetched videos so far");

            match page.next_page_token {
                Some(token) => {
                    page_token = Some(token);
                    pace(self.pacing.page_delay()).await;
                }
                None => break,
            }
        }

        tracing::info!(playlist_id = %playlist_id, total = videos.len(), "Total videos fetched");
        videos
    }

    /// Fetches statistics in batches of [`STATS_BATCH_SIZE`]
    ///
    /// A failed batch is skipped; its videos simply have no statistics.
    pub async fn fetch_video_stats(&self, video_ids: &[VideoId]) -> Vec<VideoStats> {
        let mut stats = Vec::with_capacity(video_ids.len());
        let batch_count = video_ids.len().div_ceil(STATS_BATCH_SIZE);

        for (batch_index, batch) in video_ids.chunks(STATS_BATCH_SIZE).enumerate() {
            if batch_index > 0 {
                pace(self.pacing.batch_delay()).await;
            }

            match self.api.video_stats(batch).await {
                Ok(batch_stats) => stats.extend(batch_stats),
                Err(e) => {
                    tracing::warn!(
                        batch = batch_index + 1,
                        batches = batch_count,
                        size = batch.len(),
                        error = %e,
                        "Error getting video statistics, skipping batch"
                    );
                }
            }
        }

        stats
    }
}

pub(crate) async fn pace(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HarvestError, Result, VideoPage, YouTubeError};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn no_pacing() -> PacingConfig {
        PacingConfig {
            page_delay_ms: 0,
            batch_delay_ms: 0,
            row_delay_ms: 0,
        }
    }

    fn remote_error() -> HarvestError {
        YouTubeError::ServerError {
            status: 500,
            message: "boom".to_string(),
        }
        .into()
    }

    fn video(id: &str) -> VideoRecord {
        VideoRecord {
            video_id: VideoId::new(id).unwrap(),
            title: id.to_uppercase(),
            description: String::new(),
            published_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    /// Scripted API; every call is recorded
    #[derive(Default)]
    struct ScriptedApi {
        searches: HashMap<String, std::result::Result<Option<&'static str>, ()>>,
        pages: HashMap<Option<String>, std::result::Result<VideoPage, ()>>,
        failing_stats_batches: Vec<usize>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedApi {
        fn record(&self, call: String) -> usize {
            let mut calls = self.calls.lock().unwrap();
            calls.push(call);
            calls.len()
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl YouTubeApi for ScriptedApi {
        async fn search_channel(&self, query: &str) -> Result<Option<ChannelId>> {
            self.record(format!("search:{query}"));
            match self.searches.get(query) {
                Some(Ok(found)) => Ok(found.map(|id| ChannelId::new(id).unwrap())),
                Some(Err(())) => Err(remote_error()),
                None => Ok(None),
            }
        }

        async fn channel(&self, channel_id: &ChannelId) -> Result<Option<ChannelInfo>> {
            self.record(format!("channel:{channel_id}"));
            Err(remote_error())
        }

        async fn playlist_page(
            &self,
            _playlist_id: &PlaylistId,
            page_token: Option<&str>,
        ) -> Result<VideoPage> {
            self.record(format!("page:{}", page_token.unwrap_or("-")));
            match self.pages.get(&page_token.map(str::to_string)) {
                Some(Ok(page)) => Ok(page.clone()),
                _ => Err(remote_error()),
            }
        }

        async fn video_stats(&self, video_ids: &[VideoId]) -> Result<Vec<VideoStats>> {
            let call = self.record(format!("stats:{}", video_ids.len()));
            let batch = self
                .calls()
                .iter()
                .take(call)
                .filter(|c| c.starts_with("stats:"))
                .count();
            if self.failing_stats_batches.contains(&batch) {
                return Err(remote_error());
            }
            Ok(video_ids
                .iter()
                .map(|id| VideoStats {
                    video_id: Some(id.clone()),
                    likes: 1,
                    ..Default::default()
                })
                .collect())
        }
    }

    fn source(api: ScriptedApi) -> (Arc<ScriptedApi>, DataSource) {
        let api = Arc::new(api);
        let source = DataSource::new(api.clone(), no_pacing());
        (api, source)
    }

    #[tokio::test]
    async fn test_resolve_handle_exact_query_first() {
        let mut api = ScriptedApi::default();
        api.searches.insert("@alpha".to_string(), Ok(Some("UCalpha")));
        let (api, source) = source(api);

        let id = source
            .resolve_handle(&ChannelHandle::new("@alpha").unwrap())
            .await;

        assert_eq!(id.unwrap().as_str(), "UCalpha");
        assert_eq!(api.calls(), vec!["search:@alpha"]);
    }

    #[tokio::test]
    async fn test_resolve_handle_falls_back_to_text_query() {
        let mut api = ScriptedApi::default();
        api.searches.insert("@beta".to_string(), Ok(None));
        api.searches.insert("beta".to_string(), Ok(Some("UCbeta")));
        let (api, source) = source(api);

        let id = source
            .resolve_handle(&ChannelHandle::new("@beta").unwrap())
            .await;

        assert_eq!(id.unwrap().as_str(), "UCbeta");
        assert_eq!(api.calls(), vec!["search:@beta", "search:beta"]);
    }

    #[tokio::test]
    async fn test_resolve_handle_not_found() {
        let (api, source) = source(ScriptedApi::default());

        let id = source
            .resolve_handle(&ChannelHandle::new("@ghost").unwrap())
            .await;

        assert!(id.is_none());
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_resolve_handle_error_is_not_found() {
        let mut api = ScriptedApi::default();
        api.searches.insert("@broken".to_string(), Err(()));
        let (api, source) = source(api);

        let id = source
            .resolve_handle(&ChannelHandle::new("@broken").unwrap())
            .await;

        assert!(id.is_none());
        assert_eq!(api.calls(), vec!["search:@broken"]);
    }

    #[tokio::test]
    async fn test_channel_error_is_absent() {
        let (_, source) = source(ScriptedApi::default());
        let info = source
            .fetch_channel_info(&ChannelId::new("UCx").unwrap())
            .await;
        assert!(info.is_none());
    }

    #[tokio::test]
    async fn test_list_videos_follows_every_page() {
        let mut api = ScriptedApi::default();
        api.pages.insert(
            None,
            Ok(VideoPage {
                items: vec![video("v1"), video("v2")],
                next_page_token: Some("P2".to_string()),
            }),
        );
        api.pages.insert(
            Some("P2".to_string()),
            Ok(VideoPage {
                items: vec![video("v3"), video("v4")],
                next_page_token: Some("P3".to_string()),
            }),
        );
        api.pages.insert(
            Some("P3".to_string()),
            Ok(VideoPage {
                items: vec![video("v5")],
                next_page_token: None,
            }),
        );
        let (api, source) = source(api);

        let videos = source.list_videos(&PlaylistId::new("UU1").unwrap()).await;

        let ids: Vec<&str> = videos.iter().map(|v| v.video_id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "v2", "v3", "v4", "v5"]);
        assert_eq!(api.calls(), vec!["page:-", "page:P2", "page:P3"]);
    }

    #[tokio::test]
    async fn test_list_videos_keeps_partial_result_on_error() {
        let mut api = ScriptedApi::default();
        api.pages.insert(
            None,
            Ok(VideoPage {
                items: vec![video("v1")],
                next_page_token: Some("BROKEN".to_string()),
            }),
        );
        let (_, source) = source(api);

        let videos = source.list_videos(&PlaylistId::new("UU1").unwrap()).await;

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].video_id.as_str(), "v1");
    }

    #[tokio::test]
    async fn test_fetch_video_stats_batches_of_fifty() {
        let (api, source) = source(ScriptedApi::default());
        let ids: Vec<VideoId> = (0..120)
            .map(|i| VideoId::new(format!("v{i}")).unwrap())
            .collect();

        let stats = source.fetch_video_stats(&ids).await;

        assert_eq!(stats.len(), 120);
        assert_eq!(api.calls(), vec!["stats:50", "stats:50", "stats:20"]);
    }

    #[tokio::test]
    async fn test_fetch_video_stats_skips_failed_batch() {
        let api = ScriptedApi {
            failing_stats_batches: vec![2],
            ..Default::default()
        };
        let (_, source) = source(api);
        let ids: Vec<VideoId> = (0..120)
            .map(|i| VideoId::new(format!("v{i}")).unwrap())
            .collect();

        let stats = source.fetch_video_stats(&ids).await;

        assert_eq!(stats.len(), 70);
        assert!(stats
            .iter()
            .all(|s| s.video_id.as_ref().map(|id| id.as_str()) != Some("v50")));
    }

    #[tokio::test]
    async fn test_fetch_video_stats_empty_input() {
        let (api, source) = source(ScriptedApi::default());
        assert!(source.fetch_video_stats(&[]).await.is_empty());
        assert!(api.calls().is_empty());
    }
}
