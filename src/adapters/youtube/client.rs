//! HTTP client for the YouTube Data API v3

use super::api::YouTubeApi;
use super::models::{
    ChannelListResponse, PlaylistItemListResponse, SearchListResponse, VideoListResponse,
};
use crate::config::{SecretString, YouTubeConfig};
use crate::domain::{
    ChannelId, ChannelInfo, HarvestError, PlaylistId, Result, VideoId, VideoPage, VideoStats,
    YouTubeError,
};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Page size requested from `playlistItems.list` (the service maximum)
const PLAYLIST_PAGE_SIZE: &str = "50";

/// YouTube Data API client
///
/// Each method issues exactly one request. Errors are mapped to
/// [`YouTubeError`] without interpretation; deciding what a failure means
/// for the harvest is left to the caller.
///
/// # Example
///
/// ```no_run
/// use tubeharvest::adapters::youtube::{YouTubeApi, YouTubeClient};
/// use tubeharvest::config::{secret_string, YouTubeConfig};
///
/// # async fn example() -> tubeharvest::domain::Result<()> {
/// let config = YouTubeConfig {
///     api_key: Some(secret_string("key".to_string())),
///     ..Default::default()
/// };
/// let client = YouTubeClient::new(&config)?;
/// let channel_id = client.search_channel("@alpha").await?;
/// # Ok(())
/// # }
/// ```
pub struct YouTubeClient {
    base_url: String,
    client: Client,
    api_key: SecretString,
}

impl YouTubeClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API key is set or the HTTP client
    /// cannot be built.
    pub fn new(config: &YouTubeConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| HarvestError::Configuration("youtube.api_key is not set".to_string()))?;

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                HarvestError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}/{resource}` with the API key appended and decode the
    /// JSON body
    async fn get<T: DeserializeOwned>(&self, resource: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{}", self.base_url, resource);

        tracing::debug!(resource = resource, "Calling YouTube API");

        let key: &str = self.api_key.expose_secret().as_ref();
        let resp = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", key)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    YouTubeError::Timeout(format!("{resource}: {e}"))
                } else {
                    YouTubeError::ConnectionFailed(format!("{resource}: {e}"))
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(status_error(status, message).into());
        }

        resp.json::<T>()
            .await
            .map_err(|e| HarvestError::from(YouTubeError::InvalidResponse(format!("{resource}: {e}"))))
    }
}

fn status_error(status: StatusCode, message: String) -> YouTubeError {
    match status {
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            YouTubeError::QuotaExceeded(message)
        }
        s if s.is_server_error() => YouTubeError::ServerError {
            status: s.as_u16(),
            message,
        },
        s => YouTubeError::ClientError {
            status: s.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl YouTubeApi for YouTubeClient {
    async fn search_channel(&self, query: &str) -> Result<Option<ChannelId>> {
        let response: SearchListResponse = self
            .get(
                "search",
                &[
                    ("part", "snippet"),
                    ("q", query),
                    ("type", "channel"),
                    ("maxResults", "1"),
                ],
            )
            .await?;

        Ok(response.first_channel_id())
    }

    async fn channel(&self, channel_id: &ChannelId) -> Result<Option<ChannelInfo>> {
        let response: ChannelListResponse = self
            .get(
                "channels",
                &[
                    ("part", "snippet,statistics,contentDetails"),
                    ("id", channel_id.as_str()),
                ],
            )
            .await?;

        Ok(response.into_channel_info(channel_id))
    }

    async fn playlist_page(
        &self,
        playlist_id: &PlaylistId,
        page_token: Option<&str>,
    ) -> Result<VideoPage> {
        let mut params = vec![
            ("part", "snippet,contentDetails"),
            ("playlistId", playlist_id.as_str()),
            ("maxResults", PLAYLIST_PAGE_SIZE),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let response: PlaylistItemListResponse = self.get("playlistItems", &params).await?;
        Ok(response.into())
    }

    async fn video_stats(&self, video_ids: &[VideoId]) -> Result<Vec<VideoStats>> {
        let ids = video_ids
            .iter()
            .map(VideoId::as_str)
            .collect::<Vec<_>>()
            .join(",");

        let response: VideoListResponse = self
            .get(
                "videos",
                &[("part", "statistics,snippet,contentDetails"), ("id", ids.as_str())],
            )
            .await?;

        Ok(response.into())
    }
}
