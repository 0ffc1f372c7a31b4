//! Wire models for the YouTube Data API v3
//!
//! Only the fields TubeHarvest reads are modelled. Everything is optional or
//! defaulted because the service omits parts freely (private statistics,
//! channels without uploads, videos without tags).

use crate::domain::{ChannelId, ChannelInfo, PlaylistId, VideoId, VideoPage, VideoRecord, VideoStats};
use serde::Deserialize;

/// `search.list` response
#[derive(Debug, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub snippet: Option<SearchSnippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippet {
    #[serde(default)]
    pub channel_id: Option<String>,
}

impl SearchListResponse {
    /// Channel id of the first result, if any
    pub fn first_channel_id(&self) -> Option<ChannelId> {
        self.items
            .iter()
            .filter_map(|item| item.snippet.as_ref()?.channel_id.as_deref())
            .find_map(|id| ChannelId::new(id).ok())
    }
}

/// `channels.list` response
#[derive(Debug, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<ChannelResource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelResource {
    pub id: String,
    #[serde(default)]
    pub snippet: Option<ChannelSnippet>,
    #[serde(default)]
    pub statistics: Option<ChannelStatistics>,
    #[serde(default)]
    pub content_details: Option<ChannelContentDetails>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub custom_url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default)]
    pub subscriber_count: Option<String>,
    #[serde(default)]
    pub video_count: Option<String>,
    #[serde(default)]
    pub view_count: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetails {
    #[serde(default)]
    pub related_playlists: Option<RelatedPlaylists>,
}

#[derive(Debug, Deserialize)]
pub struct RelatedPlaylists {
    #[serde(default)]
    pub uploads: Option<String>,
}

impl ChannelListResponse {
    /// Converts the first channel in the response, keyed by the requested id
    pub fn into_channel_info(self, requested: &ChannelId) -> Option<ChannelInfo> {
        let resource = self.items.into_iter().next()?;
        let snippet = resource.snippet.unwrap_or_default();
        let statistics = resource.statistics.unwrap_or_default();
        let uploads_playlist = resource
            .content_details
            .and_then(|d| d.related_playlists)
            .and_then(|p| p.uploads)
            .and_then(|id| PlaylistId::new(id).ok());

        let channel_id = ChannelId::new(resource.id).unwrap_or_else(|_| requested.clone());

        Some(ChannelInfo {
            channel_id,
            title: snippet.title,
            custom_url: snippet.custom_url,
            description: snippet.description,
            subscriber_count: parse_count(statistics.subscriber_count.as_deref()),
            video_count: parse_count(statistics.video_count.as_deref()),
            view_count: parse_count(statistics.view_count.as_deref()),
            uploads_playlist,
        })
    }
}

/// `playlistItems.list` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItemResource>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemResource {
    #[serde(default)]
    pub snippet: Option<PlaylistItemSnippet>,
    #[serde(default)]
    pub content_details: Option<PlaylistItemContentDetails>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemContentDetails {
    #[serde(default)]
    pub video_id: Option<String>,
}

impl From<PlaylistItemListResponse> for VideoPage {
    fn from(response: PlaylistItemListResponse) -> Self {
        let items = response
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.content_details?.video_id?;
                let video_id = VideoId::new(video_id).ok()?;
                let snippet = item.snippet.unwrap_or_default();
                Some(VideoRecord {
                    video_id,
                    title: snippet.title,
                    description: snippet.description,
                    published_at: snippet.published_at,
                })
            })
            .collect();

        VideoPage {
            items,
            next_page_token: response.next_page_token.filter(|t| !t.is_empty()),
        }
    }
}

/// `videos.list` response
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoResource>,
}

#[derive(Debug, Deserialize)]
pub struct VideoResource {
    pub id: String,
    #[serde(default)]
    pub snippet: Option<VideoSnippet>,
    #[serde(default)]
    pub statistics: Option<VideoStatistics>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VideoSnippet {
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default)]
    pub like_count: Option<String>,
    #[serde(default)]
    pub comment_count: Option<String>,
    #[serde(default)]
    pub view_count: Option<String>,
}

impl From<VideoListResponse> for Vec<VideoStats> {
    fn from(response: VideoListResponse) -> Self {
        response
            .items
            .into_iter()
            .map(|item| {
                let statistics = item.statistics.unwrap_or_default();
                VideoStats {
                    video_id: VideoId::new(item.id).ok(),
                    likes: parse_count(statistics.like_count.as_deref()),
                    comments: parse_count(statistics.comment_count.as_deref()),
                    views: parse_count(statistics.view_count.as_deref()),
                    tags: item.snippet.map(|s| s.tags).unwrap_or_default(),
                }
            })
            .collect()
    }
}

/// Counts arrive as decimal strings; absent or malformed counts read as zero
fn parse_count(value: Option<&str>) -> u64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_first_channel_id() {
        let json = r#"{"items": [{"snippet": {"channelId": "UCalpha", "title": "Alpha"}}]}"#;
        let response: SearchListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_channel_id().unwrap().as_str(), "UCalpha");

        let empty: SearchListResponse = serde_json::from_str(r#"{"kind": "x"}"#).unwrap();
        assert!(empty.first_channel_id().is_none());
    }

    #[test]
    fn test_channel_conversion() {
        let json = r#"{
            "items": [{
                "id": "UCalpha",
                "snippet": {"title": "Alpha", "description": "About", "customUrl": "@alpha"},
                "statistics": {"subscriberCount": "1200", "videoCount": "2", "viewCount": "99000"},
                "contentDetails": {"relatedPlaylists": {"uploads": "UUalpha"}}
            }]
        }"#;
        let response: ChannelListResponse = serde_json::from_str(json).unwrap();
        let requested = ChannelId::new("UCalpha").unwrap();
        let info = response.into_channel_info(&requested).unwrap();

        assert_eq!(info.title, "Alpha");
        assert_eq!(info.custom_url, "@alpha");
        assert_eq!(info.subscriber_count, 1200);
        assert_eq!(info.video_count, 2);
        assert_eq!(info.view_count, 99000);
        assert_eq!(info.uploads_playlist.unwrap().as_str(), "UUalpha");
    }

    #[test]
    fn test_channel_without_uploads_or_statistics() {
        let json = r#"{"items": [{"id": "UCbare", "snippet": {"title": "Bare"}}]}"#;
        let response: ChannelListResponse = serde_json::from_str(json).unwrap();
        let info = response
            .into_channel_info(&ChannelId::new("UCbare").unwrap())
            .unwrap();

        assert!(info.uploads_playlist.is_none());
        assert_eq!(info.subscriber_count, 0);
    }

    #[test]
    fn test_empty_channel_response() {
        let response: ChannelListResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(response
            .into_channel_info(&ChannelId::new("UCnone").unwrap())
            .is_none());
    }

    #[test]
    fn test_playlist_page_conversion() {
        let json = r#"{
            "nextPageToken": "CAUQAA",
            "items": [
                {
                    "snippet": {"title": "One", "description": "d1", "publishedAt": "2024-01-01T00:00:00Z"},
                    "contentDetails": {"videoId": "v1"}
                },
                {"snippet": {"title": "No id"}, "contentDetails": {}}
            ]
        }"#;
        let response: PlaylistItemListResponse = serde_json::from_str(json).unwrap();
        let page = VideoPage::from(response);

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].video_id.as_str(), "v1");
        assert_eq!(page.items[0].published_at, "2024-01-01T00:00:00Z");
        assert_eq!(page.next_page_token.as_deref(), Some("CAUQAA"));
    }

    #[test]
    fn test_empty_next_page_token_ends_listing() {
        let json = r#"{"items": [], "nextPageToken": ""}"#;
        let response: PlaylistItemListResponse = serde_json::from_str(json).unwrap();
        assert!(VideoPage::from(response).next_page_token.is_none());
    }

    #[test]
    fn test_video_stats_conversion() {
        let json = r#"{
            "items": [
                {"id": "v1", "snippet": {"tags": ["a", "b"]}, "statistics": {"likeCount": "5", "commentCount": "1", "viewCount": "70"}},
                {"id": "v2", "statistics": {"viewCount": "3"}}
            ]
        }"#;
        let response: VideoListResponse = serde_json::from_str(json).unwrap();
        let stats: Vec<VideoStats> = response.into();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].tags, vec!["a", "b"]);
        assert_eq!((stats[0].likes, stats[0].comments, stats[0].views), (5, 1, 70));
        assert_eq!((stats[1].likes, stats[1].comments, stats[1].views), (0, 0, 3));
        assert!(stats[1].tags.is_empty());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(Some("42")), 42);
        assert_eq!(parse_count(Some("n/a")), 0);
        assert_eq!(parse_count(None), 0);
    }
}
