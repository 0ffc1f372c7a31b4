//! Typed records flowing through a harvest
//!
//! Channel metadata, playlist items and statistics are fetched separately and
//! joined into one [`ResultRow`] per video, keyed by [`VideoId`].

use super::ids::{ChannelHandle, ChannelId, PlaylistId, VideoId};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Canonical output columns, in order
pub const RESULT_COLUMNS: [&str; 12] = [
    "channel_user",
    "video_id",
    "title",
    "description",
    "published",
    "channel",
    "channel_id",
    "tags",
    "likes",
    "comments",
    "views",
    "video_url",
];

/// One row of the input sheet
///
/// `index` is zero-based and doubles as the resume cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    pub index: usize,
    pub raw: String,
}

impl InputRow {
    pub fn new(index: usize, raw: impl Into<String>) -> Self {
        Self {
            index,
            raw: raw.into(),
        }
    }

    /// Parsed handle, or `None` for blank cells
    pub fn handle(&self) -> Option<ChannelHandle> {
        ChannelHandle::new(self.raw.as_str()).ok()
    }
}

/// Channel metadata, fetched once per channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub channel_id: ChannelId,
    /// Display name
    pub title: String,
    /// The channel's own handle / custom URL as reported by the platform
    pub custom_url: String,
    pub description: String,
    pub subscriber_count: u64,
    pub video_count: u64,
    pub view_count: u64,
    /// Uploads collection; channels without one are skipped
    pub uploads_playlist: Option<PlaylistId>,
}

/// A video as listed in an uploads collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    pub video_id: VideoId,
    pub title: String,
    pub description: String,
    /// Publish timestamp exactly as reported (RFC 3339)
    pub published_at: String,
}

impl VideoRecord {
    pub fn video_url(&self) -> String {
        self.video_id.watch_url()
    }
}

/// One page of an uploads collection listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoPage {
    pub items: Vec<VideoRecord>,
    pub next_page_token: Option<String>,
}

/// Engagement statistics for a single video
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoStats {
    pub video_id: Option<VideoId>,
    pub likes: u64,
    pub comments: u64,
    pub views: u64,
    pub tags: Vec<String>,
}

/// Flattened output row, one per video
///
/// This is also the unit persisted in the checkpoint. Fields that are not part
/// of [`RESULT_COLUMNS`] are kept in `extra` so a checkpoint written by another
/// tool round-trips and its columns reach the output file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(default)]
    pub channel_user: String,
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub likes: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub comments: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub views: u64,
    #[serde(default)]
    pub video_url: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ResultRow {
    /// Joins one video with its channel and (possibly missing) statistics
    ///
    /// Missing statistics default to zero counts and an empty tag list.
    pub fn join(
        handle: &ChannelHandle,
        channel: &ChannelInfo,
        video: &VideoRecord,
        stats: Option<&VideoStats>,
    ) -> Self {
        let (likes, comments, views, tags) = match stats {
            Some(s) => (s.likes, s.comments, s.views, s.tags.join(",")),
            None => (0, 0, 0, String::new()),
        };

        Self {
            channel_user: handle.as_str().to_string(),
            video_id: video.video_id.as_str().to_string(),
            title: video.title.clone(),
            description: video.description.clone(),
            published: video.published_at.clone(),
            channel: channel.title.clone(),
            channel_id: channel.channel_id.as_str().to_string(),
            tags,
            likes,
            comments,
            views,
            video_url: video.video_url(),
            extra: BTreeMap::new(),
        }
    }

    /// Value of a named column rendered as text, `None` if the row lacks it
    pub fn column(&self, name: &str) -> Option<String> {
        let value = match name {
            "channel_user" => self.channel_user.clone(),
            "video_id" => self.video_id.clone(),
            "title" => self.title.clone(),
            "description" => self.description.clone(),
            "published" => self.published.clone(),
            "channel" => self.channel.clone(),
            "channel_id" => self.channel_id.clone(),
            "tags" => self.tags.clone(),
            "likes" => self.likes.to_string(),
            "comments" => self.comments.to_string(),
            "views" => self.views.to_string(),
            "video_url" => self.video_url.clone(),
            other => {
                return self.extra.get(other).map(|v| match v {
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Null => String::new(),
                    v => v.to_string(),
                })
            }
        };
        Some(value)
    }
}

/// Accepts counts written as numbers, numeric strings or null
///
/// The video platform reports statistics as strings, so checkpoints produced
/// from raw responses may carry `"likes": "12"`.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .ok_or_else(|| D::Error::custom(format!("invalid count: {n}"))),
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(0),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("invalid count: {s:?}"))),
        other => Err(D::Error::custom(format!("invalid count: {other}"))),
    }
}
