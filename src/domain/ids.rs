//! Domain identifier types with validation
//!
//! Newtype wrappers for the identifiers the remote video platform hands out.
//! Each type keeps the raw string but refuses empty values, so a channel id can
//! never be passed where a playlist id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Channel handle as it appears in the input sheet
///
/// Handles are short human-readable names (`@somechannel`). The handle is kept
/// exactly as given (trimmed), since it is echoed back in every output row.
///
/// # Examples
///
/// ```
/// use tubeharvest::domain::ids::ChannelHandle;
///
/// let handle = ChannelHandle::new(" @alpha ").unwrap();
/// assert_eq!(handle.as_str(), "@alpha");
/// assert_eq!(handle.bare(), "alpha");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelHandle(String);

impl ChannelHandle {
    /// Creates a new ChannelHandle, trimming surrounding whitespace
    ///
    /// # Returns
    ///
    /// Returns `Err` if the handle is empty after trimming, or is only an `@`.
    pub fn new(handle: impl Into<String>) -> Result<Self, String> {
        let handle = handle.into();
        let trimmed = handle.trim();
        if trimmed.is_empty() || trimmed == "@" {
            return Err("Channel handle cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the handle as given, including any leading `@`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the handle without its leading `@`
    pub fn bare(&self) -> &str {
        self.0.strip_prefix('@').unwrap_or(&self.0)
    }

    /// Returns the handle in `@name` form, as used for exact-handle searches
    pub fn at_form(&self) -> String {
        format!("@{}", self.bare())
    }
}

impl fmt::Display for ChannelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChannelHandle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Permanent channel identifier (`UC...`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId(String);

impl ChannelId {
    /// Creates a new ChannelId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Channel ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the channel ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChannelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Playlist identifier, used for a channel's uploads collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaylistId(String);

impl PlaylistId {
    /// Creates a new PlaylistId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Playlist ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the playlist ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlaylistId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Video identifier
///
/// Unique within a channel; used as the join key between playlist items and
/// their statistics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VideoId(String);

impl VideoId {
    /// Creates a new VideoId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Video ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the video ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Public watch URL for this video
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VideoId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_channel_handle_trims() {
        let handle = ChannelHandle::new("  @alpha\t").unwrap();
        assert_eq!(handle.as_str(), "@alpha");
    }

    #[test_case("@beta", "beta", "@beta" ; "with at sign")]
    #[test_case("gamma", "gamma", "@gamma" ; "without at sign")]
    #[test_case(" @delta ", "delta", "@delta" ; "padded")]
    fn test_channel_handle_bare_and_at_form(raw: &str, bare: &str, at_form: &str) {
        let handle = ChannelHandle::new(raw).unwrap();
        assert_eq!(handle.bare(), bare);
        assert_eq!(handle.at_form(), at_form);
    }

    #[test]
    fn test_channel_handle_empty_fails() {
        assert!(ChannelHandle::new("").is_err());
        assert!(ChannelHandle::new("   ").is_err());
        assert!(ChannelHandle::new("@").is_err());
    }

    #[test]
    fn test_channel_id_empty_fails() {
        assert!(ChannelId::new("").is_err());
        assert!(ChannelId::new("UC123").is_ok());
    }

    #[test]
    fn test_playlist_id_from_str() {
        let id: PlaylistId = "UU123".parse().unwrap();
        assert_eq!(id.as_str(), "UU123");
    }

    #[test]
    fn test_video_id_watch_url() {
        let id = VideoId::new("dQw4w9WgXcQ").unwrap();
        assert_eq!(id.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }

    #[test]
    fn test_video_id_serialization() {
        let id = VideoId::new("abc").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc\"");
        let deserialized: VideoId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
