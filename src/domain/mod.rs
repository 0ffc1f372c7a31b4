//! Domain models and types for TubeHarvest.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ChannelHandle`], [`ChannelId`], [`PlaylistId`], [`VideoId`])
//! - **Typed records** ([`ChannelInfo`], [`VideoRecord`], [`VideoStats`], [`ResultRow`])
//! - **Error types** ([`HarvestError`], [`YouTubeError`])
//! - **Result type alias** ([`Result`])
//!
//! Records are joined by declared keys rather than ad hoc field lookups:
//!
//! ```rust
//! use tubeharvest::domain::{ChannelHandle, ChannelId, ChannelInfo, ResultRow, VideoId, VideoRecord};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let handle = ChannelHandle::new("@alpha")?;
//! let channel = ChannelInfo {
//!     channel_id: ChannelId::new("UCalpha")?,
//!     title: "Alpha".to_string(),
//!     custom_url: "@alpha".to_string(),
//!     description: String::new(),
//!     subscriber_count: 0,
//!     video_count: 1,
//!     view_count: 0,
//!     uploads_playlist: None,
//! };
//! let video = VideoRecord {
//!     video_id: VideoId::new("v1")?,
//!     title: "First".to_string(),
//!     description: String::new(),
//!     published_at: "2024-01-01T00:00:00Z".to_string(),
//! };
//!
//! let row = ResultRow::join(&handle, &channel, &video, None);
//! assert_eq!(row.likes, 0);
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod errors;
pub mod ids;
pub mod records;
pub mod result;

pub use errors::{HarvestError, YouTubeError};
pub use ids::{ChannelHandle, ChannelId, PlaylistId, VideoId};
pub use records::{
    ChannelInfo, InputRow, ResultRow, VideoPage, VideoRecord, VideoStats, RESULT_COLUMNS,
};
pub use result::Result;
