//! External system integrations for TubeHarvest.
//!
//! - [`youtube`] - YouTube Data API v3
//!
//! # Design Pattern
//!
//! The raw remote calls sit behind the [`youtube::YouTubeApi`] trait so the
//! harvest logic can be exercised against in-memory implementations. The
//! [`youtube::DataSource`] adds the pagination, batching and pacing rules on
//! top of whichever implementation it is given.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tubeharvest::adapters::youtube::{DataSource, YouTubeClient};
//! use tubeharvest::config::{secret_string, PacingConfig, YouTubeConfig};
//! use tubeharvest::domain::ChannelHandle;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = YouTubeConfig {
//!     api_key: Some(secret_string("my-api-key".to_string())),
//!     ..Default::default()
//! };
//! let source = DataSource::new(Arc::new(YouTubeClient::new(&config)?), PacingConfig::default());
//!
//! let channel_id = source.resolve_handle(&ChannelHandle::new("@alpha")?).await;
//! # Ok(())
//! # }
//! ```

pub mod youtube;
