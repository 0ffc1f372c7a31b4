//! YouTube Data API adapter
//!
//! - [`YouTubeApi`] - one method per remote call
//! - [`YouTubeClient`] - `reqwest` implementation against the Data API v3
//! - [`DataSource`] - fallback, pagination, batching and pacing on top of any
//!   `YouTubeApi`

pub mod api;
pub mod client;
pub mod models;
pub mod source;

pub use api::YouTubeApi;
pub use client::YouTubeClient;
pub use source::{DataSource, STATS_BATCH_SIZE};
