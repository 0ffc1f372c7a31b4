//! Error context extension trait
//!
//! Adds `.context()` and `.with_context()` to any `Result` whose error
//! converts into [`HarvestError`]. Unlike `anyhow::Context` the error keeps
//! its variant, so callers can still tell an input problem from a checkpoint
//! problem after context has been attached.
//!
//! # Examples
//!
//! ```rust
//! use tubeharvest::domain::{HarvestError, Result};
//! use tubeharvest::domain::context::ResultExt;
//!
//! fn read_sheet(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .map_err(|e| HarvestError::Input(e.to_string()))
//!         .with_context(|| format!("Failed to read {path}"))
//! }
//! ```

use crate::domain::errors::HarvestError;
use crate::domain::result::Result;
use std::fmt::Display;

pub trait ResultExt<T> {
    /// Prefix the error message with `context`
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Like [`ResultExt::context`], but only builds the context on error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<HarvestError>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| e.into().prefixed(context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.into().prefixed(f()))
    }
}

impl HarvestError {
    fn prefixed(self, context: impl Display) -> Self {
        use HarvestError::*;
        match self {
            Configuration(m) => Configuration(format!("{context}: {m}")),
            Input(m) => Input(format!("{context}: {m}")),
            Checkpoint(m) => Checkpoint(format!("{context}: {m}")),
            Sink(m) => Sink(format!("{context}: {m}")),
            Validation(m) => Validation(format!("{context}: {m}")),
            Serialization(m) => Serialization(format!("{context}: {m}")),
            Io(m) => Io(format!("{context}: {m}")),
            Interrupted(m) => Interrupted(format!("{context}: {m}")),
            Other(m) => Other(format!("{context}: {m}")),
            YouTube(e) => Other(format!("{context}: {e}")),
        }
    }
}
