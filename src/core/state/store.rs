//! File-backed checkpoint store
//!
//! The checkpoint is a pretty-printed JSON file so an operator can inspect it,
//! or delete it to force a fresh run. Every save replaces the file atomically.

use super::checkpoint::{Checkpoint, CheckpointRef};
use crate::core::atomic::write_atomic;
use crate::domain::context::ResultExt;
use crate::domain::{HarvestError, Result, ResultRow};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CheckpointStore {
    path: PathBuf,
}

impl CheckpointStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the persisted checkpoint, or an empty one if there is none
    ///
    /// # Errors
    ///
    /// Returns `HarvestError::Checkpoint` if the file exists but cannot be read
    /// or parsed. The file is left untouched.
    pub fn load(&self) -> Result<Checkpoint> {
        if !self.exists() {
            tracing::debug!(path = %self.path.display(), "No checkpoint found");
            return Ok(Checkpoint::default());
        }

        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| HarvestError::Checkpoint(e.to_string()))
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let checkpoint: Checkpoint = serde_json::from_str(&contents)
            .map_err(|e| HarvestError::Checkpoint(e.to_string()))
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        tracing::info!(
            path = %self.path.display(),
            processed_row_count = checkpoint.processed_row_count,
            results = checkpoint.results.len(),
            "Loaded checkpoint"
        );

        Ok(checkpoint)
    }

    /// Durably replaces the checkpoint
    pub fn save(&self, processed_row_count: usize, results: &[ResultRow]) -> Result<()> {
        let record = CheckpointRef {
            processed_row_count,
            results,
            saved_at: chrono::Utc::now(),
        };

        write_atomic(&self.path, |writer| {
            serde_json::to_writer_pretty(writer, &record)?;
            Ok(())
        })
        .map_err(|e| HarvestError::Checkpoint(e.to_string()))?;

        tracing::debug!(
            path = %self.path.display(),
            processed_row_count,
            results = results.len(),
            "Checkpoint saved"
        );

        Ok(())
    }

    /// Removes the checkpoint; a missing file is not an error
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "Checkpoint cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(HarvestError::Checkpoint(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(video_id: &str) -> ResultRow {
        ResultRow {
            channel_user: "@alpha".to_string(),
            video_id: video_id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_load_without_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = CheckpointStore::new(dir.path().join("cp.json"));

        let checkpoint = store.load().unwrap();
        assert!(checkpoint.is_empty());
        assert!(!store.exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = CheckpointStore::new(dir.path().join("cp.json"));

        store.save(2, &[row("v1"), row("v2")]).unwrap();
        let checkpoint = store.load().unwrap();

        assert_eq!(checkpoint.processed_row_count, 2);
        assert_eq!(checkpoint.results.len(), 2);
        assert_eq!(checkpoint.results[1].video_id, "v2");
    }

    #[test]
    fn test_file_is_pretty_json() {
        let dir = TempDir::new().unwrap();
        let store = CheckpointStore::new(dir.path().join("cp.json"));
        store.save(1, &[row("v1")]).unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains("\n  \"processed_row_count\": 1"));
    }

    #[test]
    fn test_corrupt_file_is_checkpoint_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cp.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = CheckpointStore::new(&path).load().unwrap_err();
        assert!(matches!(err, HarvestError::Checkpoint(_)));
        assert!(path.exists());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = CheckpointStore::new(dir.path().join("cp.json"));
        store.save(0, &[]).unwrap();

        store.clear().unwrap();
        assert!(!store.exists());
        store.clear().unwrap();
    }
}
