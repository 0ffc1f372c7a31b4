//! Checkpoint record persisted between runs

use crate::domain::ResultRow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resume cursor plus every result collected before it
///
/// `processed_row_count` always counts whole input rows: every video of rows
/// `0..processed_row_count` is already in `results`.
///
/// ```
/// use tubeharvest::core::state::Checkpoint;
///
/// let legacy = r#"{"processed_rows": 3, "results": []}"#;
/// let checkpoint: Checkpoint = serde_json::from_str(legacy).unwrap();
/// assert_eq!(checkpoint.processed_row_count, 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    #[serde(alias = "processed_rows")]
    pub processed_row_count: usize,

    #[serde(default)]
    pub results: Vec<ResultRow>,

    /// When the checkpoint was written; absent in files from older versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Checkpoint {
    pub fn is_empty(&self) -> bool {
        self.processed_row_count == 0 && self.results.is_empty()
    }
}

/// Borrowed form written on every save so results are not cloned per row
#[derive(Serialize)]
pub(crate) struct CheckpointRef<'a> {
    pub processed_row_count: usize,
    pub results: &'a [ResultRow],
    pub saved_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_results_default_to_empty() {
        let checkpoint: Checkpoint = serde_json::from_str(r#"{"processed_row_count": 0}"#).unwrap();
        assert!(checkpoint.is_empty());
        assert!(checkpoint.saved_at.is_none());
    }

    #[test]
    fn test_borrowed_form_reads_back() {
        let results = vec![ResultRow {
            video_id: "v1".to_string(),
            likes: 3,
            ..Default::default()
        }];
        let json = serde_json::to_string(&CheckpointRef {
            processed_row_count: 1,
            results: &results,
            saved_at: Utc::now(),
        })
        .unwrap();

        let checkpoint: Checkpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(checkpoint.processed_row_count, 1);
        assert_eq!(checkpoint.results, results);
        assert!(checkpoint.saved_at.is_some());
    }
}
