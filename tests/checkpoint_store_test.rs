//! Integration tests for the checkpoint file format

use tempfile::TempDir;
use tubeharvest::core::state::CheckpointStore;
use tubeharvest::domain::{HarvestError, ResultRow};

#[test]
fn test_reads_checkpoint_written_with_legacy_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("youtube_checkpoint.json");
    std::fs::write(
        &path,
        r#"{
  "processed_rows": 2,
  "results": [
    {
      "channel_user": "@alpha",
      "video_id": "v1",
      "title": "Hello",
      "description": "",
      "published": "2024-01-01T00:00:00Z",
      "channel": "Alpha",
      "channel_id": "UCalpha",
      "tags": "a,b",
      "likes": "12",
      "comments": 0,
      "views": "340",
      "video_url": "https://www.youtube.com/watch?v=v1",
      "duration": "PT4M"
    }
  ]
}"#,
    )
    .unwrap();

    let checkpoint = CheckpointStore::new(&path).load().unwrap();

    assert_eq!(checkpoint.processed_row_count, 2);
    assert!(checkpoint.saved_at.is_none());
    let row = &checkpoint.results[0];
    assert_eq!(row.likes, 12);
    assert_eq!(row.views, 340);
    assert_eq!(row.column("duration"), Some("PT4M".to_string()));
}

#[test]
fn test_round_trip_is_lossless() {
    let dir = TempDir::new().unwrap();
    let store = CheckpointStore::new(dir.path().join("checkpoint.json"));

    let mut row = ResultRow {
        channel_user: "@alpha".to_string(),
        video_id: "v1".to_string(),
        title: "Quotes \" and, commas".to_string(),
        description: "Line one\nLine two".to_string(),
        tags: "x,y".to_string(),
        likes: 1,
        comments: 2,
        views: 3,
        ..Default::default()
    };
    row.extra
        .insert("foo".to_string(), serde_json::json!({"nested": true}));
    let results = vec![row];

    store.save(1, &results).unwrap();
    let checkpoint = store.load().unwrap();

    assert_eq!(checkpoint.processed_row_count, 1);
    assert_eq!(checkpoint.results, results);
    assert!(checkpoint.saved_at.is_some());
}

#[test]
fn test_saves_leave_no_temporary_files() {
    let dir = TempDir::new().unwrap();
    let store = CheckpointStore::new(dir.path().join("checkpoint.json"));

    for count in 0..5 {
        store.save(count, &[]).unwrap();
    }

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(store.load().unwrap().processed_row_count, 4);
}

#[test]
fn test_truncated_file_is_reported_not_replaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("checkpoint.json");
    std::fs::write(&path, r#"{"processed_row_count": 3, "results": [{"video_id": "#).unwrap();

    let err = CheckpointStore::new(&path).load().unwrap_err();

    assert!(matches!(err, HarvestError::Checkpoint(_)));
    assert!(err.to_string().contains("checkpoint.json"));
    assert!(path.exists());
}
