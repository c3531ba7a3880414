//! Append-only record log
//!
//! Persists the full session history as a single JSON blob. Appends
//! read-modify-write the whole log under a mutex and replace the blob
//! atomically (temp file + rename), so a crash mid-write never loses
//! previously stored records.

use crate::error::{AppError, Result};
use crate::models::{EmotionRecord, NewEmotionRecord};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Contents of the record log as observed by one full read
#[derive(Debug, Clone, Default)]
pub struct LogContents {
    pub records: Vec<EmotionRecord>,
    /// True when the blob exists but could not be read or parsed.
    /// An absent blob is an empty log, not degradation.
    pub degraded: bool,
}

/// Append-only store for emotion records
#[derive(Clone)]
pub struct RecordStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl RecordStore {
    /// Create a store backed by the blob at the given path
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Initialize the store (create containing directory if needed)
    pub async fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        tracing::info!("Record store initialized at: {:?}", self.path);
        Ok(())
    }

    /// Read the full record log.
    ///
    /// Never fails: a missing blob reads as an empty log, and an
    /// unreadable one degrades to empty with the `degraded` flag set.
    pub async fn read_all(&self) -> LogContents {
        match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice::<Vec<EmotionRecord>>(&bytes) {
                Ok(records) => {
                    tracing::debug!("Read {} records from log", records.len());
                    LogContents {
                        records,
                        degraded: false,
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        "Record log at {:?} is malformed, treating as empty: {}",
                        self.path,
                        e
                    );
                    LogContents {
                        records: Vec::new(),
                        degraded: true,
                    }
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => LogContents::default(),
            Err(e) => {
                tracing::warn!(
                    "Failed to read record log at {:?}, treating as empty: {}",
                    self.path,
                    e
                );
                LogContents {
                    records: Vec::new(),
                    degraded: true,
                }
            }
        }
    }

    /// Assign an id and append a record to the persisted log.
    ///
    /// Appends are serialized through a mutex so concurrent calls cannot
    /// drop each other's records. An existing-but-unreadable blob refuses
    /// the append rather than overwriting whatever history it held.
    pub async fn append(&self, record: NewEmotionRecord) -> Result<EmotionRecord> {
        let _guard = self.write_lock.lock().await;

        let log = self.read_all().await;
        if log.degraded {
            return Err(AppError::RecordStore(format!(
                "refusing to append: existing log at {:?} is unreadable",
                self.path
            )));
        }

        let stored = EmotionRecord {
            id: format!("{}-{}", Utc::now().timestamp_millis(), Uuid::new_v4()),
            timestamp: record.timestamp,
            text: record.text,
            anger_level: record.anger_level,
            duration: record.duration,
            resolved: record.resolved,
            length: record.length,
        };

        let mut records = log.records;
        records.push(stored.clone());
        self.write_log(&records).await?;

        tracing::debug!("Appended record {} ({} total)", stored.id, records.len());

        Ok(stored)
    }

    /// Atomically replace the blob (write temp file, fsync, rename)
    async fn write_log(&self, records: &[EmotionRecord]) -> Result<()> {
        let data = serde_json::to_vec(records)?;

        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(&data).await?;
        file.sync_all().await?;
        fs::rename(&temp_path, &self.path).await?;

        Ok(())
    }

    /// Path of the persisted blob
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_store() -> (RecordStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path().join("emotion_records.json"));
        store.initialize().await.unwrap();
        (store, temp_dir)
    }

    fn new_record(timestamp: i64, text: &str) -> NewEmotionRecord {
        NewEmotionRecord {
            timestamp,
            text: text.to_string(),
            anger_level: 50,
            duration: 30,
            resolved: false,
            length: text.chars().count() as u32,
        }
    }

    #[tokio::test]
    async fn test_append_and_read_all() {
        let (store, _temp) = create_test_store().await;

        let first = store.append(new_record(1_000, "first")).await.unwrap();
        let second = store.append(new_record(2_000, "second")).await.unwrap();

        let log = store.read_all().await;
        assert!(!log.degraded);
        assert_eq!(log.records.len(), 2);
        assert_eq!(log.records[0], first);
        assert_eq!(log.records[1], second);
    }

    #[tokio::test]
    async fn test_assigned_ids_are_unique() {
        let (store, _temp) = create_test_store().await;

        let a = store.append(new_record(1_000, "a")).await.unwrap();
        let b = store.append(new_record(1_000, "b")).await.unwrap();

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_missing_blob_reads_empty() {
        let (store, _temp) = create_test_store().await;

        let log = store.read_all().await;
        assert!(log.records.is_empty());
        assert!(!log.degraded);
    }

    #[tokio::test]
    async fn test_malformed_blob_degrades_to_empty() {
        let (store, _temp) = create_test_store().await;

        tokio::fs::write(store.path(), b"{ not json").await.unwrap();

        let log = store.read_all().await;
        assert!(log.records.is_empty());
        assert!(log.degraded);
    }

    #[tokio::test]
    async fn test_append_refuses_unreadable_blob() {
        let (store, _temp) = create_test_store().await;

        store.append(new_record(1_000, "keep me")).await.unwrap();
        tokio::fs::write(store.path(), b"garbage").await.unwrap();

        let result = store.append(new_record(2_000, "lost")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_concurrent_appends_lose_nothing() {
        let (store, _temp) = create_test_store().await;

        let mut handles = Vec::new();
        for i in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append(new_record(i, "burst")).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let log = store.read_all().await;
        assert_eq!(log.records.len(), 10);
    }

    #[tokio::test]
    async fn test_reopened_store_sees_prior_records() {
        let (store, _temp) = create_test_store().await;

        let stored = store.append(new_record(5_000, "persisted")).await.unwrap();

        let reopened = RecordStore::new(store.path().to_path_buf());
        let log = reopened.read_all().await;

        assert_eq!(log.records.len(), 1);
        assert_eq!(log.records[0].id, stored.id);
        assert_eq!(log.records[0].text, "persisted");
    }
}
