//! Records service
//!
//! Validates session records before they enter the append-only log.
//! The analytics engine assumes every stored record satisfies these
//! bounds, so nothing invalid may get past this point.

use crate::config::MAX_ANGER_LEVEL;
use crate::error::{AppError, Result};
use crate::models::{EmotionRecord, NewEmotionRecord, StoreHealth};
use crate::storage::RecordStore;

/// Service for managing session records
#[derive(Clone)]
pub struct RecordsService {
    store: RecordStore,
}

impl RecordsService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Validate and append a completed venting session
    pub async fn save_record(&self, record: NewEmotionRecord) -> Result<EmotionRecord> {
        validate_record(&record)?;

        let stored = self.store.append(record).await?;

        tracing::info!("Saved emotion record: {}", stored.id);

        Ok(stored)
    }

    /// All records ever stored, in append order
    pub async fn list_records(&self) -> Result<Vec<EmotionRecord>> {
        Ok(self.store.read_all().await.records)
    }

    /// Record count plus whether the persisted log degraded on read
    pub async fn store_health(&self) -> Result<StoreHealth> {
        let log = self.store.read_all().await;
        Ok(StoreHealth {
            record_count: log.records.len() as u32,
            degraded: log.degraded,
        })
    }
}

fn validate_record(record: &NewEmotionRecord) -> Result<()> {
    if record.anger_level > MAX_ANGER_LEVEL {
        return Err(AppError::InvalidRecord(format!(
            "anger level {} exceeds maximum of {}",
            record.anger_level, MAX_ANGER_LEVEL
        )));
    }

    if record.timestamp < 0 {
        return Err(AppError::InvalidRecord(format!(
            "timestamp {} predates the Unix epoch",
            record.timestamp
        )));
    }

    let char_count = record.text.chars().count() as u32;
    if record.length != char_count {
        return Err(AppError::InvalidRecord(format!(
            "length {} does not match text character count {}",
            record.length, char_count
        )));
    }

    Ok(())
}
