//! Record commands
//!
//! Append and read operations over the emotion record log.

use crate::app::AppState;
use crate::error::Result;
use crate::models::{EmotionRecord, NewEmotionRecord, StoreHealth};
use tauri::State;

/// Validate and store a completed venting session
#[tauri::command]
pub async fn save_emotion_record(
    state: State<'_, AppState>,
    record: NewEmotionRecord,
) -> Result<EmotionRecord> {
    state.records_service.save_record(record).await
}

/// List every stored emotion record
#[tauri::command]
pub async fn list_emotion_records(state: State<'_, AppState>) -> Result<Vec<EmotionRecord>> {
    state.records_service.list_records().await
}

/// Report whether the persisted log is readable and how many records it holds
#[tauri::command]
pub async fn get_store_health(state: State<'_, AppState>) -> Result<StoreHealth> {
    state.records_service.store_health().await
}
