//! Analytics commands

use crate::app::AppState;
use crate::config::DEFAULT_WINDOW_DAYS;
use crate::error::Result;
use crate::models::EmotionAnalytics;
use tauri::State;

/// Compute an analytics snapshot over a trailing window.
///
/// The dashboard passes 7 or 30; any positive number of days is accepted,
/// and the default window applies when none is given.
#[tauri::command]
pub async fn get_emotion_analytics(
    state: State<'_, AppState>,
    window_days: Option<u32>,
) -> Result<EmotionAnalytics> {
    state
        .analytics_service
        .compute_analytics(window_days.unwrap_or(DEFAULT_WINDOW_DAYS))
        .await
}
