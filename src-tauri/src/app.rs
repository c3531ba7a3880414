//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are initialized here and made available through AppState.

use crate::config::RECORDS_FILE_NAME;
use crate::error::Result;
use crate::services::{AnalyticsService, RecordsService};
use crate::storage::RecordStore;
use tauri::{App, Manager};

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub app_data_dir: std::path::PathBuf,
    pub records_service: RecordsService,
    pub analytics_service: AnalyticsService,
}

/// Application setup - called once on startup
pub fn setup(app: &mut App) -> Result<()> {
    tracing::info!("Initializing application");

    // Get app data directory
    let app_data_dir = app.path().app_data_dir().map_err(|e| {
        crate::error::AppError::Generic(format!("Failed to get app data dir: {}", e))
    })?;

    tracing::info!("App data directory: {:?}", app_data_dir);

    std::fs::create_dir_all(&app_data_dir)?;

    // Wire up the record store and the services that share it
    let store = RecordStore::new(app_data_dir.join(RECORDS_FILE_NAME));
    let records_service = RecordsService::new(store.clone());
    let analytics_service = AnalyticsService::new(store);

    let state = AppState {
        app_data_dir,
        records_service,
        analytics_service,
    };
    app.manage(state);

    tracing::info!("Application initialized successfully");

    Ok(())
}
