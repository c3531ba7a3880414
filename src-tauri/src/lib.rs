//! VentBox library
//!
//! This library exposes the record store and analytics engine for testing
//! and potential future library use.

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

/// Build and run the Tauri application
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            tracing::info!("Running app setup");
            app::setup(app)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_app_info,
            commands::save_emotion_record,
            commands::list_emotion_records,
            commands::get_store_health,
            commands::get_emotion_analytics,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
