//! Application configuration constants
//!
//! Central location for configuration constants and validation
//! boundaries used throughout the application.

// ===== Record Validation Boundaries =====

/// Maximum anger level a session record may carry (inclusive).
/// The analytics engine assumes stored records never exceed this.
pub const MAX_ANGER_LEVEL: u8 = 100;

// ===== Analytics =====

/// Milliseconds in one calendar day
pub const MS_PER_DAY: i64 = 86_400_000;

/// Number of peak hours reported in an analytics snapshot
pub const PEAK_HOUR_COUNT: usize = 3;

/// Trailing window, in days, used when the frontend does not pick one
pub const DEFAULT_WINDOW_DAYS: u32 = 30;

// ===== Storage =====

/// File name of the persisted record log inside the app data directory
pub const RECORDS_FILE_NAME: &str = "emotion_records.json";
