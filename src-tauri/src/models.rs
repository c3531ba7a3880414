//! Data models
//!
//! Rust structs for session records and derived analytics.
//! All models use serde for serialization to the frontend; field names
//! serialize in camelCase, matching the persisted JSON record layout.

use serde::{Deserialize, Serialize};

/// One completed venting session, immutable once stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionRecord {
    pub id: String,
    /// Milliseconds since the Unix epoch at which the session concluded
    pub timestamp: i64,
    /// User-entered content; never analyzed, only stored
    pub text: String,
    /// Intensity reached before the session concluded, 0-100
    pub anger_level: u8,
    /// Elapsed seconds from session start to conclusion
    pub duration: u32,
    /// True iff the user indicated relief ("feel better now")
    pub resolved: bool,
    /// Character count of `text`, denormalized at creation
    pub length: u32,
}

/// Append request: a session record before the store assigns its id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmotionRecord {
    pub timestamp: i64,
    pub text: String,
    pub anger_level: u8,
    pub duration: u32,
    pub resolved: bool,
    pub length: u32,
}

/// Aggregate statistics for one UTC calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEmotionStats {
    /// Date key in `YYYY-MM-DD` form
    pub date: String,
    pub count: u32,
    pub average_anger_level: f64,
    /// Fraction of the day's records marked resolved, 0-1
    pub resolution_rate: f64,
    pub average_duration: f64,
}

impl DailyEmotionStats {
    /// Zeroed bucket for a day with no records
    pub fn empty(date: String) -> Self {
        Self {
            date,
            count: 0,
            average_anger_level: 0.0,
            resolution_rate: 0.0,
            average_duration: 0.0,
        }
    }
}

/// Analytics snapshot over a trailing window, recomputed on every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionAnalytics {
    pub total_count: u32,
    pub average_anger_level: f64,
    pub overall_resolution_rate: f64,
    pub average_duration: f64,
    /// Most active UTC hours of day, most active first, at most three
    pub peak_hours: Vec<u8>,
    /// One entry per calendar day in the window, oldest first
    pub daily_stats: Vec<DailyEmotionStats>,
}

/// Health of the persisted record log
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreHealth {
    pub record_count: u32,
    /// True when the log blob exists but could not be read or parsed
    pub degraded: bool,
}
