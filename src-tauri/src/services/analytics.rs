//! Analytics engine
//!
//! Turns the raw record log into a day-bucketed snapshot over a trailing
//! window: per-day counts, running averages, resolution rate, and the most
//! active hours of day. Every call recomputes from the full log; there is
//! no cached or incremental state.
//!
//! All calendar math is UTC: day buckets are keyed by UTC calendar date
//! and peak hours are UTC hours of day.

use std::collections::HashMap;

use chrono::{DateTime, Timelike, Utc};

use crate::config::{MS_PER_DAY, PEAK_HOUR_COUNT};
use crate::error::{AppError, Result};
use crate::models::{DailyEmotionStats, EmotionAnalytics, EmotionRecord};
use crate::storage::RecordStore;

/// Service computing analytics snapshots from the record store
#[derive(Clone)]
pub struct AnalyticsService {
    store: RecordStore,
}

impl AnalyticsService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Compute an analytics snapshot over the trailing `window_days` days.
    ///
    /// A degraded store read yields the all-zero snapshot; only a
    /// non-positive window is an error.
    pub async fn compute_analytics(&self, window_days: u32) -> Result<EmotionAnalytics> {
        let log = self.store.read_all().await;
        aggregate(&log.records, window_days, Utc::now().timestamp_millis())
    }
}

/// Aggregate `records` into a snapshot of the `window_days` days ending
/// at `now_ms`
pub fn aggregate(
    records: &[EmotionRecord],
    window_days: u32,
    now_ms: i64,
) -> Result<EmotionAnalytics> {
    if window_days == 0 {
        return Err(AppError::InvalidWindow);
    }

    // Sliding window anchored at now, not at a calendar-day boundary
    let window_ms = i64::from(window_days) * MS_PER_DAY;
    let filtered: Vec<&EmotionRecord> = records
        .iter()
        .filter(|r| now_ms - r.timestamp < window_ms)
        .collect();

    // One zeroed bucket per calendar day, oldest first, ending today
    let mut day_order = Vec::with_capacity(window_days as usize);
    let mut daily: HashMap<String, DailyEmotionStats> = HashMap::new();
    for i in 0..i64::from(window_days) {
        let day_ms = now_ms - (i64::from(window_days) - 1 - i) * MS_PER_DAY;
        if let Some(date) = utc_date_key(day_ms) {
            daily.insert(date.clone(), DailyEmotionStats::empty(date.clone()));
            day_order.push(date);
        }
    }

    let mut hour_counts = [0u32; 24];

    for record in &filtered {
        let Some(timestamp) = DateTime::<Utc>::from_timestamp_millis(record.timestamp) else {
            continue;
        };

        hour_counts[timestamp.hour() as usize] += 1;

        // A date outside the skeleton (e.g. a future timestamp) still
        // counts toward the overall totals, just not toward daily stats.
        let date = timestamp.format("%Y-%m-%d").to_string();
        if let Some(stats) = daily.get_mut(&date) {
            stats.count += 1;
            let n = f64::from(stats.count);
            stats.average_anger_level =
                (stats.average_anger_level * (n - 1.0) + f64::from(record.anger_level)) / n;
            stats.resolution_rate =
                (stats.resolution_rate * (n - 1.0) + if record.resolved { 1.0 } else { 0.0 }) / n;
            stats.average_duration =
                (stats.average_duration * (n - 1.0) + f64::from(record.duration)) / n;
        }
    }

    // Ties break toward the lower hour: buckets are visited 0-23
    // ascending and the sort is stable.
    let mut ranked: Vec<(u8, u32)> = hour_counts
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(hour, &count)| (hour as u8, count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    let peak_hours: Vec<u8> = ranked
        .into_iter()
        .take(PEAK_HOUR_COUNT)
        .map(|(hour, _)| hour)
        .collect();

    let total_count = filtered.len() as u32;
    let (average_anger_level, overall_resolution_rate, average_duration) = if filtered.is_empty() {
        (0.0, 0.0, 0.0)
    } else {
        let n = filtered.len() as f64;
        (
            filtered.iter().map(|r| f64::from(r.anger_level)).sum::<f64>() / n,
            filtered.iter().filter(|r| r.resolved).count() as f64 / n,
            filtered.iter().map(|r| f64::from(r.duration)).sum::<f64>() / n,
        )
    };

    let daily_stats: Vec<DailyEmotionStats> = day_order
        .into_iter()
        .filter_map(|date| daily.remove(&date))
        .collect();

    Ok(EmotionAnalytics {
        total_count,
        average_anger_level,
        overall_resolution_rate,
        average_duration,
        peak_hours,
        daily_stats,
    })
}

fn utc_date_key(ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.format("%Y-%m-%d").to_string())
}
