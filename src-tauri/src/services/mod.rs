//! Services module
//!
//! Business logic services that coordinate between commands and storage.

pub mod analytics;
pub mod records;

pub use analytics::AnalyticsService;
pub use records::RecordsService;
