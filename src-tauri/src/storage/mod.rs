//! Storage module
//!
//! Provides blob persistence for the append-only emotion record log.

pub mod record_store;

pub use record_store::{LogContents, RecordStore};
