//! Shared helper utilities for factory methods.

use chrono::NaiveDate;

/// Counter for generating unique IDs in tests.
///
/// Ensures each factory-created entity gets a unique name to prevent
/// collisions in tests that list rows.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Shorthand for building a calendar date in tests.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
