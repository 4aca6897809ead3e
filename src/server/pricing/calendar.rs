use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::server::error::pricing::PricingError;

/// A half-open date range `[start, end)`.
///
/// The end date is excluded: a stay checking in on the 1st and out on the 4th
/// occupies the nights of the 1st, 2nd, and 3rd. Every date-span comparison in
/// the pricing core goes through this type so the overlap rule exists in
/// exactly one place.
///
/// Construction enforces `start < end`; a `DateRange` value is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting empty or inverted spans.
    ///
    /// # Returns
    /// - `Ok(DateRange)` - Valid half-open range
    /// - `Err(PricingError::InvalidDateRange)` - `start >= end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PricingError> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(PricingError::InvalidDateRange { start, end })
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of nights covered, always at least 1.
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Half-open interval overlap test: `a.start < b.end && b.start < a.end`.
    ///
    /// Ranges that merely touch (one ends where the other starts) do not
    /// overlap.
    pub fn intersects(&self, other: &DateRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `date` is one of the nights of this range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Iterates the nights of the range in calendar order.
    pub fn iter_nights(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d < end)
    }
}

/// Whole days from `now` until midnight UTC of `check_in`, rounded up.
/// Negative once check-in has passed.
///
/// Shared by the refund calculator and the advance-booking check; `now` is
/// always an explicit argument so callers stay clock-free and repeatable.
pub fn days_until_check_in(check_in: NaiveDate, now: DateTime<Utc>) -> i64 {
    let check_in_midnight = check_in.and_time(NaiveTime::MIN).and_utc();
    let seconds = (check_in_midnight - now).num_seconds();
    let day = 86_400;
    seconds.div_euclid(day) + i64::from(seconds.rem_euclid(day) > 0)
}
