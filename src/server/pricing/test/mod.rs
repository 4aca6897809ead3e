//! Unit tests for the pricing core, grouped per component.

mod availability;
mod calendar;
mod group;
mod refund;
mod resolver;

pub use std::collections::BTreeSet;

pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;

pub use crate::server::error::pricing::PricingError;
pub use crate::server::pricing::availability::*;
pub use crate::server::pricing::calendar::*;
pub use crate::server::pricing::group::*;
pub use crate::server::pricing::refund::*;
pub use crate::server::pricing::resolver::*;
pub use crate::server::pricing::rule::*;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange::new(start, end).unwrap()
}

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// A property-wide rule with no stay constraints; the common case in tests.
pub fn rule(
    id: i32,
    source: RuleSource,
    span: DateRange,
    priority: i32,
    adjustment: RateAdjustment,
) -> PricingRule {
    PricingRule {
        id,
        source,
        label: format!("rule {id}"),
        scope: RoomScope::All,
        range: span,
        priority,
        adjustment,
        min_stay: None,
        advance_booking_days: None,
    }
}

pub fn veto(span: DateRange, reason: &str) -> Restriction {
    Restriction {
        scope: RoomScope::All,
        range: span,
        allow_booking: false,
        min_stay: None,
        max_stay: None,
        reason: reason.to_string(),
    }
}

pub fn booked(booking_id: i32, span: DateRange, status: BookingStatus) -> OccupiedInterval {
    OccupiedInterval {
        booking_id,
        range: span,
        status,
    }
}
