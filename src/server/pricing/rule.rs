use std::collections::BTreeSet;

use rust_decimal::Decimal;

use super::calendar::DateRange;

/// The set of rooms a pricing or restriction rule applies to.
///
/// An explicit empty room set behaves the same as `All`: a rule that names no
/// rooms applies everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomScope {
    All,
    Rooms(BTreeSet<i32>),
}

impl RoomScope {
    pub fn includes(&self, room_id: i32) -> bool {
        match self {
            Self::All => true,
            Self::Rooms(ids) => ids.is_empty() || ids.contains(&room_id),
        }
    }
}

/// How a rule changes the running nightly price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateAdjustment {
    /// Adds `value` percent of the running price (may be negative).
    Percentage(Decimal),
    /// Adds a flat amount (may be negative for discounts).
    FixedAmount(Decimal),
    /// Scales the running price.
    Multiplier(Decimal),
}

impl RateAdjustment {
    /// Parses the persisted adjustment type discriminator.
    ///
    /// Unknown discriminators yield `None`; the caller decides whether to skip
    /// the row.
    pub fn from_stored(adjustment_type: &str, value: Decimal) -> Option<Self> {
        match adjustment_type {
            "percentage" => Some(Self::Percentage(value)),
            "fixed_amount" => Some(Self::FixedAmount(value)),
            "multiplier" => Some(Self::Multiplier(value)),
            _ => None,
        }
    }
}

/// Which configuration collection a pricing rule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSource {
    Seasonal,
    Demand,
    Holiday,
}

impl RuleSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seasonal => "seasonal",
            Self::Demand => "demand",
            Self::Holiday => "holiday",
        }
    }
}

/// A normalized pricing rule from any source collection.
///
/// Adapters in the data layer produce these in creation order; the resolver
/// relies on that order only to break priority ties (newest rule wins).
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRule {
    pub id: i32,
    pub source: RuleSource,
    pub label: String,
    pub scope: RoomScope,
    pub range: DateRange,
    pub priority: i32,
    pub adjustment: RateAdjustment,
    pub min_stay: Option<u32>,
    pub advance_booking_days: Option<u32>,
}

/// A normalized availability restriction from blackout dates or maintenance
/// windows.
///
/// `allow_booking = false` vetoes every covered night outright. When booking
/// is allowed, the optional stay bounds still constrain the requested stay
/// length.
#[derive(Debug, Clone, PartialEq)]
pub struct Restriction {
    pub scope: RoomScope,
    pub range: DateRange,
    pub allow_booking: bool,
    pub min_stay: Option<u32>,
    pub max_stay: Option<u32>,
    pub reason: String,
}

/// Lifecycle state of a booking as seen by the availability evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    pub fn parse(status: &str) -> Option<Self> {
        match status {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "cancelled" => Some(Self::Cancelled),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Whether a booking in this state occupies its nights.
    pub fn occupies(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

/// A date span held by an existing booking.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupiedInterval {
    pub booking_id: i32,
    pub range: DateRange,
    pub status: BookingStatus,
}
