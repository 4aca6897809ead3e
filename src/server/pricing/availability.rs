use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::{
    calendar::DateRange,
    rule::{OccupiedInterval, Restriction},
};

/// The authoritative availability verdict for a requested stay.
///
/// `unavailable` maps each blocked night to the first reason found for it, in
/// calendar order, so callers can render a partial-availability calendar.
/// Stay-length violations apply to the request as a whole and are reported
/// separately rather than attached to any date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AvailabilityResult {
    pub available: bool,
    pub unavailable: BTreeMap<NaiveDate, String>,
    pub stay_violations: Vec<String>,
}

/// Walks the requested range night by night against existing bookings and
/// restrictions.
///
/// A night is blocked when a pending or confirmed booking occupies it, or when
/// a restriction covering it (and scoped to this room) forbids booking.
/// Bookings are checked before restrictions and the first reason recorded for
/// a night wins. Restrictions that allow booking but carry stay bounds are
/// checked against the requested stay length.
///
/// Pure and idempotent: no clock reads, no hidden state; identical inputs
/// produce identical results.
pub fn check_availability(
    room_id: i32,
    range: &DateRange,
    occupied: &[OccupiedInterval],
    restrictions: &[Restriction],
) -> AvailabilityResult {
    let mut unavailable: BTreeMap<NaiveDate, String> = BTreeMap::new();

    for interval in occupied {
        if !interval.status.occupies() || !interval.range.intersects(range) {
            continue;
        }
        for night in range.iter_nights() {
            if interval.range.contains(night) {
                unavailable
                    .entry(night)
                    .or_insert_with(|| "already booked".to_string());
            }
        }
    }

    let matching: Vec<&Restriction> = restrictions
        .iter()
        .filter(|r| r.scope.includes(room_id) && r.range.intersects(range))
        .collect();

    for restriction in &matching {
        if restriction.allow_booking {
            continue;
        }
        for night in range.iter_nights() {
            if restriction.range.contains(night) {
                unavailable
                    .entry(night)
                    .or_insert_with(|| restriction.reason.clone());
            }
        }
    }

    let nights = range.nights();
    let mut stay_violations = Vec::new();
    for restriction in &matching {
        if let Some(min_stay) = restriction.min_stay {
            if nights < i64::from(min_stay) {
                stay_violations.push(format!(
                    "minimum stay of {} nights required: {}",
                    min_stay, restriction.reason
                ));
            }
        }
        if let Some(max_stay) = restriction.max_stay {
            if nights > i64::from(max_stay) {
                stay_violations.push(format!(
                    "maximum stay of {} nights exceeded: {}",
                    max_stay, restriction.reason
                ));
            }
        }
    }

    AvailabilityResult {
        available: unavailable.is_empty() && stay_violations.is_empty(),
        unavailable,
        stay_violations,
    }
}
