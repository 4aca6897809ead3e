use super::*;

/// Tests the mixed scenario: a hard blackout over Jan 1-3 and a confirmed
/// booking occupying the night of Jan 5, queried over Jan 1-6.
///
/// Expected: exactly {Jan 1, Jan 2, Jan 5} blocked; Jan 3 and Jan 6 are
/// end-exclusive and stay free
#[test]
fn reports_blackout_and_booking_nights() {
    let stay = range(date(2026, 1, 1), date(2026, 1, 6));
    let blackout = veto(range(date(2026, 1, 1), date(2026, 1, 3)), "new year closure");
    let booking = booked(
        41,
        range(date(2026, 1, 5), date(2026, 1, 6)),
        BookingStatus::Confirmed,
    );

    let result = check_availability(1, &stay, &[booking], &[blackout]);

    assert!(!result.available);
    let blocked: Vec<NaiveDate> = result.unavailable.keys().copied().collect();
    assert_eq!(
        blocked,
        vec![date(2026, 1, 1), date(2026, 1, 2), date(2026, 1, 5)]
    );
    assert_eq!(result.unavailable[&date(2026, 1, 1)], "new year closure");
    assert_eq!(result.unavailable[&date(2026, 1, 5)], "already booked");
    assert!(result.stay_violations.is_empty());
}

/// Tests idempotence: identical inputs produce identical output, down to the
/// formatted representation.
///
/// Expected: equal results on repeated calls
#[test]
fn repeated_calls_return_identical_results() {
    let stay = range(date(2026, 1, 1), date(2026, 1, 6));
    let blackout = veto(range(date(2026, 1, 2), date(2026, 1, 4)), "maintenance");
    let booking = booked(
        7,
        range(date(2026, 1, 4), date(2026, 1, 5)),
        BookingStatus::Pending,
    );

    let first = check_availability(1, &stay, &[booking.clone()], &[blackout.clone()]);
    let second = check_availability(1, &stay, &[booking], &[blackout]);

    assert_eq!(first, second);
    assert_eq!(format!("{first:?}"), format!("{second:?}"));
}

/// Tests that cancelled and completed bookings do not occupy nights.
///
/// Expected: fully available
#[test]
fn ignores_non_occupying_bookings() {
    let stay = range(date(2026, 2, 1), date(2026, 2, 4));
    let cancelled = booked(1, stay, BookingStatus::Cancelled);
    let completed = booked(2, stay, BookingStatus::Completed);

    let result = check_availability(1, &stay, &[cancelled, completed], &[]);

    assert!(result.available);
    assert!(result.unavailable.is_empty());
}

/// Tests that pending bookings block nights the same as confirmed ones.
///
/// Expected: the overlapping night is blocked
#[test]
fn pending_bookings_block_nights() {
    let stay = range(date(2026, 2, 1), date(2026, 2, 3));
    let pending = booked(
        9,
        range(date(2026, 2, 2), date(2026, 2, 5)),
        BookingStatus::Pending,
    );

    let result = check_availability(1, &stay, &[pending], &[]);

    assert!(!result.available);
    let blocked: Vec<NaiveDate> = result.unavailable.keys().copied().collect();
    assert_eq!(blocked, vec![date(2026, 2, 2)]);
}

/// Tests that a minimum-stay bound on a booking-allowed restriction rejects
/// the request as a whole instead of blocking dates.
///
/// Expected: unavailable with one stay violation and no blocked dates
#[test]
fn surfaces_min_stay_as_stay_violation() {
    let stay = range(date(2026, 12, 30), date(2027, 1, 1));
    let peak = Restriction {
        scope: RoomScope::All,
        range: range(date(2026, 12, 28), date(2027, 1, 5)),
        allow_booking: true,
        min_stay: Some(3),
        max_stay: None,
        reason: "peak season".to_string(),
    };

    let result = check_availability(1, &stay, &[], &[peak]);

    assert!(!result.available);
    assert!(result.unavailable.is_empty());
    assert_eq!(result.stay_violations.len(), 1);
    assert!(result.stay_violations[0].contains("minimum stay of 3"));
}

/// Tests the maximum-stay bound against the requested stay length.
///
/// Expected: unavailable with a max-stay violation
#[test]
fn surfaces_max_stay_as_stay_violation() {
    let stay = range(date(2026, 7, 1), date(2026, 7, 20));
    let cap = Restriction {
        scope: RoomScope::All,
        range: range(date(2026, 7, 1), date(2026, 8, 1)),
        allow_booking: true,
        min_stay: None,
        max_stay: Some(14),
        reason: "long-stay cap".to_string(),
    };

    let result = check_availability(1, &stay, &[], &[cap]);

    assert!(!result.available);
    assert!(result.stay_violations[0].contains("maximum stay of 14"));
}

/// Tests monotonicity: adding a further restriction can only grow the
/// blocked set, never free a night.
///
/// Expected: the original blocked set is a subset of the new one
#[test]
fn adding_restrictions_never_increases_availability() {
    let stay = range(date(2026, 3, 1), date(2026, 3, 8));
    let first = veto(range(date(2026, 3, 2), date(2026, 3, 4)), "closure");
    let second = veto(range(date(2026, 3, 5), date(2026, 3, 6)), "inspection");

    let before = check_availability(1, &stay, &[], &[first.clone()]);
    let after = check_availability(1, &stay, &[], &[first, second]);

    assert!(before
        .unavailable
        .keys()
        .all(|night| after.unavailable.contains_key(night)));
    assert!(after.unavailable.len() > before.unavailable.len());
}

/// Tests that restrictions scoped to other rooms are ignored.
///
/// Expected: fully available
#[test]
fn ignores_restrictions_for_other_rooms() {
    let stay = range(date(2026, 3, 1), date(2026, 3, 4));
    let mut other = veto(stay, "villa 9 repairs");
    other.scope = RoomScope::Rooms(BTreeSet::from([9]));

    let result = check_availability(1, &stay, &[], &[other]);

    assert!(result.available);
}

/// Tests reason precedence when a booking and a blackout cover the same
/// night: bookings are evaluated first and the first reason recorded wins.
///
/// Expected: "already booked" reported for the shared night
#[test]
fn booking_reason_wins_over_blackout() {
    let stay = range(date(2026, 4, 1), date(2026, 4, 3));
    let both = range(date(2026, 4, 1), date(2026, 4, 2));
    let booking = booked(3, both, BookingStatus::Confirmed);
    let blackout = veto(both, "painting");

    let result = check_availability(1, &stay, &[booking], &[blackout]);

    assert_eq!(result.unavailable[&date(2026, 4, 1)], "already booked");
}
