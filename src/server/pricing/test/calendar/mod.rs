use super::*;

/// Tests that an inverted range is rejected at construction.
///
/// Expected: Err(InvalidDateRange)
#[test]
fn rejects_inverted_range() {
    let result = DateRange::new(date(2026, 1, 5), date(2026, 1, 1));

    assert_eq!(
        result,
        Err(PricingError::InvalidDateRange {
            start: date(2026, 1, 5),
            end: date(2026, 1, 1),
        })
    );
}

/// Tests that a zero-night range is rejected; a stay has at least one night.
///
/// Expected: Err(InvalidDateRange)
#[test]
fn rejects_empty_range() {
    let result = DateRange::new(date(2026, 1, 1), date(2026, 1, 1));

    assert!(result.is_err());
}

/// Tests the night count of a half-open range.
///
/// Expected: Jan 1 to Jan 4 covers 3 nights
#[test]
fn counts_nights() {
    let stay = range(date(2026, 1, 1), date(2026, 1, 4));

    assert_eq!(stay.nights(), 3);
}

/// Tests that ranges sharing only a boundary date do not overlap: the first
/// guest checks out the morning the second checks in.
///
/// Expected: no intersection
#[test]
fn touching_ranges_do_not_intersect() {
    let first = range(date(2026, 1, 1), date(2026, 1, 4));
    let second = range(date(2026, 1, 4), date(2026, 1, 7));

    assert!(!first.intersects(&second));
    assert!(!second.intersects(&first));
}

/// Tests overlap detection for partially and fully overlapping ranges.
///
/// Expected: intersection in both directions
#[test]
fn overlapping_ranges_intersect() {
    let outer = range(date(2026, 1, 1), date(2026, 1, 10));
    let inner = range(date(2026, 1, 4), date(2026, 1, 6));
    let straddling = range(date(2026, 1, 8), date(2026, 1, 12));

    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
    assert!(outer.intersects(&straddling));
}

/// Tests that the end date itself is not a night of the range.
///
/// Expected: start included, end excluded
#[test]
fn contains_excludes_end_date() {
    let stay = range(date(2026, 1, 1), date(2026, 1, 4));

    assert!(stay.contains(date(2026, 1, 1)));
    assert!(stay.contains(date(2026, 1, 3)));
    assert!(!stay.contains(date(2026, 1, 4)));
}

/// Tests night iteration order and bounds.
///
/// Expected: each night once, in calendar order, end excluded
#[test]
fn iterates_nights_in_order() {
    let stay = range(date(2026, 1, 30), date(2026, 2, 2));

    let nights: Vec<NaiveDate> = stay.iter_nights().collect();

    assert_eq!(
        nights,
        vec![date(2026, 1, 30), date(2026, 1, 31), date(2026, 2, 1)]
    );
}
