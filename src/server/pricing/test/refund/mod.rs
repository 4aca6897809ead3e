use super::*;
use chrono::{NaiveTime, TimeZone, Utc};

fn standard_policy() -> CancellationPolicy {
    CancellationPolicy {
        id: 1,
        name: "standard".to_string(),
        rules: vec![
            PolicyRule {
                days_before_check_in: 30,
                refund_percentage: dec("100"),
                deduction_amount: None,
                deduction_percentage: None,
            },
            PolicyRule {
                days_before_check_in: 7,
                refund_percentage: dec("50"),
                deduction_amount: None,
                deduction_percentage: None,
            },
            PolicyRule {
                days_before_check_in: 0,
                refund_percentage: dec("0"),
                deduction_amount: None,
                deduction_percentage: None,
            },
        ],
        processing_fee: dec("100"),
        waive_processing_fee: false,
    }
}

fn utc(y: i32, m: u32, d: u32, h: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// Tests the threshold scenario: cancelling 10 days before check-in on a
/// 30/7/0 policy selects the 7-day tier (10 >= 7 but < 30), refunding 50%
/// of 10000 minus the 100 processing fee.
///
/// Expected: refundable 5000, final refund 4900
#[test]
fn selects_first_threshold_the_days_meet() {
    let breakdown = calculate_refund(
        dec("10000"),
        date(2026, 9, 20),
        &standard_policy(),
        utc(2026, 9, 10, 0),
    )
    .unwrap();

    assert_eq!(breakdown.days_until_check_in, 10);
    assert_eq!(breakdown.applied_threshold, 7);
    assert_eq!(breakdown.refund_percentage, dec("50"));
    assert_eq!(breakdown.refundable_amount, dec("5000"));
    assert_eq!(breakdown.processing_fee, dec("100"));
    assert_eq!(breakdown.final_refund, dec("4900"));
}

/// Tests the full-refund path: beyond the most generous threshold with a
/// waived fee and no deductions, the guest gets everything back.
///
/// Expected: final refund equals the booking amount
#[test]
fn refunds_everything_above_the_top_threshold() {
    let mut policy = standard_policy();
    policy.waive_processing_fee = true;

    let breakdown = calculate_refund(
        dec("10000"),
        date(2026, 12, 1),
        &policy,
        utc(2026, 9, 1, 12),
    )
    .unwrap();

    assert_eq!(breakdown.applied_threshold, 30);
    assert_eq!(breakdown.final_refund, dec("10000"));
}

/// Tests the fallback when no threshold matches: a cancellation after
/// check-in has negative days remaining and lands on the lowest tier.
///
/// Expected: 0% tier applied, final refund 0
#[test]
fn falls_back_to_the_most_lenient_rule() {
    let breakdown = calculate_refund(
        dec("10000"),
        date(2026, 9, 20),
        &standard_policy(),
        utc(2026, 9, 22, 0),
    )
    .unwrap();

    assert!(breakdown.days_until_check_in < 0);
    assert_eq!(breakdown.applied_threshold, 0);
    assert_eq!(breakdown.final_refund, dec("0"));
}

/// Tests day counting at the boundary: one second before midnight of
/// check-in still counts as one day out, and exactly midnight as zero.
///
/// Expected: 1 day, then 0 days
#[test]
fn counts_partial_days_upward() {
    let policy = standard_policy();
    let check_in = date(2026, 9, 20);

    let just_before = calculate_refund(
        dec("1000"),
        check_in,
        &policy,
        Utc.from_utc_datetime(
            &date(2026, 9, 19).and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap()),
        ),
    )
    .unwrap();
    let at_midnight = calculate_refund(dec("1000"), check_in, &policy, utc(2026, 9, 20, 0)).unwrap();

    assert_eq!(just_before.days_until_check_in, 1);
    assert_eq!(at_midnight.days_until_check_in, 0);
}

/// Tests fixed and percentage deductions together: both come off the
/// refundable amount and every stage is itemized.
///
/// Expected: 5000 refundable, 500 fixed + 250 percentage deducted,
/// 100 fee, final 4150
#[test]
fn itemizes_deductions() {
    let mut policy = standard_policy();
    policy.rules[1].deduction_amount = Some(dec("500"));
    policy.rules[1].deduction_percentage = Some(dec("5"));

    let breakdown = calculate_refund(
        dec("10000"),
        date(2026, 9, 20),
        &policy,
        utc(2026, 9, 10, 0),
    )
    .unwrap();

    assert_eq!(breakdown.refundable_amount, dec("5000"));
    assert_eq!(breakdown.fixed_deduction, dec("500"));
    assert_eq!(breakdown.percentage_deduction, dec("250"));
    assert_eq!(breakdown.final_refund, dec("4150"));
}

/// Tests the zero floor: a processing fee larger than the refundable amount
/// never drives the refund negative.
///
/// Expected: final refund 0, never below
#[test]
fn floors_refund_at_zero() {
    let mut policy = standard_policy();
    policy.processing_fee = dec("10000");

    let breakdown = calculate_refund(
        dec("1000"),
        date(2026, 9, 20),
        &policy,
        utc(2026, 9, 1, 0),
    )
    .unwrap();

    assert_eq!(breakdown.final_refund, dec("0"));
}

/// Tests that the refund can never exceed the booking amount across a spread
/// of cancellation times.
///
/// Expected: final refund <= booking amount at every offset
#[test]
fn refund_never_exceeds_booking_amount() {
    let policy = standard_policy();
    let amount = dec("10000");
    for day in [1, 5, 7, 10, 29, 30, 31, 90] {
        let now = utc(2026, 9, 1, 0);
        let check_in = date(2026, 9, 1) + chrono::Days::new(day);

        let breakdown = calculate_refund(amount, check_in, &policy, now).unwrap();

        assert!(breakdown.final_refund <= amount);
    }
}

/// Tests that an empty policy is a hard error; refunds never default
/// silently to zero.
///
/// Expected: Err(EmptyPolicy)
#[test]
fn rejects_policy_without_rules() {
    let policy = CancellationPolicy {
        id: 9,
        name: "broken".to_string(),
        rules: Vec::new(),
        processing_fee: dec("0"),
        waive_processing_fee: false,
    };

    let result = calculate_refund(dec("1000"), date(2026, 9, 20), &policy, utc(2026, 9, 1, 0));

    assert_eq!(result, Err(PricingError::EmptyPolicy));
}

/// Tests that a negative booking amount is rejected up front.
///
/// Expected: Err(NegativeBookingAmount)
#[test]
fn rejects_negative_booking_amount() {
    let result = calculate_refund(
        dec("-50"),
        date(2026, 9, 20),
        &standard_policy(),
        utc(2026, 9, 1, 0),
    );

    assert_eq!(result, Err(PricingError::NegativeBookingAmount(dec("-50"))));
}
