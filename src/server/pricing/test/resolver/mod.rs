use super::*;

/// Tests the documented combination order on the December scenario: a
/// seasonal +20% (priority 5) over Dec 20-31 and a holiday +1000 fixed
/// (priority 10) on Dec 25 only. Percentages apply to the running price
/// first and fixed amounts are added last, so Dec 25 prices at
/// 1000 * 1.2 + 1000 = 2200, not (1000 + 1000) * 1.2 = 2400.
///
/// Expected: Dec 24 at 1200, Dec 25 at 2200
#[test]
fn applies_percentages_before_fixed_amounts() {
    let seasonal = rule(
        1,
        RuleSource::Seasonal,
        range(date(2026, 12, 20), date(2027, 1, 1)),
        5,
        RateAdjustment::Percentage(dec("20")),
    );
    let holiday = rule(
        2,
        RuleSource::Holiday,
        range(date(2026, 12, 25), date(2026, 12, 26)),
        10,
        RateAdjustment::FixedAmount(dec("1000")),
    );

    let quote = resolve_price(
        1,
        dec("1000"),
        &range(date(2026, 12, 24), date(2026, 12, 26)),
        &[seasonal, holiday],
    )
    .unwrap();

    assert_eq!(quote.nights, 2);
    assert_eq!(quote.nightly[0].date, date(2026, 12, 24));
    assert_eq!(quote.nightly[0].price, dec("1200"));
    assert_eq!(quote.nightly[1].date, date(2026, 12, 25));
    assert_eq!(quote.nightly[1].price, dec("2200"));
    assert_eq!(quote.total, dec("3400"));
}

/// Tests that rule lists that are permutations of each other with identical
/// priorities resolve to the same prices.
///
/// Expected: identical totals and nightly prices for both orderings
#[test]
fn equal_priority_permutations_resolve_identically() {
    let span = range(date(2026, 3, 1), date(2026, 3, 4));
    let a = rule(
        1,
        RuleSource::Seasonal,
        span,
        3,
        RateAdjustment::Percentage(dec("10")),
    );
    let b = rule(
        2,
        RuleSource::Demand,
        span,
        3,
        RateAdjustment::Multiplier(dec("1.5")),
    );
    let c = rule(
        3,
        RuleSource::Holiday,
        span,
        3,
        RateAdjustment::FixedAmount(dec("250")),
    );

    let forward = resolve_price(1, dec("800"), &span, &[a.clone(), b.clone(), c.clone()]).unwrap();
    let backward = resolve_price(1, dec("800"), &span, &[c, b, a]).unwrap();

    assert_eq!(forward.total, backward.total);
    assert_eq!(
        forward.nightly.iter().map(|n| n.price).collect::<Vec<_>>(),
        backward.nightly.iter().map(|n| n.price).collect::<Vec<_>>()
    );
}

/// Tests that the newest rule applies first when priorities tie: the audit
/// trail lists the later-created rule's application before the earlier one's.
///
/// Expected: rule 2 recorded before rule 1
#[test]
fn newest_rule_wins_priority_ties() {
    let span = range(date(2026, 3, 1), date(2026, 3, 2));
    let older = rule(
        1,
        RuleSource::Seasonal,
        span,
        5,
        RateAdjustment::Percentage(dec("10")),
    );
    let newer = rule(
        2,
        RuleSource::Demand,
        span,
        5,
        RateAdjustment::Percentage(dec("20")),
    );

    let quote = resolve_price(1, dec("1000"), &span, &[older, newer]).unwrap();

    let order: Vec<i32> = quote.nightly[0].applied.iter().map(|a| a.rule_id).collect();
    assert_eq!(order, vec![2, 1]);
}

/// Tests that the running price clamps at zero after each application and
/// can recover through later fixed amounts.
///
/// Expected: -150% clamps to 0, then +500 fixed lands at 500
#[test]
fn clamps_running_price_at_zero() {
    let span = range(date(2026, 3, 1), date(2026, 3, 2));
    let crash = rule(
        1,
        RuleSource::Demand,
        span,
        10,
        RateAdjustment::Percentage(dec("-150")),
    );
    let recover = rule(
        2,
        RuleSource::Holiday,
        span,
        1,
        RateAdjustment::FixedAmount(dec("500")),
    );

    let quote = resolve_price(1, dec("1000"), &span, &[crash, recover]).unwrap();

    let night = &quote.nightly[0];
    assert_eq!(night.applied[0].price_after, dec("0"));
    assert_eq!(night.price, dec("500"));
    assert!(quote.total >= Decimal::ZERO);
}

/// Tests scope filtering: a rule naming other rooms is ignored, and a rule
/// with an explicitly empty room set applies to every room.
///
/// Expected: only the empty-scoped rule contributes
#[test]
fn filters_rules_by_room_scope() {
    let span = range(date(2026, 3, 1), date(2026, 3, 2));
    let mut other_room = rule(
        1,
        RuleSource::Seasonal,
        span,
        5,
        RateAdjustment::FixedAmount(dec("700")),
    );
    other_room.scope = RoomScope::Rooms(BTreeSet::from([99]));
    let mut empty_scope = rule(
        2,
        RuleSource::Seasonal,
        span,
        5,
        RateAdjustment::FixedAmount(dec("300")),
    );
    empty_scope.scope = RoomScope::Rooms(BTreeSet::new());

    let quote = resolve_price(7, dec("1000"), &span, &[other_room, empty_scope]).unwrap();

    assert_eq!(quote.nightly[0].price, dec("1300"));
    assert_eq!(quote.nightly[0].applied.len(), 1);
    assert_eq!(quote.nightly[0].applied[0].rule_id, 2);
}

/// Tests that rules outside the queried date range are ignored entirely.
///
/// Expected: base price unchanged
#[test]
fn ignores_rules_outside_range() {
    let stay = range(date(2026, 6, 1), date(2026, 6, 3));
    let elsewhere = rule(
        1,
        RuleSource::Seasonal,
        range(date(2026, 6, 3), date(2026, 6, 10)),
        5,
        RateAdjustment::Multiplier(dec("2")),
    );

    let quote = resolve_price(1, dec("1000"), &stay, &[elsewhere]).unwrap();

    assert_eq!(quote.total, dec("2000"));
    assert!(quote.nightly.iter().all(|n| n.applied.is_empty()));
}

/// Tests that stay restrictions take the maximum across matching rules
/// regardless of priority: a high-priority rule cannot loosen a minimum
/// stay imposed by a low-priority one.
///
/// Expected: min_stay 5 and advance_booking_days 14
#[test]
fn merges_restrictions_most_restrictive_wins() {
    let span = range(date(2026, 3, 1), date(2026, 3, 4));
    let mut lax = rule(
        1,
        RuleSource::Seasonal,
        span,
        100,
        RateAdjustment::Percentage(dec("5")),
    );
    lax.min_stay = Some(2);
    lax.advance_booking_days = Some(14);
    let mut strict = rule(
        2,
        RuleSource::Holiday,
        span,
        1,
        RateAdjustment::Percentage(dec("5")),
    );
    strict.min_stay = Some(5);
    strict.advance_booking_days = Some(3);

    let quote = resolve_price(1, dec("1000"), &span, &[lax, strict]).unwrap();

    assert_eq!(quote.restrictions.min_stay, Some(5));
    assert_eq!(quote.restrictions.advance_booking_days, Some(14));
}

/// Tests per-night variation when rules cover different sub-ranges of the
/// stay; the total is the sum of the individual nights.
///
/// Expected: two nights at 1100, one at 1000, total 3200
#[test]
fn prices_each_night_independently() {
    let stay = range(date(2026, 4, 1), date(2026, 4, 4));
    let partial = rule(
        1,
        RuleSource::Seasonal,
        range(date(2026, 4, 1), date(2026, 4, 3)),
        5,
        RateAdjustment::FixedAmount(dec("100")),
    );

    let quote = resolve_price(1, dec("1000"), &stay, &[partial]).unwrap();

    let prices: Vec<Decimal> = quote.nightly.iter().map(|n| n.price).collect();
    assert_eq!(prices, vec![dec("1100"), dec("1100"), dec("1000")]);
    assert_eq!(quote.total, dec("3200"));
}

/// Tests that a negative base price is rejected before any computation.
///
/// Expected: Err(NegativeBasePrice)
#[test]
fn rejects_negative_base_price() {
    let stay = range(date(2026, 4, 1), date(2026, 4, 2));

    let result = resolve_price(1, dec("-1"), &stay, &[]);

    assert_eq!(result, Err(PricingError::NegativeBasePrice(dec("-1"))));
}

/// Tests the audit trail: every application records the rule identity and
/// the before/after prices even though only the cumulative result matters.
///
/// Expected: two applications with chained before/after prices
#[test]
fn records_applied_rules_for_audit() {
    let span = range(date(2026, 5, 1), date(2026, 5, 2));
    let first = rule(
        1,
        RuleSource::Demand,
        span,
        10,
        RateAdjustment::Multiplier(dec("1.1")),
    );
    let second = rule(
        2,
        RuleSource::Holiday,
        span,
        5,
        RateAdjustment::FixedAmount(dec("50")),
    );

    let quote = resolve_price(1, dec("1000"), &span, &[first, second]).unwrap();

    let applied = &quote.nightly[0].applied;
    assert_eq!(applied.len(), 2);
    assert_eq!(applied[0].price_before, dec("1000"));
    assert_eq!(applied[0].price_after, dec("1100"));
    assert_eq!(applied[1].price_before, dec("1100"));
    assert_eq!(applied[1].price_after, dec("1150"));
}
