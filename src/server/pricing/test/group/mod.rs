use super::*;

fn tiers() -> Vec<DiscountTier> {
    vec![
        DiscountTier {
            id: 1,
            label: "small group".to_string(),
            min_rooms: 3,
            max_rooms: Some(5),
            discount_percentage: dec("5"),
        },
        DiscountTier {
            id: 2,
            label: "large group".to_string(),
            min_rooms: 6,
            max_rooms: None,
            discount_percentage: dec("10"),
        },
    ]
}

/// Tests the full arithmetic chain on a two-room, five-unit booking: room
/// subtotals, tier discount, 7% tax on the discounted amount, and the 30%
/// deposit on the tax-inclusive total.
///
/// Expected: subtotal 16000, discount 800, tax 1064, total 16264,
/// deposit 4879.20
#[test]
fn itemizes_every_stage_of_the_group_total() {
    let stay = range(date(2026, 5, 1), date(2026, 5, 3));
    let rooms = vec![
        GroupRoom {
            room_id: 1,
            quantity: 2,
            base_price: dec("1000"),
        },
        GroupRoom {
            room_id: 2,
            quantity: 3,
            base_price: dec("2000"),
        },
    ];

    let quote = calculate_group_price(&rooms, &stay, &[], &tiers()).unwrap();

    assert_eq!(quote.total_rooms, 5);
    assert_eq!(quote.nights, 2);
    assert_eq!(quote.rooms[0].price_per_stay, dec("2000"));
    assert_eq!(quote.rooms[0].subtotal, dec("4000"));
    assert_eq!(quote.rooms[1].subtotal, dec("12000"));
    assert_eq!(quote.subtotal, dec("16000"));
    assert_eq!(quote.tier.as_ref().unwrap().tier_id, 1);
    assert_eq!(quote.discount_amount, dec("800"));
    assert_eq!(quote.taxable_amount, dec("15200"));
    assert_eq!(quote.tax_amount, dec("1064"));
    assert_eq!(quote.total, dec("16264"));
    assert_eq!(quote.deposit_amount, dec("4879.20"));
}

/// Tests that both band edges select the same tier: 3 rooms and 5 rooms both
/// land in the 3-5 band, so the discount percentage is identical.
///
/// Expected: tier 1 at both boundaries
#[test]
fn tier_boundaries_select_the_same_tier() {
    let stay = range(date(2026, 5, 1), date(2026, 5, 2));
    let at_min = vec![GroupRoom {
        room_id: 1,
        quantity: 3,
        base_price: dec("1000"),
    }];
    let at_max = vec![GroupRoom {
        room_id: 1,
        quantity: 5,
        base_price: dec("1000"),
    }];

    let min_quote = calculate_group_price(&at_min, &stay, &[], &tiers()).unwrap();
    let max_quote = calculate_group_price(&at_max, &stay, &[], &tiers()).unwrap();

    assert_eq!(min_quote.tier.as_ref().unwrap().tier_id, 1);
    assert_eq!(max_quote.tier.as_ref().unwrap().tier_id, 1);
    assert_eq!(
        min_quote.tier.unwrap().discount_percentage,
        max_quote.tier.unwrap().discount_percentage
    );
}

/// Tests that the unbounded top band catches every count past its minimum
/// and that only one tier ever applies.
///
/// Expected: tier 2 for 6 and for 40 rooms
#[test]
fn unbounded_tier_applies_above_its_minimum() {
    let stay = range(date(2026, 5, 1), date(2026, 5, 2));
    for quantity in [6, 40] {
        let rooms = vec![GroupRoom {
            room_id: 1,
            quantity,
            base_price: dec("1000"),
        }];

        let quote = calculate_group_price(&rooms, &stay, &[], &tiers()).unwrap();

        assert_eq!(quote.tier.as_ref().unwrap().tier_id, 2);
    }
}

/// Tests that counts below every band get no discount but still tax and
/// deposit correctly.
///
/// Expected: no tier, discount zero, tax on the full subtotal
#[test]
fn no_tier_means_no_discount() {
    let stay = range(date(2026, 5, 1), date(2026, 5, 2));
    let rooms = vec![GroupRoom {
        room_id: 1,
        quantity: 2,
        base_price: dec("1000"),
    }];

    let quote = calculate_group_price(&rooms, &stay, &[], &tiers()).unwrap();

    assert!(quote.tier.is_none());
    assert_eq!(quote.discount_amount, dec("0"));
    assert_eq!(quote.subtotal, dec("2000"));
    assert_eq!(quote.tax_amount, dec("140"));
    assert_eq!(quote.total, dec("2140"));
}

/// Tests that room-scoped pricing rules reach the right line: a seasonal
/// surcharge scoped to one room leaves the other room's line untouched.
///
/// Expected: surcharge only on room 1's subtotal
#[test]
fn applies_rules_per_room_scope() {
    let stay = range(date(2026, 5, 1), date(2026, 5, 2));
    let mut surcharge = rule(
        1,
        RuleSource::Seasonal,
        stay,
        5,
        RateAdjustment::FixedAmount(dec("500")),
    );
    surcharge.scope = RoomScope::Rooms(BTreeSet::from([1]));
    let rooms = vec![
        GroupRoom {
            room_id: 1,
            quantity: 1,
            base_price: dec("1000"),
        },
        GroupRoom {
            room_id: 2,
            quantity: 1,
            base_price: dec("1000"),
        },
    ];

    let quote = calculate_group_price(&rooms, &stay, &[surcharge], &tiers()).unwrap();

    assert_eq!(quote.rooms[0].subtotal, dec("1500"));
    assert_eq!(quote.rooms[1].subtotal, dec("1000"));
}

/// Tests that a request with zero rooms in total is a validation error, not
/// an empty quote.
///
/// Expected: Err(EmptyGroup)
#[test]
fn rejects_empty_group() {
    let stay = range(date(2026, 5, 1), date(2026, 5, 2));

    let none = calculate_group_price(&[], &stay, &[], &tiers());
    let zero_quantity = calculate_group_price(
        &[GroupRoom {
            room_id: 1,
            quantity: 0,
            base_price: dec("1000"),
        }],
        &stay,
        &[],
        &tiers(),
    );

    assert_eq!(none, Err(PricingError::EmptyGroup));
    assert_eq!(zero_quantity, Err(PricingError::EmptyGroup));
}
