use super::*;

use test_utils::factory::seasonal_rate::SeasonalRateFactory;

/// Tests normalization of all three collections into pricing rules in
/// creation order: seasonal, then demand, then holiday.
///
/// Expected: three rules with the right sources and adjustments
#[tokio::test]
async fn merges_all_sources_in_creation_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pricing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RateRuleRepository::new(db);
    factory::create_seasonal_rate(db, date(2026, 12, 1), date(2027, 1, 15)).await?;
    factory::create_demand_level(db, date(2026, 12, 20), date(2027, 1, 5), dec("1.5"), 8).await?;
    factory::create_holiday(db, date(2026, 12, 25), date(2026, 12, 26), "fixed_amount", dec("1000"), 10).await?;

    let rules = repo.list_active_rules(date(2026, 12, 1)).await?;

    assert_eq!(rules.len(), 3);
    assert_eq!(rules[0].source, RuleSource::Seasonal);
    assert_eq!(rules[1].source, RuleSource::Demand);
    assert_eq!(rules[1].adjustment, RateAdjustment::Multiplier(dec("1.5")));
    assert_eq!(rules[2].source, RuleSource::Holiday);
    assert_eq!(
        rules[2].adjustment,
        RateAdjustment::FixedAmount(dec("1000"))
    );

    Ok(())
}

/// Tests room scoping: junction rows become an explicit scope, no junction
/// rows mean the rate applies everywhere.
///
/// Expected: scoped rule includes only its room
#[tokio::test]
async fn normalizes_room_scope_from_junction_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pricing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    let other = factory::create_room(db).await?;
    SeasonalRateFactory::new(db, date(2026, 12, 1), date(2027, 1, 15))
        .rooms(vec![room.id])
        .build()
        .await?;
    factory::create_seasonal_rate(db, date(2026, 12, 1), date(2027, 1, 15)).await?;

    let repo = RateRuleRepository::new(db);
    let rules = repo.list_active_rules(date(2026, 12, 1)).await?;

    assert_eq!(rules.len(), 2);
    assert!(rules[0].scope.includes(room.id));
    assert!(!rules[0].scope.includes(other.id));
    assert_eq!(rules[1].scope, RoomScope::All);

    Ok(())
}

/// Tests that rules whose span has fully elapsed are not loaded.
///
/// Expected: only the future rule survives the cutoff
#[tokio::test]
async fn excludes_rules_entirely_in_the_past() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pricing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_seasonal_rate(db, date(2026, 1, 1), date(2026, 2, 1)).await?;
    factory::create_seasonal_rate(db, date(2026, 11, 1), date(2026, 12, 1)).await?;

    let repo = RateRuleRepository::new(db);
    let rules = repo.list_active_rules(date(2026, 6, 1)).await?;

    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].range.start(), date(2026, 11, 1));

    Ok(())
}

/// Tests fail-open normalization: a row with an unknown adjustment type is
/// skipped instead of failing the whole load.
///
/// Expected: the malformed rate is absent, the valid one present
#[tokio::test]
async fn skips_rates_with_unknown_adjustment_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pricing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SeasonalRateFactory::new(db, date(2026, 12, 1), date(2027, 1, 15))
        .adjustment("mystery", dec("5"))
        .build()
        .await?;
    factory::create_seasonal_rate(db, date(2026, 12, 1), date(2027, 1, 15)).await?;

    let repo = RateRuleRepository::new(db);
    let rules = repo.list_active_rules(date(2026, 12, 1)).await?;

    assert_eq!(rules.len(), 1);
    assert_eq!(
        rules[0].adjustment,
        RateAdjustment::Percentage(dec("20"))
    );

    Ok(())
}

/// Tests that stay constraints on a seasonal rate survive normalization.
///
/// Expected: min_stay and advance_booking_days carried onto the rule
#[tokio::test]
async fn carries_stay_constraints() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pricing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SeasonalRateFactory::new(db, date(2026, 12, 1), date(2027, 1, 15))
        .min_stay(3)
        .advance_booking_days(14)
        .build()
        .await?;

    let repo = RateRuleRepository::new(db);
    let rules = repo.list_active_rules(date(2026, 12, 1)).await?;

    assert_eq!(rules[0].min_stay, Some(3));
    assert_eq!(rules[0].advance_booking_days, Some(14));

    Ok(())
}
