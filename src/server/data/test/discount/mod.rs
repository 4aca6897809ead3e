use super::*;

/// Tests tier normalization for the group aggregator.
///
/// Expected: tiers ordered by minimum with bounds converted
#[tokio::test]
async fn normalizes_tiers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pricing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_tier(db, 6, None, dec("10")).await?;
    factory::create_tier(db, 3, Some(5), dec("5")).await?;

    let repo = GroupDiscountRepository::new(db);
    let tiers = repo.list_tiers().await?;

    assert_eq!(tiers.len(), 2);
    assert_eq!(tiers[0].min_rooms, 3);
    assert_eq!(tiers[0].max_rooms, Some(5));
    assert_eq!(tiers[1].min_rooms, 6);
    assert_eq!(tiers[1].max_rooms, None);
    assert_eq!(tiers[1].discount_percentage, dec("10"));

    Ok(())
}

/// Tests that a tier with a non-positive minimum is unusable and skipped.
///
/// Expected: only the valid tier survives
#[tokio::test]
async fn skips_tiers_with_invalid_minimum() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pricing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_tier(db, 0, None, dec("50")).await?;
    factory::create_tier(db, 2, None, dec("5")).await?;

    let repo = GroupDiscountRepository::new(db);
    let tiers = repo.list_tiers().await?;

    assert_eq!(tiers.len(), 1);
    assert_eq!(tiers[0].min_rooms, 2);

    Ok(())
}
