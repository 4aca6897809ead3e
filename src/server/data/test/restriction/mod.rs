use super::*;

use test_utils::factory::blackout_date::create_stay_bounds;

/// Tests that blackouts normalize as property-wide vetoes and maintenance
/// windows as room-scoped ones.
///
/// Expected: two restrictions with the right scopes and flags
#[tokio::test]
async fn normalizes_blackouts_and_maintenance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pricing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    factory::create_blackout(db, date(2027, 1, 1), date(2027, 1, 4), "new year closure").await?;
    factory::create_maintenance_window(db, room.id, date(2027, 2, 1), date(2027, 2, 8), "pool resurfacing").await?;

    let repo = RestrictionRepository::new(db);
    let restrictions = repo.list_restrictions(date(2026, 12, 1)).await?;

    assert_eq!(restrictions.len(), 2);
    assert_eq!(restrictions[0].scope, RoomScope::All);
    assert!(!restrictions[0].allow_booking);
    assert_eq!(restrictions[0].reason, "new year closure");
    assert!(restrictions[1].scope.includes(room.id));
    assert!(!restrictions[1].scope.includes(room.id + 1));
    assert!(!restrictions[1].allow_booking);

    Ok(())
}

/// Tests that a booking-allowed blackout keeps its stay bounds.
///
/// Expected: allow_booking true with min and max stay set
#[tokio::test]
async fn carries_stay_bounds_on_soft_blackouts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pricing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create_stay_bounds(db, date(2026, 12, 28), date(2027, 1, 5), Some(3), Some(14), "peak season").await?;

    let repo = RestrictionRepository::new(db);
    let restrictions = repo.list_restrictions(date(2026, 12, 1)).await?;

    assert_eq!(restrictions.len(), 1);
    assert!(restrictions[0].allow_booking);
    assert_eq!(restrictions[0].min_stay, Some(3));
    assert_eq!(restrictions[0].max_stay, Some(14));

    Ok(())
}

/// Tests that restrictions fully in the past are not loaded.
///
/// Expected: empty result
#[tokio::test]
async fn excludes_past_restrictions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pricing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_blackout(db, date(2026, 1, 1), date(2026, 1, 4), "past closure").await?;

    let repo = RestrictionRepository::new(db);
    let restrictions = repo.list_restrictions(date(2026, 6, 1)).await?;

    assert!(restrictions.is_empty());

    Ok(())
}
