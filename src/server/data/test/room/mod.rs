use super::*;

use crate::server::model::room::CreateRoomParams;

/// Tests creating a room and reading it back by ID.
///
/// Expected: Ok with matching fields
#[tokio::test]
async fn creates_and_fetches_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let created = repo
        .create(CreateRoomParams {
            name: "Lagoon Villa".to_string(),
            description: Some("Private pool".to_string()),
            base_price: dec("3500"),
            max_guests: 6,
        })
        .await?;

    let fetched = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(fetched.name, "Lagoon Villa");
    assert_eq!(fetched.base_price, dec("3500"));
    assert_eq!(fetched.max_guests, 6);
    assert!(fetched.active);

    Ok(())
}

/// Tests that deactivated rooms disappear from the active listing.
///
/// Expected: listing shrinks by one after deactivation
#[tokio::test]
async fn deactivated_rooms_leave_the_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_room(db).await?;
    let _second = factory::create_room(db).await?;

    let repo = RoomRepository::new(db);
    assert_eq!(repo.list_active().await?.len(), 2);

    let updated = repo.deactivate(first.id).await?.unwrap();
    assert!(!updated.active);

    let remaining = repo.list_active().await?;
    assert_eq!(remaining.len(), 1);
    assert_ne!(remaining[0].id, first.id);

    Ok(())
}
