use super::*;

use test_utils::factory::booking::BookingFactory;

/// Tests that occupied intervals carry the stored span and parsed status for
/// every booking of the room.
///
/// Expected: pending and confirmed bookings appear with their statuses
#[tokio::test]
async fn lists_occupied_intervals_with_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    BookingFactory::new(db, room.id)
        .nights(date(2026, 8, 1), 3)
        .status("confirmed")
        .build()
        .await?;
    BookingFactory::new(db, room.id)
        .nights(date(2026, 8, 10), 2)
        .status("pending")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let intervals = repo.list_occupied_intervals(room.id).await?;

    assert_eq!(intervals.len(), 2);
    assert_eq!(intervals[0].status, BookingStatus::Confirmed);
    assert_eq!(intervals[0].range.start(), date(2026, 8, 1));
    assert_eq!(intervals[0].range.end(), date(2026, 8, 4));
    assert_eq!(intervals[1].status, BookingStatus::Pending);

    Ok(())
}

/// Tests that bookings for other rooms do not leak into a room's intervals.
///
/// Expected: only the queried room's booking is returned
#[tokio::test]
async fn scopes_intervals_to_the_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    let other = factory::create_room(db).await?;
    factory::create_booking(db, room.id).await?;
    factory::create_booking(db, other.id).await?;

    let repo = BookingRepository::new(db);
    let intervals = repo.list_occupied_intervals(room.id).await?;

    assert_eq!(intervals.len(), 1);

    Ok(())
}

/// Tests that a booking row with an unrecognized status is treated as
/// occupying rather than dropped.
///
/// Expected: interval present with pending status
#[tokio::test]
async fn unknown_status_still_occupies() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    BookingFactory::new(db, room.id)
        .status("on-hold")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let intervals = repo.list_occupied_intervals(room.id).await?;

    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals[0].status, BookingStatus::Pending);

    Ok(())
}

/// Tests the status transition helper.
///
/// Expected: status persisted as cancelled
#[tokio::test]
async fn updates_booking_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;
    let booking = factory::create_booking(db, room.id).await?;

    let repo = BookingRepository::new(db);
    let updated = repo
        .set_status(booking.id, BookingStatus::Cancelled)
        .await?
        .unwrap();

    assert_eq!(updated.status, "cancelled");
    let fetched = repo.get_by_id(booking.id).await?.unwrap();
    assert_eq!(fetched.status, "cancelled");

    Ok(())
}
