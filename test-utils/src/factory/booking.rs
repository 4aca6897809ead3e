//! Booking factory for creating test booking entities.

use chrono::{Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test bookings with customizable fields.
///
/// Defaults:
/// - guest_name: `"Guest {id}"` where id is auto-incremented
/// - check_in: 30 days from today, for 2 nights
/// - status: `"pending"`
/// - total_amount: `2000`
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    guest_name: String,
    guest_contact: Option<String>,
    check_in: NaiveDate,
    check_out: NaiveDate,
    status: String,
    total_amount: Decimal,
}

impl<'a> BookingFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, room_id: i32) -> Self {
        let id = next_id();
        let check_in = Utc::now().date_naive() + Days::new(30);
        Self {
            db,
            room_id,
            guest_name: format!("Guest {}", id),
            guest_contact: None,
            check_in,
            check_out: check_in + Days::new(2),
            status: "pending".to_string(),
            total_amount: Decimal::from(2000),
        }
    }

    /// Sets the stay as a check-in date and a night count.
    pub fn nights(mut self, check_in: NaiveDate, nights: u64) -> Self {
        self.check_in = check_in;
        self.check_out = check_in + Days::new(nights);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn total_amount(mut self, total_amount: Decimal) -> Self {
        self.total_amount = total_amount;
        self
    }

    /// Inserts the booking.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            room_id: ActiveValue::Set(self.room_id),
            guest_name: ActiveValue::Set(self.guest_name),
            guest_contact: ActiveValue::Set(self.guest_contact),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            status: ActiveValue::Set(self.status),
            total_amount: ActiveValue::Set(self.total_amount),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default values for the given room.
pub async fn create_booking(
    db: &DatabaseConnection,
    room_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, room_id).build().await
}
