use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    model::booking::CreateBookingParams,
    pricing::{
        calendar::DateRange,
        rule::{BookingStatus, OccupiedInterval},
    },
};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking in `pending` state with the resolved total.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created booking
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateBookingParams,
        total_amount: Decimal,
    ) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            room_id: ActiveValue::Set(params.room_id),
            guest_name: ActiveValue::Set(params.guest_name),
            guest_contact: ActiveValue::Set(params.guest_contact),
            check_in: ActiveValue::Set(params.check_in),
            check_out: ActiveValue::Set(params.check_out),
            status: ActiveValue::Set(BookingStatus::Pending.as_str().to_string()),
            total_amount: ActiveValue::Set(total_amount),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a booking by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The booking
    /// - `Ok(None)`: Booking not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    /// Lists all bookings for a room, soonest check-in first.
    pub async fn list_for_room(
        &self,
        room_id: i32,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.eq(room_id))
            .order_by_asc(entity::booking::Column::CheckIn)
            .all(self.db)
            .await
    }

    /// Returns the date spans held by a room's bookings, normalized for the
    /// availability evaluator.
    ///
    /// Rows with an inverted date range or an unrecognized status cannot be
    /// trusted; both are reported as pending (occupying) spans so a corrupt
    /// row blocks rather than frees nights.
    pub async fn list_occupied_intervals(
        &self,
        room_id: i32,
    ) -> Result<Vec<OccupiedInterval>, DbErr> {
        let bookings = self.list_for_room(room_id).await?;

        let mut intervals = Vec::with_capacity(bookings.len());
        for booking in bookings {
            let Some(range) = stored_span(booking.check_in, booking.check_out) else {
                tracing::warn!(booking_id = booking.id, "booking with unusable date range");
                continue;
            };
            let status = BookingStatus::parse(&booking.status).unwrap_or_else(|| {
                tracing::warn!(
                    booking_id = booking.id,
                    status = %booking.status,
                    "unknown booking status, treating as occupying"
                );
                BookingStatus::Pending
            });
            intervals.push(OccupiedInterval {
                booking_id: booking.id,
                range,
                status,
            });
        }
        Ok(intervals)
    }

    /// Updates a booking's lifecycle status.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated booking
    /// - `Ok(None)`: Booking not found
    /// - `Err(DbErr)`: Database error
    pub async fn set_status(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        let Some(booking) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::booking::ActiveModel = booking.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        Ok(Some(active.update(self.db).await?))
    }
}

/// Builds the stored span, falling back to a single night when the row is
/// inverted so the start date still counts as occupied.
fn stored_span(
    check_in: chrono::NaiveDate,
    check_out: chrono::NaiveDate,
) -> Option<DateRange> {
    DateRange::new(check_in, check_out).ok().or_else(|| {
        let next = check_in.succ_opt()?;
        DateRange::new(check_in, next).ok()
    })
}
