use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::availability::AvailabilityDto,
    server::{
        data::{
            booking::BookingRepository, restriction::RestrictionRepository,
            room::RoomRepository,
        },
        error::AppError,
        pricing::{availability::check_availability, calendar::DateRange},
    },
};

pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks which nights of the requested stay are bookable.
    ///
    /// Restriction hits are not errors: the result always comes back with
    /// the blocked nights and reasons populated. Only an unknown room or an
    /// invalid range fails the call.
    ///
    /// # Returns
    /// - `Ok(AvailabilityDto)`: Verdict with blocked nights and reasons
    /// - `Err(AppError::NotFound)`: Unknown or inactive room
    /// - `Err(AppError::PricingErr)`: Invalid date range
    pub async fn check(
        &self,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<AvailabilityDto, AppError> {
        let range = DateRange::new(check_in, check_out)?;

        let room = RoomRepository::new(self.db)
            .get_by_id(room_id)
            .await?
            .filter(|r| r.active)
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        let occupied = BookingRepository::new(self.db)
            .list_occupied_intervals(room.id)
            .await?;
        let restrictions = RestrictionRepository::new(self.db)
            .list_restrictions(range.start())
            .await?;

        let result = check_availability(room.id, &range, &occupied, &restrictions);

        Ok(AvailabilityDto::from_result(
            room.id, check_in, check_out, result,
        ))
    }
}
