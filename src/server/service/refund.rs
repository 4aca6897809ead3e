use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::refund::RefundBreakdownDto,
    server::{
        data::{booking::BookingRepository, policy::CancellationPolicyRepository},
        error::AppError,
        pricing::refund::calculate_refund,
    },
};

pub struct RefundService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RefundService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes what a booking would refund if cancelled at `now`, without
    /// changing the booking.
    ///
    /// A missing policy is fatal to the call; there is no default policy to
    /// fall back to.
    ///
    /// # Returns
    /// - `Ok(RefundBreakdownDto)`: Itemized refund stages
    /// - `Err(AppError::NotFound)`: Unknown booking or policy
    /// - `Err(AppError::PricingErr)`: Policy without rules
    pub async fn preview(
        &self,
        booking_id: i32,
        policy_id: i32,
        now: DateTime<Utc>,
    ) -> Result<RefundBreakdownDto, AppError> {
        let booking = BookingRepository::new(self.db)
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let policy = CancellationPolicyRepository::new(self.db)
            .get_by_id(policy_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cancellation policy not found".to_string()))?;

        let breakdown = calculate_refund(booking.total_amount, booking.check_in, &policy, now)?;

        Ok(RefundBreakdownDto::from_breakdown(
            booking.id,
            policy.id,
            policy.name.clone(),
            breakdown,
        ))
    }
}
