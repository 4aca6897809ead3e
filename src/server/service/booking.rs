use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::booking::{BookingDto, CancellationDto},
    server::{
        data::{
            booking::BookingRepository, policy::CancellationPolicyRepository,
            rate_rule::RateRuleRepository, restriction::RestrictionRepository,
            room::RoomRepository,
        },
        error::AppError,
        model::booking::CreateBookingParams,
        pricing::{
            availability::{check_availability, AvailabilityResult},
            calendar::{days_until_check_in, DateRange},
            refund::calculate_refund,
            resolver::resolve_price,
            rule::BookingStatus,
        },
    },
};
use crate::model::refund::RefundBreakdownDto;

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking after checking availability and pricing the stay.
    ///
    /// The stay must clear three gates: every night available, the merged
    /// minimum-stay requirement, and the merged advance-booking requirement
    /// (checked against the explicit `now`). The stored total always comes
    /// from the resolver, never from the caller.
    ///
    /// # Returns
    /// - `Ok(BookingDto)`: The created pending booking with its priced total
    /// - `Err(AppError::NotFound)`: Unknown or inactive room
    /// - `Err(AppError::Conflict)`: A night is blocked or a stay restriction
    ///   is violated, with the reasons in the message
    /// - `Err(AppError::PricingErr)`: Invalid date range
    pub async fn create(
        &self,
        params: CreateBookingParams,
        now: DateTime<Utc>,
    ) -> Result<BookingDto, AppError> {
        let range = DateRange::new(params.check_in, params.check_out)?;

        let room = RoomRepository::new(self.db)
            .get_by_id(params.room_id)
            .await?
            .filter(|r| r.active)
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        let booking_repo = BookingRepository::new(self.db);
        let occupied = booking_repo.list_occupied_intervals(room.id).await?;
        let restrictions = RestrictionRepository::new(self.db)
            .list_restrictions(range.start())
            .await?;

        let availability = check_availability(room.id, &range, &occupied, &restrictions);
        if !availability.available {
            return Err(AppError::Conflict(conflict_message(&availability)));
        }

        let rules = RateRuleRepository::new(self.db)
            .list_active_rules(range.start())
            .await?;
        let quote = resolve_price(room.id, room.base_price, &range, &rules)?;

        if let Some(min_stay) = quote.restrictions.min_stay {
            if range.nights() < i64::from(min_stay) {
                return Err(AppError::Conflict(format!(
                    "requested stay of {} nights is below the minimum of {} for these dates",
                    range.nights(),
                    min_stay
                )));
            }
        }
        if let Some(advance) = quote.restrictions.advance_booking_days {
            let days = days_until_check_in(range.start(), now);
            if days < i64::from(advance) {
                return Err(AppError::Conflict(format!(
                    "these dates must be booked at least {} days in advance",
                    advance
                )));
            }
        }

        let booking = booking_repo.create(params, quote.total).await?;
        tracing::info!(
            booking_id = booking.id,
            room_id = room.id,
            "booking created"
        );

        Ok(booking.into())
    }

    /// Gets a booking by ID.
    pub async fn get(&self, booking_id: i32) -> Result<BookingDto, AppError> {
        let booking = BookingRepository::new(self.db)
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;
        Ok(booking.into())
    }

    /// Cancels a booking under the given policy and returns the itemized
    /// refund.
    ///
    /// The refund is computed before the status flips, so a missing or
    /// empty policy leaves the booking untouched.
    ///
    /// # Returns
    /// - `Ok(CancellationDto)`: The cancelled booking and its refund
    /// - `Err(AppError::NotFound)`: Unknown booking or policy
    /// - `Err(AppError::BadRequest)`: Booking already cancelled
    pub async fn cancel(
        &self,
        booking_id: i32,
        policy_id: i32,
        now: DateTime<Utc>,
    ) -> Result<CancellationDto, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let booking = booking_repo
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if BookingStatus::parse(&booking.status) == Some(BookingStatus::Cancelled) {
            return Err(AppError::BadRequest(
                "Booking is already cancelled".to_string(),
            ));
        }

        let policy = CancellationPolicyRepository::new(self.db)
            .get_by_id(policy_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cancellation policy not found".to_string()))?;

        let breakdown = calculate_refund(booking.total_amount, booking.check_in, &policy, now)?;

        let cancelled = booking_repo
            .set_status(booking.id, BookingStatus::Cancelled)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;
        tracing::info!(
            booking_id = cancelled.id,
            refund = %breakdown.final_refund,
            "booking cancelled"
        );

        Ok(CancellationDto {
            booking: cancelled.into(),
            refund: RefundBreakdownDto::from_breakdown(
                booking.id,
                policy.id,
                policy.name.clone(),
                breakdown,
            ),
        })
    }
}

/// Flattens an availability verdict into one conflict message: blocked
/// nights with their reasons, then stay-level violations.
fn conflict_message(availability: &AvailabilityResult) -> String {
    let mut reasons: Vec<String> = availability
        .unavailable
        .iter()
        .map(|(date, reason)| format!("{date}: {reason}"))
        .collect();
    reasons.extend(availability.stay_violations.iter().cloned());
    format!("requested stay is not available: {}", reasons.join("; "))
}
