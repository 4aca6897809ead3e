use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::refund::RefundBreakdownDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBookingDto {
    pub room_id: i32,
    pub guest_name: String,
    pub guest_contact: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub room_id: i32,
    pub guest_name: String,
    pub guest_contact: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: String,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<entity::booking::Model> for BookingDto {
    fn from(booking: entity::booking::Model) -> Self {
        Self {
            id: booking.id,
            room_id: booking.room_id,
            guest_name: booking.guest_name,
            guest_contact: booking.guest_contact,
            check_in: booking.check_in,
            check_out: booking.check_out,
            status: booking.status,
            total_amount: booking.total_amount,
            created_at: booking.created_at,
        }
    }
}

/// Request body for cancelling a booking under a policy.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CancelBookingDto {
    pub policy_id: i32,
}

/// Result of a cancellation: the updated booking plus the refund breakdown.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CancellationDto {
    pub booking: BookingDto,
    pub refund: RefundBreakdownDto,
}
