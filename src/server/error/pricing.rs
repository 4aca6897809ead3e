use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Validation errors raised by the pricing core before any computation runs.
///
/// These are request-shape problems (inverted date ranges, negative money,
/// empty inputs), not restriction conflicts: an unavailable stay is reported
/// through `AvailabilityResult`, never through this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Date range where the start is not strictly before the end.
    #[error("invalid date range: start {start} must be before end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// Negative base price supplied for a room.
    #[error("base price {0} must not be negative")]
    NegativeBasePrice(Decimal),

    /// Negative booking amount supplied to the refund calculator.
    #[error("booking amount {0} must not be negative")]
    NegativeBookingAmount(Decimal),

    /// Group quote requested with zero rooms in total.
    #[error("group quote requires at least one room")]
    EmptyGroup,

    /// Cancellation policy with no rules; refunds cannot default silently.
    #[error("cancellation policy has no rules")]
    EmptyPolicy,
}

/// All pricing validation errors are client errors; none of them indicate a
/// fault in the server.
impl IntoResponse for PricingError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
