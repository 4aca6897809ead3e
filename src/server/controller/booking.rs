use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, CancelBookingDto, CancellationDto, CreateBookingDto},
        refund::RefundBreakdownDto,
    },
    server::{
        error::AppError,
        model::booking::CreateBookingParams,
        service::{booking::BookingService, refund::RefundService},
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

#[derive(Deserialize, IntoParams)]
pub struct RefundPreviewQuery {
    /// Cancellation policy to preview the refund under
    pub policy_id: i32,
}

/// Create a booking.
///
/// The stay is checked for availability and stay restrictions and priced by
/// the rule resolver; the stored total always comes from the resolver,
/// never from the request.
///
/// # Returns
/// - `201 Created` - Pending booking with its priced total
/// - `400 Bad Request` - Invalid date range
/// - `404 Not Found` - Room does not exist or is inactive
/// - `409 Conflict` - A night is blocked or a stay restriction is violated
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Successfully created booking", body = BookingDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 409, description = "Stay unavailable or restricted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .create(
            CreateBookingParams {
                room_id: payload.room_id,
                guest_name: payload.guest_name,
                guest_contact: payload.guest_contact,
                check_in: payload.check_in,
                check_out: payload.check_out,
            },
            Utc::now(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

/// Get a booking by ID.
///
/// # Returns
/// - `200 OK` - The booking
/// - `404 Not Found` - Booking does not exist
#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "The booking", body = BookingDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db).get(booking_id).await?;

    Ok((StatusCode::OK, Json(booking)))
}

/// Cancel a booking under a cancellation policy.
///
/// Computes the itemized refund for cancelling now, then flips the booking
/// to cancelled. A missing policy aborts the call with the booking
/// untouched.
///
/// # Returns
/// - `200 OK` - The cancelled booking and its refund breakdown
/// - `400 Bad Request` - Booking already cancelled or policy has no rules
/// - `404 Not Found` - Booking or policy does not exist
#[utoipa::path(
    post,
    path = "/api/bookings/{booking_id}/cancel",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    request_body = CancelBookingDto,
    responses(
        (status = 200, description = "Cancelled booking with refund", body = CancellationDto),
        (status = 400, description = "Already cancelled or unusable policy", body = ErrorDto),
        (status = 404, description = "Booking or policy not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
    Json(payload): Json<CancelBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let cancellation = BookingService::new(&state.db)
        .cancel(booking_id, payload.policy_id, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(cancellation)))
}

/// Preview the refund for cancelling a booking now, without cancelling it.
///
/// # Returns
/// - `200 OK` - Itemized refund breakdown
/// - `400 Bad Request` - Policy has no rules
/// - `404 Not Found` - Booking or policy does not exist
#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}/refund-preview",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID"),
        RefundPreviewQuery
    ),
    responses(
        (status = 200, description = "Itemized refund breakdown", body = RefundBreakdownDto),
        (status = 400, description = "Policy has no rules", body = ErrorDto),
        (status = 404, description = "Booking or policy not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refund_preview(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
    Query(query): Query<RefundPreviewQuery>,
) -> Result<impl IntoResponse, AppError> {
    let preview = RefundService::new(&state.db)
        .preview(booking_id, query.policy_id, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(preview)))
}
