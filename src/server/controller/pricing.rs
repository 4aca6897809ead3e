use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        availability::AvailabilityDto,
        group::{GroupQuoteDto, GroupQuoteRequestDto},
        quote::QuoteDto,
    },
    server::{
        error::AppError,
        service::{
            availability::AvailabilityService, group::GroupQuoteService, quote::QuoteService,
        },
        state::AppState,
    },
};

/// Tag for grouping pricing endpoints in OpenAPI documentation
pub static PRICING_TAG: &str = "pricing";

/// Requested stay as a half-open date range `[check_in, check_out)`.
#[derive(Deserialize, IntoParams)]
pub struct StayQuery {
    /// Check-in date (first night of the stay)
    pub check_in: NaiveDate,
    /// Check-out date (excluded from the stay)
    pub check_out: NaiveDate,
}

/// Get a price quote for a room over a stay.
///
/// Resolves every active seasonal rate, demand level, and holiday surcharge
/// covering the stay into a per-night price with a full audit trail of the
/// rules applied.
///
/// # Returns
/// - `200 OK` - Itemized quote
/// - `400 Bad Request` - Invalid date range
/// - `404 Not Found` - Room does not exist or is inactive
#[utoipa::path(
    get,
    path = "/api/rooms/{room_id}/quote",
    tag = PRICING_TAG,
    params(
        ("room_id" = i32, Path, description = "Room ID"),
        StayQuery
    ),
    responses(
        (status = 200, description = "Itemized price quote", body = QuoteDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_quote(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
    Query(stay): Query<StayQuery>,
) -> Result<impl IntoResponse, AppError> {
    let quote = QuoteService::new(&state.db)
        .price_quote(room_id, stay.check_in, stay.check_out)
        .await?;

    Ok((StatusCode::OK, Json(quote)))
}

/// Check availability of a room over a stay.
///
/// Returns the full set of blocked nights with reasons rather than a plain
/// yes/no, so a calendar can render partial blocking. Restriction hits are
/// reported in the body, never as an error status.
///
/// # Returns
/// - `200 OK` - Availability verdict with blocked nights
/// - `400 Bad Request` - Invalid date range
/// - `404 Not Found` - Room does not exist or is inactive
#[utoipa::path(
    get,
    path = "/api/rooms/{room_id}/availability",
    tag = PRICING_TAG,
    params(
        ("room_id" = i32, Path, description = "Room ID"),
        StayQuery
    ),
    responses(
        (status = 200, description = "Availability verdict", body = AvailabilityDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_availability(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
    Query(stay): Query<StayQuery>,
) -> Result<impl IntoResponse, AppError> {
    let availability = AvailabilityService::new(&state.db)
        .check(room_id, stay.check_in, stay.check_out)
        .await?;

    Ok((StatusCode::OK, Json(availability)))
}

/// Get a group quote for multiple rooms.
///
/// Prices every requested room through the rule resolver, applies the single
/// matching group-discount tier to the subtotal, then tax and deposit.
///
/// # Returns
/// - `200 OK` - Itemized group quote
/// - `400 Bad Request` - Invalid date range or empty room list
/// - `404 Not Found` - A referenced room does not exist
#[utoipa::path(
    post,
    path = "/api/group-quote",
    tag = PRICING_TAG,
    request_body = GroupQuoteRequestDto,
    responses(
        (status = 200, description = "Itemized group quote", body = GroupQuoteDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 404, description = "A referenced room was not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn group_quote(
    State(state): State<AppState>,
    Json(payload): Json<GroupQuoteRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let quote = GroupQuoteService::new(&state.db).quote(payload).await?;

    Ok((StatusCode::OK, Json(quote)))
}
