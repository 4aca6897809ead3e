use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        rates::{
            BlackoutDateDto, CreateBlackoutDateDto, CreateMaintenanceWindowDto,
            MaintenanceWindowDto,
        },
    },
    server::{
        data::{restriction::RestrictionRepository, room::RoomRepository},
        error::AppError,
        model::rates::{CreateBlackoutDateParams, CreateMaintenanceWindowParams},
        pricing::calendar::DateRange,
        state::AppState,
    },
};

/// Tag for grouping restriction endpoints in OpenAPI documentation
pub static RESTRICTION_TAG: &str = "restrictions";

/// Create a blackout period.
///
/// With `allow_booking` false the span is fully vetoed; with it true only
/// the optional stay bounds apply.
///
/// # Returns
/// - `201 Created` - Successfully created blackout
/// - `400 Bad Request` - Invalid date span
#[utoipa::path(
    post,
    path = "/api/admin/blackout-dates",
    tag = RESTRICTION_TAG,
    request_body = CreateBlackoutDateDto,
    responses(
        (status = 201, description = "Successfully created blackout", body = BlackoutDateDto),
        (status = 400, description = "Invalid blackout data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_blackout_date(
    State(state): State<AppState>,
    Json(payload): Json<CreateBlackoutDateDto>,
) -> Result<impl IntoResponse, AppError> {
    DateRange::new(payload.start_date, payload.end_date)?;

    let blackout = RestrictionRepository::new(&state.db)
        .create_blackout(CreateBlackoutDateParams {
            reason: payload.reason,
            start_date: payload.start_date,
            end_date: payload.end_date,
            allow_booking: payload.allow_booking,
            min_stay: payload.min_stay,
            max_stay: payload.max_stay,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(BlackoutDateDto::from(blackout))))
}

/// List all blackout periods.
#[utoipa::path(
    get,
    path = "/api/admin/blackout-dates",
    tag = RESTRICTION_TAG,
    responses(
        (status = 200, description = "All blackout periods", body = Vec<BlackoutDateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_blackout_dates(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let blackouts = RestrictionRepository::new(&state.db).list_blackouts().await?;
    let dtos: Vec<BlackoutDateDto> = blackouts.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a maintenance window for a room.
///
/// Maintenance always vetoes booking for its span.
///
/// # Returns
/// - `201 Created` - Successfully created maintenance window
/// - `400 Bad Request` - Invalid date span
/// - `404 Not Found` - Room does not exist
#[utoipa::path(
    post,
    path = "/api/admin/maintenance-windows",
    tag = RESTRICTION_TAG,
    request_body = CreateMaintenanceWindowDto,
    responses(
        (status = 201, description = "Successfully created maintenance window", body = MaintenanceWindowDto),
        (status = 400, description = "Invalid maintenance data", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_maintenance_window(
    State(state): State<AppState>,
    Json(payload): Json<CreateMaintenanceWindowDto>,
) -> Result<impl IntoResponse, AppError> {
    DateRange::new(payload.start_date, payload.end_date)?;
    RoomRepository::new(&state.db)
        .get_by_id(payload.room_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

    let window = RestrictionRepository::new(&state.db)
        .create_maintenance(CreateMaintenanceWindowParams {
            room_id: payload.room_id,
            start_date: payload.start_date,
            end_date: payload.end_date,
            reason: payload.reason,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(MaintenanceWindowDto::from(window))))
}

/// List all maintenance windows.
#[utoipa::path(
    get,
    path = "/api/admin/maintenance-windows",
    tag = RESTRICTION_TAG,
    responses(
        (status = 200, description = "All maintenance windows", body = Vec<MaintenanceWindowDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_maintenance_windows(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let windows = RestrictionRepository::new(&state.db).list_maintenance().await?;
    let dtos: Vec<MaintenanceWindowDto> = windows.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}
