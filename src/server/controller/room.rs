use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;

use crate::{
    model::{
        api::ErrorDto,
        room::{CreateRoomDto, RoomDto},
    },
    server::{
        data::room::RoomRepository, error::AppError, model::room::CreateRoomParams,
        state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// Create a new room.
///
/// # Returns
/// - `201 Created` - Successfully created room
/// - `400 Bad Request` - Negative base price or non-positive guest capacity
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Successfully created room", body = RoomDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.base_price < Decimal::ZERO {
        return Err(AppError::BadRequest(
            "Base price must not be negative".to_string(),
        ));
    }
    if payload.max_guests < 1 {
        return Err(AppError::BadRequest(
            "Guest capacity must be at least 1".to_string(),
        ));
    }

    let room = RoomRepository::new(&state.db)
        .create(CreateRoomParams {
            name: payload.name,
            description: payload.description,
            base_price: payload.base_price,
            max_guests: payload.max_guests,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(RoomDto::from(room))))
}

/// List all active rooms.
///
/// # Returns
/// - `200 OK` - Active rooms ordered by name
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "Active rooms", body = Vec<RoomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomRepository::new(&state.db).list_active().await?;
    let dtos: Vec<RoomDto> = rooms.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a room by ID.
///
/// # Returns
/// - `200 OK` - The room
/// - `404 Not Found` - Room does not exist
#[utoipa::path(
    get,
    path = "/api/rooms/{room_id}",
    tag = ROOM_TAG,
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "The room", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomRepository::new(&state.db)
        .get_by_id(room_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

    Ok((StatusCode::OK, Json(RoomDto::from(room))))
}

/// Deactivate a room.
///
/// The room stays in the database for historical bookings but disappears
/// from listings and can no longer be quoted or booked.
///
/// # Returns
/// - `200 OK` - The deactivated room
/// - `404 Not Found` - Room does not exist
#[utoipa::path(
    delete,
    path = "/api/rooms/{room_id}",
    tag = ROOM_TAG,
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "The deactivated room", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deactivate_room(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomRepository::new(&state.db)
        .deactivate(room_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

    Ok((StatusCode::OK, Json(RoomDto::from(room))))
}
