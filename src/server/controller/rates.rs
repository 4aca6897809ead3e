use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        rates::{
            CreateDemandLevelDto, CreateHolidayDto, CreateSeasonalRateDto, DemandLevelDto,
            HolidayDto, SeasonalRateDto,
        },
    },
    server::{
        data::rate_rule::RateRuleRepository,
        error::AppError,
        model::rates::{
            CreateDemandLevelParams, CreateHolidayParams, CreateSeasonalRateParams,
        },
        pricing::{calendar::DateRange, rule::RateAdjustment},
        state::AppState,
    },
};

/// Tag for grouping rate configuration endpoints in OpenAPI documentation
pub static RATES_TAG: &str = "rates";

/// Rejects unknown adjustment type discriminators before they reach storage.
fn validate_adjustment(
    adjustment_type: &str,
    value: rust_decimal::Decimal,
) -> Result<(), AppError> {
    RateAdjustment::from_stored(adjustment_type, value)
        .map(|_| ())
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Unknown adjustment type '{adjustment_type}': expected percentage, fixed_amount or multiplier"
            ))
        })
}

/// Create a seasonal rate.
///
/// An empty `room_ids` list scopes the rate to every room.
///
/// # Returns
/// - `201 Created` - Successfully created seasonal rate
/// - `400 Bad Request` - Invalid date span or adjustment type
#[utoipa::path(
    post,
    path = "/api/admin/seasonal-rates",
    tag = RATES_TAG,
    request_body = CreateSeasonalRateDto,
    responses(
        (status = 201, description = "Successfully created seasonal rate", body = SeasonalRateDto),
        (status = 400, description = "Invalid rate data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_seasonal_rate(
    State(state): State<AppState>,
    Json(payload): Json<CreateSeasonalRateDto>,
) -> Result<impl IntoResponse, AppError> {
    DateRange::new(payload.start_date, payload.end_date)?;
    validate_adjustment(&payload.adjustment_type, payload.adjustment_value)?;

    let (rate, room_ids) = RateRuleRepository::new(&state.db)
        .create_seasonal(CreateSeasonalRateParams {
            name: payload.name,
            start_date: payload.start_date,
            end_date: payload.end_date,
            adjustment_type: payload.adjustment_type,
            adjustment_value: payload.adjustment_value,
            priority: payload.priority,
            min_stay: payload.min_stay,
            advance_booking_days: payload.advance_booking_days,
            room_ids: payload.room_ids,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SeasonalRateDto::from_entity(rate, room_ids)),
    ))
}

/// List all seasonal rates.
#[utoipa::path(
    get,
    path = "/api/admin/seasonal-rates",
    tag = RATES_TAG,
    responses(
        (status = 200, description = "All seasonal rates", body = Vec<SeasonalRateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_seasonal_rates(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rates = RateRuleRepository::new(&state.db).list_seasonal().await?;
    let dtos: Vec<SeasonalRateDto> = rates
        .into_iter()
        .map(|(rate, room_ids)| SeasonalRateDto::from_entity(rate, room_ids))
        .collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a demand level.
///
/// # Returns
/// - `201 Created` - Successfully created demand level
/// - `400 Bad Request` - Invalid date span or non-positive multiplier
#[utoipa::path(
    post,
    path = "/api/admin/demand-levels",
    tag = RATES_TAG,
    request_body = CreateDemandLevelDto,
    responses(
        (status = 201, description = "Successfully created demand level", body = DemandLevelDto),
        (status = 400, description = "Invalid demand level data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_demand_level(
    State(state): State<AppState>,
    Json(payload): Json<CreateDemandLevelDto>,
) -> Result<impl IntoResponse, AppError> {
    DateRange::new(payload.start_date, payload.end_date)?;
    if payload.multiplier <= rust_decimal::Decimal::ZERO {
        return Err(AppError::BadRequest(
            "Demand multiplier must be positive".to_string(),
        ));
    }

    let level = RateRuleRepository::new(&state.db)
        .create_demand(CreateDemandLevelParams {
            name: payload.name,
            start_date: payload.start_date,
            end_date: payload.end_date,
            multiplier: payload.multiplier,
            priority: payload.priority,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(DemandLevelDto::from(level))))
}

/// List all demand levels.
#[utoipa::path(
    get,
    path = "/api/admin/demand-levels",
    tag = RATES_TAG,
    responses(
        (status = 200, description = "All demand levels", body = Vec<DemandLevelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_demand_levels(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let levels = RateRuleRepository::new(&state.db).list_demand().await?;
    let dtos: Vec<DemandLevelDto> = levels.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a holiday surcharge.
///
/// # Returns
/// - `201 Created` - Successfully created holiday
/// - `400 Bad Request` - Invalid date span or adjustment type
#[utoipa::path(
    post,
    path = "/api/admin/holidays",
    tag = RATES_TAG,
    request_body = CreateHolidayDto,
    responses(
        (status = 201, description = "Successfully created holiday", body = HolidayDto),
        (status = 400, description = "Invalid holiday data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_holiday(
    State(state): State<AppState>,
    Json(payload): Json<CreateHolidayDto>,
) -> Result<impl IntoResponse, AppError> {
    DateRange::new(payload.start_date, payload.end_date)?;
    validate_adjustment(&payload.adjustment_type, payload.adjustment_value)?;

    let holiday = RateRuleRepository::new(&state.db)
        .create_holiday(CreateHolidayParams {
            name: payload.name,
            start_date: payload.start_date,
            end_date: payload.end_date,
            adjustment_type: payload.adjustment_type,
            adjustment_value: payload.adjustment_value,
            priority: payload.priority,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(HolidayDto::from(holiday))))
}

/// List all holidays.
#[utoipa::path(
    get,
    path = "/api/admin/holidays",
    tag = RATES_TAG,
    responses(
        (status = 200, description = "All holidays", body = Vec<HolidayDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_holidays(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let holidays = RateRuleRepository::new(&state.db).list_holidays().await?;
    let dtos: Vec<HolidayDto> = holidays.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}
