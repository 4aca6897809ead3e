use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use rust_decimal::Decimal;

use crate::{
    model::{
        api::ErrorDto,
        rates::{CreateDiscountTierDto, DiscountTierDto},
    },
    server::{
        data::discount::GroupDiscountRepository, error::AppError,
        model::rates::CreateDiscountTierParams, state::AppState,
    },
};

/// Tag for grouping discount tier endpoints in OpenAPI documentation
pub static DISCOUNT_TAG: &str = "discounts";

/// Create a group discount tier.
///
/// # Returns
/// - `201 Created` - Successfully created tier
/// - `400 Bad Request` - Invalid band bounds or percentage
#[utoipa::path(
    post,
    path = "/api/admin/discount-tiers",
    tag = DISCOUNT_TAG,
    request_body = CreateDiscountTierDto,
    responses(
        (status = 201, description = "Successfully created tier", body = DiscountTierDto),
        (status = 400, description = "Invalid tier data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_discount_tier(
    State(state): State<AppState>,
    Json(payload): Json<CreateDiscountTierDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.min_rooms < 1 {
        return Err(AppError::BadRequest(
            "Tier minimum must be at least 1 room".to_string(),
        ));
    }
    if let Some(max_rooms) = payload.max_rooms {
        if max_rooms < payload.min_rooms {
            return Err(AppError::BadRequest(
                "Tier maximum must not be below its minimum".to_string(),
            ));
        }
    }
    if payload.discount_percentage < Decimal::ZERO
        || payload.discount_percentage > Decimal::ONE_HUNDRED
    {
        return Err(AppError::BadRequest(
            "Discount percentage must be between 0 and 100".to_string(),
        ));
    }

    let tier = GroupDiscountRepository::new(&state.db)
        .create_tier(CreateDiscountTierParams {
            label: payload.label,
            min_rooms: payload.min_rooms,
            max_rooms: payload.max_rooms,
            discount_percentage: payload.discount_percentage,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(DiscountTierDto::from(tier))))
}

/// List all discount tiers.
#[utoipa::path(
    get,
    path = "/api/admin/discount-tiers",
    tag = DISCOUNT_TAG,
    responses(
        (status = 200, description = "All discount tiers", body = Vec<DiscountTierDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_discount_tiers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let tiers = GroupDiscountRepository::new(&state.db)
        .list_tier_models()
        .await?;
    let dtos: Vec<DiscountTierDto> = tiers.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(dtos)))
}
