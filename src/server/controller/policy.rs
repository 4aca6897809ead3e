use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        rates::{CreatePolicyDto, PolicyDto},
    },
    server::{
        data::policy::CancellationPolicyRepository,
        error::AppError,
        model::policy::{CreatePolicyParams, CreatePolicyRuleParams},
        state::AppState,
    },
};

/// Tag for grouping cancellation policy endpoints in OpenAPI documentation
pub static POLICY_TAG: &str = "policies";

/// Create a cancellation policy.
///
/// A policy must carry at least one threshold rule; refund calculations
/// refuse empty policies rather than defaulting to zero.
///
/// # Returns
/// - `201 Created` - Successfully created policy
/// - `400 Bad Request` - No rules or an out-of-range percentage
#[utoipa::path(
    post,
    path = "/api/admin/cancellation-policies",
    tag = POLICY_TAG,
    request_body = CreatePolicyDto,
    responses(
        (status = 201, description = "Successfully created policy", body = PolicyDto),
        (status = 400, description = "Invalid policy data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_cancellation_policy(
    State(state): State<AppState>,
    Json(payload): Json<CreatePolicyDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.rules.is_empty() {
        return Err(AppError::BadRequest(
            "Policy must have at least one rule".to_string(),
        ));
    }
    for rule in &payload.rules {
        if rule.refund_percentage < rust_decimal::Decimal::ZERO
            || rule.refund_percentage > rust_decimal::Decimal::ONE_HUNDRED
        {
            return Err(AppError::BadRequest(
                "Refund percentage must be between 0 and 100".to_string(),
            ));
        }
        if rule.days_before_check_in < 0 {
            return Err(AppError::BadRequest(
                "Day threshold must not be negative".to_string(),
            ));
        }
    }

    let (policy, rules) = CancellationPolicyRepository::new(&state.db)
        .create(CreatePolicyParams {
            name: payload.name,
            processing_fee: payload.processing_fee,
            waive_processing_fee: payload.waive_processing_fee,
            rules: payload
                .rules
                .into_iter()
                .map(|rule| CreatePolicyRuleParams {
                    days_before_check_in: rule.days_before_check_in,
                    refund_percentage: rule.refund_percentage,
                    deduction_amount: rule.deduction_amount,
                    deduction_percentage: rule.deduction_percentage,
                })
                .collect(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PolicyDto::from_entity(policy, rules)),
    ))
}

/// List all cancellation policies with their rules.
#[utoipa::path(
    get,
    path = "/api/admin/cancellation-policies",
    tag = POLICY_TAG,
    responses(
        (status = 200, description = "All cancellation policies", body = Vec<PolicyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cancellation_policies(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let policies = CancellationPolicyRepository::new(&state.db).list().await?;
    let dtos: Vec<PolicyDto> = policies
        .into_iter()
        .map(|(policy, rules)| PolicyDto::from_entity(policy, rules))
        .collect();
    Ok((StatusCode::OK, Json(dtos)))
}
