use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;

use crate::{
    model,
    server::{
        controller::{booking, discount, policy, pricing, rates, restriction, room},
        state::AppState,
    },
};

/// OpenAPI document aggregating every API endpoint and schema.
#[derive(OpenApi)]
#[openapi(
    paths(
        room::create_room,
        room::list_rooms,
        room::get_room,
        room::deactivate_room,
        pricing::get_quote,
        pricing::get_availability,
        pricing::group_quote,
        booking::create_booking,
        booking::get_booking,
        booking::cancel_booking,
        booking::refund_preview,
        rates::create_seasonal_rate,
        rates::list_seasonal_rates,
        rates::create_demand_level,
        rates::list_demand_levels,
        rates::create_holiday,
        rates::list_holidays,
        restriction::create_blackout_date,
        restriction::list_blackout_dates,
        restriction::create_maintenance_window,
        restriction::list_maintenance_windows,
        discount::create_discount_tier,
        discount::list_discount_tiers,
        policy::create_cancellation_policy,
        policy::list_cancellation_policies,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::room::CreateRoomDto,
        model::room::RoomDto,
        model::quote::QuoteDto,
        model::quote::NightlyRateDto,
        model::quote::AppliedRuleDto,
        model::availability::AvailabilityDto,
        model::availability::UnavailableDateDto,
        model::group::GroupQuoteRequestDto,
        model::group::GroupRoomRequestDto,
        model::group::GroupQuoteDto,
        model::group::GroupRoomSubtotalDto,
        model::group::AppliedTierDto,
        model::booking::CreateBookingDto,
        model::booking::BookingDto,
        model::booking::CancelBookingDto,
        model::booking::CancellationDto,
        model::refund::RefundBreakdownDto,
        model::rates::CreateSeasonalRateDto,
        model::rates::SeasonalRateDto,
        model::rates::CreateDemandLevelDto,
        model::rates::DemandLevelDto,
        model::rates::CreateHolidayDto,
        model::rates::HolidayDto,
        model::rates::CreateBlackoutDateDto,
        model::rates::BlackoutDateDto,
        model::rates::CreateMaintenanceWindowDto,
        model::rates::MaintenanceWindowDto,
        model::rates::CreateDiscountTierDto,
        model::rates::DiscountTierDto,
        model::rates::CreatePolicyDto,
        model::rates::PolicyDto,
        model::rates::PolicyRuleDto,
    ))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/rooms", post(room::create_room).get(room::list_rooms))
        .route(
            "/api/rooms/{room_id}",
            get(room::get_room).delete(room::deactivate_room),
        )
        .route("/api/rooms/{room_id}/quote", get(pricing::get_quote))
        .route(
            "/api/rooms/{room_id}/availability",
            get(pricing::get_availability),
        )
        .route("/api/group-quote", post(pricing::group_quote))
        .route("/api/bookings", post(booking::create_booking))
        .route("/api/bookings/{booking_id}", get(booking::get_booking))
        .route(
            "/api/bookings/{booking_id}/cancel",
            post(booking::cancel_booking),
        )
        .route(
            "/api/bookings/{booking_id}/refund-preview",
            get(booking::refund_preview),
        )
        .route(
            "/api/admin/seasonal-rates",
            post(rates::create_seasonal_rate).get(rates::list_seasonal_rates),
        )
        .route(
            "/api/admin/demand-levels",
            post(rates::create_demand_level).get(rates::list_demand_levels),
        )
        .route(
            "/api/admin/holidays",
            post(rates::create_holiday).get(rates::list_holidays),
        )
        .route(
            "/api/admin/blackout-dates",
            post(restriction::create_blackout_date).get(restriction::list_blackout_dates),
        )
        .route(
            "/api/admin/maintenance-windows",
            post(restriction::create_maintenance_window)
                .get(restriction::list_maintenance_windows),
        )
        .route(
            "/api/admin/discount-tiers",
            post(discount::create_discount_tier).get(discount::list_discount_tiers),
        )
        .route(
            "/api/admin/cancellation-policies",
            post(policy::create_cancellation_policy).get(policy::list_cancellation_policies),
        )
}
