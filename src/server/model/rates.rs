//! Parameter types for the rate and restriction configuration collections.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Parameters for creating a seasonal rate.
///
/// `room_ids` scopes the rate; an empty list means it applies to every room.
#[derive(Debug, Clone)]
pub struct CreateSeasonalRateParams {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub adjustment_type: String,
    pub adjustment_value: Decimal,
    pub priority: i32,
    pub min_stay: Option<i32>,
    pub advance_booking_days: Option<i32>,
    pub room_ids: Vec<i32>,
}

/// Parameters for creating a demand level.
#[derive(Debug, Clone)]
pub struct CreateDemandLevelParams {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub multiplier: Decimal,
    pub priority: i32,
}

/// Parameters for creating a holiday surcharge.
#[derive(Debug, Clone)]
pub struct CreateHolidayParams {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub adjustment_type: String,
    pub adjustment_value: Decimal,
    pub priority: i32,
}

/// Parameters for creating a blackout period.
#[derive(Debug, Clone)]
pub struct CreateBlackoutDateParams {
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub allow_booking: bool,
    pub min_stay: Option<i32>,
    pub max_stay: Option<i32>,
}

/// Parameters for creating a maintenance window for one room.
#[derive(Debug, Clone)]
pub struct CreateMaintenanceWindowParams {
    pub room_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

/// Parameters for creating a group discount tier.
#[derive(Debug, Clone)]
pub struct CreateDiscountTierParams {
    pub label: String,
    pub min_rooms: i32,
    pub max_rooms: Option<i32>,
    pub discount_percentage: Decimal,
}
