//! DTOs for the rate, restriction, discount, and policy configuration
//! collections managed through the admin API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateSeasonalRateDto {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// One of `percentage`, `fixed_amount`, `multiplier`.
    pub adjustment_type: String,
    pub adjustment_value: Decimal,
    #[serde(default)]
    pub priority: i32,
    pub min_stay: Option<i32>,
    pub advance_booking_days: Option<i32>,
    /// Room IDs the rate is limited to; empty means all rooms.
    #[serde(default)]
    pub room_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SeasonalRateDto {
    pub id: i32,
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

impl SeasonalRateDto {
    pub fn from_entity(rate: entity::seasonal_rate::Model, room_ids: Vec<i32>) -> Self {
        Self {
            id: rate.id,
            name: rate.name,
            start_date: rate.start_date,
            end_date: rate.end_date,
            adjustment_type: rate.adjustment_type,
            adjustment_value: rate.adjustment_value,
            priority: rate.priority,
            min_stay: rate.min_stay,
            advance_booking_days: rate.advance_booking_days,
            room_ids,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateDemandLevelDto {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub multiplier: Decimal,
    #[serde(default)]
    pub priority: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DemandLevelDto {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub multiplier: Decimal,
    pub priority: i32,
}

impl From<entity::demand_level::Model> for DemandLevelDto {
    fn from(level: entity::demand_level::Model) -> Self {
        Self {
            id: level.id,
            name: level.name,
            start_date: level.start_date,
            end_date: level.end_date,
            multiplier: level.multiplier,
            priority: level.priority,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateHolidayDto {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// One of `percentage`, `fixed_amount`, `multiplier`.
    pub adjustment_type: String,
    pub adjustment_value: Decimal,
    #[serde(default)]
    pub priority: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HolidayDto {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub adjustment_type: String,
    pub adjustment_value: Decimal,
    pub priority: i32,
}

impl From<entity::holiday::Model> for HolidayDto {
    fn from(holiday: entity::holiday::Model) -> Self {
        Self {
            id: holiday.id,
            name: holiday.name,
            start_date: holiday.start_date,
            end_date: holiday.end_date,
            adjustment_type: holiday.adjustment_type,
            adjustment_value: holiday.adjustment_value,
            priority: holiday.priority,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBlackoutDateDto {
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// False vetoes the span outright; true only applies the stay bounds.
    #[serde(default)]
    pub allow_booking: bool,
    pub min_stay: Option<i32>,
    pub max_stay: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BlackoutDateDto {
    pub id: i32,
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub allow_booking: bool,
    pub min_stay: Option<i32>,
    pub max_stay: Option<i32>,
}

impl From<entity::blackout_date::Model> for BlackoutDateDto {
    fn from(blackout: entity::blackout_date::Model) -> Self {
        Self {
            id: blackout.id,
            reason: blackout.reason,
            start_date: blackout.start_date,
            end_date: blackout.end_date,
            allow_booking: blackout.allow_booking,
            min_stay: blackout.min_stay,
            max_stay: blackout.max_stay,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMaintenanceWindowDto {
    pub room_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MaintenanceWindowDto {
    pub id: i32,
    pub room_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

impl From<entity::maintenance_window::Model> for MaintenanceWindowDto {
    fn from(window: entity::maintenance_window::Model) -> Self {
        Self {
            id: window.id,
            room_id: window.room_id,
            start_date: window.start_date,
            end_date: window.end_date,
            reason: window.reason,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateDiscountTierDto {
    pub label: String,
    pub min_rooms: i32,
    pub max_rooms: Option<i32>,
    pub discount_percentage: Decimal,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DiscountTierDto {
    pub id: i32,
    pub label: String,
    pub min_rooms: i32,
    pub max_rooms: Option<i32>,
    pub discount_percentage: Decimal,
}

impl From<entity::group_discount_tier::Model> for DiscountTierDto {
    fn from(tier: entity::group_discount_tier::Model) -> Self {
        Self {
            id: tier.id,
            label: tier.label,
            min_rooms: tier.min_rooms,
            max_rooms: tier.max_rooms,
            discount_percentage: tier.discount_percentage,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PolicyRuleDto {
    pub days_before_check_in: i32,
    pub refund_percentage: Decimal,
    pub deduction_amount: Option<Decimal>,
    pub deduction_percentage: Option<Decimal>,
}

impl From<entity::cancellation_policy_rule::Model> for PolicyRuleDto {
    fn from(rule: entity::cancellation_policy_rule::Model) -> Self {
        Self {
            days_before_check_in: rule.days_before_check_in,
            refund_percentage: rule.refund_percentage,
            deduction_amount: rule.deduction_amount,
            deduction_percentage: rule.deduction_percentage,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePolicyDto {
    pub name: String,
    #[serde(default)]
    pub processing_fee: Decimal,
    #[serde(default)]
    pub waive_processing_fee: bool,
    pub rules: Vec<PolicyRuleDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PolicyDto {
    pub id: i32,
    pub name: String,
    pub processing_fee: Decimal,
    pub waive_processing_fee: bool,
    pub rules: Vec<PolicyRuleDto>,
}

impl PolicyDto {
    pub fn from_entity(
        policy: entity::cancellation_policy::Model,
        rules: Vec<entity::cancellation_policy_rule::Model>,
    ) -> Self {
        Self {
            id: policy.id,
            name: policy.name,
            processing_fee: policy.processing_fee,
            waive_processing_fee: policy.waive_processing_fee,
            rules: rules.into_iter().map(Into::into).collect(),
        }
    }
}
