use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::pricing::{
    resolver::{NightlyRate, PriceQuote, RuleApplication},
    rule::RateAdjustment,
};

/// One rule's audited contribution to a night's price.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AppliedRuleDto {
    pub rule_id: i32,
    pub source: String,
    pub label: String,
    pub priority: i32,
    pub adjustment_type: String,
    pub adjustment_value: Decimal,
    pub price_before: Decimal,
    pub price_after: Decimal,
}

impl From<RuleApplication> for AppliedRuleDto {
    fn from(applied: RuleApplication) -> Self {
        let (adjustment_type, adjustment_value) = match applied.adjustment {
            RateAdjustment::Percentage(value) => ("percentage", value),
            RateAdjustment::FixedAmount(value) => ("fixed_amount", value),
            RateAdjustment::Multiplier(value) => ("multiplier", value),
        };
        Self {
            rule_id: applied.rule_id,
            source: applied.source.as_str().to_string(),
            label: applied.label,
            priority: applied.priority,
            adjustment_type: adjustment_type.to_string(),
            adjustment_value,
            price_before: applied.price_before,
            price_after: applied.price_after,
        }
    }
}

/// Resolved price of a single night, with the rules that shaped it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NightlyRateDto {
    pub date: NaiveDate,
    pub price: Decimal,
    pub applied_rules: Vec<AppliedRuleDto>,
}

impl From<NightlyRate> for NightlyRateDto {
    fn from(night: NightlyRate) -> Self {
        Self {
            date: night.date,
            price: night.price,
            applied_rules: night.applied.into_iter().map(Into::into).collect(),
        }
    }
}

/// A price quote for one room over a requested stay.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct QuoteDto {
    pub room_id: i32,
    pub room_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub base_price: Decimal,
    pub nightly: Vec<NightlyRateDto>,
    pub total: Decimal,
    /// Strictest minimum stay imposed by any matching rule, if any.
    pub min_stay: Option<u32>,
    /// Strictest advance-booking requirement imposed by any matching rule.
    pub advance_booking_days: Option<u32>,
}

impl QuoteDto {
    pub fn from_quote(
        room: &entity::room::Model,
        check_in: NaiveDate,
        check_out: NaiveDate,
        quote: PriceQuote,
    ) -> Self {
        Self {
            room_id: room.id,
            room_name: room.name.clone(),
            check_in,
            check_out,
            nights: quote.nights,
            base_price: quote.base_price,
            nightly: quote.nightly.into_iter().map(Into::into).collect(),
            total: quote.total,
            min_stay: quote.restrictions.min_stay,
            advance_booking_days: quote.restrictions.advance_booking_days,
        }
    }
}
