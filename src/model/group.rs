use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::pricing::group::{AppliedTier, GroupQuote, RoomSubtotal};

/// One room line of a group quote request.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GroupRoomRequestDto {
    pub room_id: i32,
    pub quantity: u32,
}

/// Request body for a group quote.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GroupQuoteRequestDto {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub rooms: Vec<GroupRoomRequestDto>,
}

/// Per-room pricing line of a group quote response.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GroupRoomSubtotalDto {
    pub room_id: i32,
    pub quantity: u32,
    pub price_per_stay: Decimal,
    pub subtotal: Decimal,
}

impl From<RoomSubtotal> for GroupRoomSubtotalDto {
    fn from(line: RoomSubtotal) -> Self {
        Self {
            room_id: line.room_id,
            quantity: line.quantity,
            price_per_stay: line.price_per_stay,
            subtotal: line.subtotal,
        }
    }
}

/// The discount tier that applied to a group quote.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AppliedTierDto {
    pub tier_id: i32,
    pub label: String,
    pub discount_percentage: Decimal,
}

impl From<AppliedTier> for AppliedTierDto {
    fn from(tier: AppliedTier) -> Self {
        Self {
            tier_id: tier.tier_id,
            label: tier.label,
            discount_percentage: tier.discount_percentage,
        }
    }
}

/// A fully itemized group quote: subtotal, discount, tax, total, deposit.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GroupQuoteDto {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub total_rooms: u32,
    pub rooms: Vec<GroupRoomSubtotalDto>,
    pub subtotal: Decimal,
    pub discount_tier: Option<AppliedTierDto>,
    pub discount_amount: Decimal,
    pub taxable_amount: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
    pub deposit_amount: Decimal,
}

impl GroupQuoteDto {
    pub fn from_quote(check_in: NaiveDate, check_out: NaiveDate, quote: GroupQuote) -> Self {
        Self {
            check_in,
            check_out,
            nights: quote.nights,
            total_rooms: quote.total_rooms,
            rooms: quote.rooms.into_iter().map(Into::into).collect(),
            subtotal: quote.subtotal,
            discount_tier: quote.tier.map(Into::into),
            discount_amount: quote.discount_amount,
            taxable_amount: quote.taxable_amount,
            tax_amount: quote.tax_amount,
            total: quote.total,
            deposit_amount: quote.deposit_amount,
        }
    }
}
