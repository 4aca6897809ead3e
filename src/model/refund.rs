use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::pricing::refund::RefundBreakdown;

/// Every stage of a refund computation, itemized for display.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RefundBreakdownDto {
    pub booking_id: i32,
    pub policy_id: i32,
    pub policy_name: String,
    pub booking_amount: Decimal,
    pub days_until_check_in: i64,
    /// The day threshold of the policy rule that applied.
    pub applied_threshold: i64,
    pub refund_percentage: Decimal,
    pub refundable_amount: Decimal,
    pub fixed_deduction: Decimal,
    pub percentage_deduction: Decimal,
    pub processing_fee: Decimal,
    pub final_refund: Decimal,
}

impl RefundBreakdownDto {
    pub fn from_breakdown(
        booking_id: i32,
        policy_id: i32,
        policy_name: String,
        breakdown: RefundBreakdown,
    ) -> Self {
        Self {
            booking_id,
            policy_id,
            policy_name,
            booking_amount: breakdown.booking_amount,
            days_until_check_in: breakdown.days_until_check_in,
            applied_threshold: breakdown.applied_threshold,
            refund_percentage: breakdown.refund_percentage,
            refundable_amount: breakdown.refundable_amount,
            fixed_deduction: breakdown.fixed_deduction,
            percentage_deduction: breakdown.percentage_deduction,
            processing_fee: breakdown.processing_fee,
            final_refund: breakdown.final_refund,
        }
    }
}
