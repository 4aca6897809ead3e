use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::server::error::pricing::PricingError;

use super::calendar::days_until_check_in;

/// One day-threshold tier of a cancellation policy.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyRule {
    pub days_before_check_in: i64,
    pub refund_percentage: Decimal,
    pub deduction_amount: Option<Decimal>,
    pub deduction_percentage: Option<Decimal>,
}

/// A cancellation policy: ordered threshold rules plus a flat processing fee.
#[derive(Debug, Clone, PartialEq)]
pub struct CancellationPolicy {
    pub id: i32,
    pub name: String,
    pub rules: Vec<PolicyRule>,
    pub processing_fee: Decimal,
    pub waive_processing_fee: bool,
}

/// Every stage of a refund computation, itemized.
///
/// This is a user-facing financial figure; the caller must be able to explain
/// each deduction, so no stage is collapsed away.
#[derive(Debug, Clone, PartialEq)]
pub struct RefundBreakdown {
    pub booking_amount: Decimal,
    pub days_until_check_in: i64,
    pub applied_threshold: i64,
    pub refund_percentage: Decimal,
    pub refundable_amount: Decimal,
    pub fixed_deduction: Decimal,
    pub percentage_deduction: Decimal,
    pub processing_fee: Decimal,
    pub final_refund: Decimal,
}

/// Computes the refundable amount for cancelling a booking `now`.
///
/// Days until check-in is the ceiling of the time from `now` to midnight UTC
/// of the check-in date. Rules are evaluated in descending threshold order;
/// the first whose threshold the remaining days meet or exceed wins, and the
/// lowest-threshold rule is the fallback when none match (cancellations past
/// check-in land there too). Deductions and the processing fee (unless the
/// policy waives it) come off the refundable amount, flooring at zero at each
/// stage.
///
/// # Returns
/// - `Ok(RefundBreakdown)` - Itemized refund stages
/// - `Err(PricingError::NegativeBookingAmount)` - Negative booking amount
/// - `Err(PricingError::EmptyPolicy)` - Policy without rules; there is no
///   silent default policy
pub fn calculate_refund(
    booking_amount: Decimal,
    check_in: NaiveDate,
    policy: &CancellationPolicy,
    now: DateTime<Utc>,
) -> Result<RefundBreakdown, PricingError> {
    if booking_amount < Decimal::ZERO {
        return Err(PricingError::NegativeBookingAmount(booking_amount));
    }
    if policy.rules.is_empty() {
        return Err(PricingError::EmptyPolicy);
    }

    let days_until_check_in = days_until_check_in(check_in, now);

    let mut ordered: Vec<&PolicyRule> = policy.rules.iter().collect();
    ordered.sort_by(|a, b| b.days_before_check_in.cmp(&a.days_before_check_in));

    // Fallback is the most lenient (lowest-threshold) rule.
    let rule = ordered
        .iter()
        .copied()
        .find(|r| r.days_before_check_in <= days_until_check_in)
        .unwrap_or(ordered[ordered.len() - 1]);

    let refundable_amount =
        (booking_amount * rule.refund_percentage / Decimal::ONE_HUNDRED).round_dp(2);
    let fixed_deduction = rule.deduction_amount.unwrap_or(Decimal::ZERO);
    let percentage_deduction = rule
        .deduction_percentage
        .map(|pct| (refundable_amount * pct / Decimal::ONE_HUNDRED).round_dp(2))
        .unwrap_or(Decimal::ZERO);

    let after_deductions =
        (refundable_amount - fixed_deduction - percentage_deduction).max(Decimal::ZERO);

    let processing_fee = if policy.waive_processing_fee {
        Decimal::ZERO
    } else {
        policy.processing_fee
    };
    let final_refund = (after_deductions - processing_fee).max(Decimal::ZERO);

    Ok(RefundBreakdown {
        booking_amount,
        days_until_check_in,
        applied_threshold: rule.days_before_check_in,
        refund_percentage: rule.refund_percentage,
        refundable_amount,
        fixed_deduction,
        percentage_deduction,
        processing_fee,
        final_refund,
    })
}
