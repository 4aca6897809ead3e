use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::server::error::pricing::PricingError;

use super::{
    calendar::DateRange,
    rule::{PricingRule, RateAdjustment, RuleSource},
};

/// One rule's contribution to a night's price, kept for auditability.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleApplication {
    pub rule_id: i32,
    pub source: RuleSource,
    pub label: String,
    pub priority: i32,
    pub adjustment: RateAdjustment,
    pub price_before: Decimal,
    pub price_after: Decimal,
}

/// The resolved price for a single night.
#[derive(Debug, Clone, PartialEq)]
pub struct NightlyRate {
    pub date: NaiveDate,
    pub price: Decimal,
    pub applied: Vec<RuleApplication>,
}

/// Stay-level constraints merged across every matching rule.
///
/// Both fields take the maximum across matching rules: a constraint, once
/// imposed by any rule, is never loosened by a lower-priority one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StayRestrictions {
    pub min_stay: Option<u32>,
    pub advance_booking_days: Option<u32>,
}

impl StayRestrictions {
    fn absorb(&mut self, rule: &PricingRule) {
        if let Some(min_stay) = rule.min_stay {
            self.min_stay = Some(self.min_stay.map_or(min_stay, |m| m.max(min_stay)));
        }
        if let Some(days) = rule.advance_booking_days {
            self.advance_booking_days = Some(
                self.advance_booking_days
                    .map_or(days, |d| d.max(days)),
            );
        }
    }
}

/// A fully resolved price for a stay, with per-night audit trail.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub base_price: Decimal,
    pub nights: i64,
    pub nightly: Vec<NightlyRate>,
    pub total: Decimal,
    pub restrictions: StayRestrictions,
}

/// Resolves the price of a stay against every rule that touches it.
///
/// Matching rules (scope includes the room, date span intersects the query)
/// are ordered by `priority` descending; at equal priority the most recently
/// created rule applies first, which is why `rules` must arrive in creation
/// order. Per night, percentage and multiplier adjustments are applied to the
/// running price in that order and fixed amounts are added afterwards, so a
/// +20% rule and a +1000 fixed rule on a 1000 base yield 2200, not 2400. The
/// running price is clamped at zero after every application.
///
/// Different rules may cover different sub-ranges of a multi-night stay, so
/// each night is resolved independently and summed into `total`.
///
/// # Returns
/// - `Ok(PriceQuote)` - Itemized nightly prices, stay total, and merged restrictions
/// - `Err(PricingError::NegativeBasePrice)` - `base_price` below zero
pub fn resolve_price(
    room_id: i32,
    base_price: Decimal,
    range: &DateRange,
    rules: &[PricingRule],
) -> Result<PriceQuote, PricingError> {
    if base_price < Decimal::ZERO {
        return Err(PricingError::NegativeBasePrice(base_price));
    }

    let ordered = matching_rules(room_id, range, rules);

    let mut restrictions = StayRestrictions::default();
    for rule in &ordered {
        restrictions.absorb(rule);
    }

    let mut nightly = Vec::with_capacity(range.nights() as usize);
    let mut total = Decimal::ZERO;
    for date in range.iter_nights() {
        let night = resolve_night(date, base_price, &ordered);
        total += night.price;
        nightly.push(night);
    }

    Ok(PriceQuote {
        base_price,
        nights: range.nights(),
        nightly,
        total,
        restrictions,
    })
}

/// Resolves a single night against rules already filtered and ordered by
/// [`matching_rules`]. Only rules covering `date` contribute.
pub fn resolve_night(date: NaiveDate, base_price: Decimal, ordered: &[&PricingRule]) -> NightlyRate {
    let covering: Vec<&PricingRule> = ordered
        .iter()
        .copied()
        .filter(|r| r.range.contains(date))
        .collect();

    let mut price = base_price;
    let mut applied = Vec::new();

    // Relative adjustments first, in priority order.
    for rule in &covering {
        let next = match rule.adjustment {
            RateAdjustment::Percentage(pct) => price + price * pct / Decimal::ONE_HUNDRED,
            RateAdjustment::Multiplier(factor) => price * factor,
            RateAdjustment::FixedAmount(_) => continue,
        };
        price = record(&mut applied, rule, price, next);
    }

    // Fixed amounts last, also in priority order.
    for rule in &covering {
        let next = match rule.adjustment {
            RateAdjustment::FixedAmount(amount) => price + amount,
            _ => continue,
        };
        price = record(&mut applied, rule, price, next);
    }

    NightlyRate {
        date,
        price: price.round_dp(2),
        applied,
    }
}

/// Filters `rules` to those applying to `room_id` over `range` and orders them
/// for application: priority descending, newest first within equal priority.
pub fn matching_rules<'a>(
    room_id: i32,
    range: &DateRange,
    rules: &'a [PricingRule],
) -> Vec<&'a PricingRule> {
    let mut matching: Vec<&PricingRule> = rules
        .iter()
        .filter(|r| r.scope.includes(room_id) && r.range.intersects(range))
        .collect();
    // Reversing before the stable sort makes insertion order the tie-breaker,
    // newest rule first.
    matching.reverse();
    matching.sort_by(|a, b| b.priority.cmp(&a.priority));
    matching
}

fn record(
    applied: &mut Vec<RuleApplication>,
    rule: &PricingRule,
    before: Decimal,
    after: Decimal,
) -> Decimal {
    let clamped = after.max(Decimal::ZERO);
    applied.push(RuleApplication {
        rule_id: rule.id,
        source: rule.source,
        label: rule.label.clone(),
        priority: rule.priority,
        adjustment: rule.adjustment,
        price_before: before,
        price_after: clamped,
    });
    clamped
}
