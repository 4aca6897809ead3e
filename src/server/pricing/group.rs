use rust_decimal::Decimal;

use crate::server::error::pricing::PricingError;

use super::{
    calendar::DateRange,
    resolver::{resolve_price, StayRestrictions},
    rule::PricingRule,
};

/// VAT applied to the discounted subtotal.
const TAX_RATE_PERCENT: Decimal = Decimal::from_parts(7, 0, 0, false, 0);
/// Deposit collected on the tax-inclusive total at booking time.
const DEPOSIT_RATE_PERCENT: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// One room line of a group booking request.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRoom {
    pub room_id: i32,
    pub quantity: u32,
    pub base_price: Decimal,
}

/// A group-discount band keyed by total room count.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountTier {
    pub id: i32,
    pub label: String,
    pub min_rooms: u32,
    /// `None` means the band is unbounded above.
    pub max_rooms: Option<u32>,
    pub discount_percentage: Decimal,
}

/// The tier that ended up applying to a group quote.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedTier {
    pub tier_id: i32,
    pub label: String,
    pub discount_percentage: Decimal,
}

/// Per-room pricing line of a group quote.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSubtotal {
    pub room_id: i32,
    pub quantity: u32,
    pub price_per_stay: Decimal,
    pub subtotal: Decimal,
    pub restrictions: StayRestrictions,
}

/// A fully itemized group quote. Every intermediate figure is retained so the
/// caller can display the arithmetic, not just the final total.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupQuote {
    pub rooms: Vec<RoomSubtotal>,
    pub total_rooms: u32,
    pub nights: i64,
    pub subtotal: Decimal,
    pub tier: Option<AppliedTier>,
    pub discount_amount: Decimal,
    pub taxable_amount: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
    pub deposit_amount: Decimal,
}

/// Prices a multi-room stay and applies the single matching discount tier.
///
/// Each room is priced through the rule resolver and multiplied by its
/// quantity. The total room count selects at most one tier: the one with the
/// highest `min_rooms` the count satisfies, respecting `max_rooms` bounds.
/// The discount applies to the subtotal only; 7% tax is charged on the
/// discounted amount and the 30% deposit on the tax-inclusive total.
///
/// # Returns
/// - `Ok(GroupQuote)` - Itemized quote
/// - `Err(PricingError::EmptyGroup)` - No rooms requested in total
/// - `Err(PricingError::NegativeBasePrice)` - A room with a negative base price
pub fn calculate_group_price(
    rooms: &[GroupRoom],
    range: &DateRange,
    rules: &[PricingRule],
    tiers: &[DiscountTier],
) -> Result<GroupQuote, PricingError> {
    let total_rooms: u32 = rooms.iter().map(|r| r.quantity).sum();
    if total_rooms == 0 {
        return Err(PricingError::EmptyGroup);
    }

    let mut lines = Vec::with_capacity(rooms.len());
    let mut subtotal = Decimal::ZERO;
    for room in rooms {
        if room.quantity == 0 {
            continue;
        }
        let quote = resolve_price(room.room_id, room.base_price, range, rules)?;
        let line_subtotal = quote.total * Decimal::from(room.quantity);
        subtotal += line_subtotal;
        lines.push(RoomSubtotal {
            room_id: room.room_id,
            quantity: room.quantity,
            price_per_stay: quote.total,
            subtotal: line_subtotal,
            restrictions: quote.restrictions,
        });
    }

    let tier = select_tier(total_rooms, tiers);
    let discount_amount = tier
        .as_ref()
        .map(|t| (subtotal * t.discount_percentage / Decimal::ONE_HUNDRED).round_dp(2))
        .unwrap_or(Decimal::ZERO);

    let taxable_amount = subtotal - discount_amount;
    let tax_amount = (taxable_amount * TAX_RATE_PERCENT / Decimal::ONE_HUNDRED).round_dp(2);
    let total = taxable_amount + tax_amount;
    let deposit_amount = (total * DEPOSIT_RATE_PERCENT / Decimal::ONE_HUNDRED).round_dp(2);

    Ok(GroupQuote {
        rooms: lines,
        total_rooms,
        nights: range.nights(),
        subtotal,
        tier,
        discount_amount,
        taxable_amount,
        tax_amount,
        total,
        deposit_amount,
    })
}

/// Picks the single tier governing `total_rooms`: the highest `min_rooms`
/// band the count satisfies. Tiers never stack.
fn select_tier(total_rooms: u32, tiers: &[DiscountTier]) -> Option<AppliedTier> {
    tiers
        .iter()
        .filter(|t| {
            t.min_rooms <= total_rooms && t.max_rooms.map_or(true, |max| total_rooms <= max)
        })
        .max_by_key(|t| t.min_rooms)
        .map(|t| AppliedTier {
            tier_id: t.id,
            label: t.label.clone(),
            discount_percentage: t.discount_percentage,
        })
}
