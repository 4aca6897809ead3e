//! The pricing and availability decision core.
//!
//! Everything in this module is a pure, synchronous computation over inputs
//! the caller has already fetched: no database access, no clock reads, no
//! shared state. Services load rules, bookings, and restrictions through the
//! data layer and hand them in; the core folds them into quotes, availability
//! verdicts, and refund breakdowns.
//!
//! - [`calendar`] - The half-open `DateRange` primitive every component
//!   shares for interval math
//! - [`rule`] - Normalized pricing rules and availability restrictions
//! - [`resolver`] - Priority-ordered rule folding into an audited price quote
//! - [`availability`] - Night-by-night occupancy and restriction evaluation
//! - [`group`] - Multi-room aggregation with tiered discounts, tax, deposit
//! - [`refund`] - Cancellation refunds from day-threshold policies

pub mod availability;
pub mod calendar;
pub mod group;
pub mod refund;
pub mod resolver;
pub mod rule;

#[cfg(test)]
mod test;
