//! Database repository layer for all domain entities.
//!
//! Repositories perform every query, insert, update, and delete through
//! SeaORM. The rate and restriction repositories double as the rule-source
//! adapters: they normalize the independently stored configuration
//! collections into the common rule shapes the pricing core consumes.

pub mod booking;
pub mod discount;
pub mod policy;
pub mod rate_rule;
pub mod restriction;
pub mod room;
