//! SeaORM entity models for the villaboard database schema.
//!
//! One module per table. The `prelude` module re-exports every entity under its
//! PascalCase name for use in queries and test schema setup.

pub mod blackout_date;
pub mod booking;
pub mod cancellation_policy;
pub mod cancellation_policy_rule;
pub mod demand_level;
pub mod group_discount_tier;
pub mod holiday;
pub mod maintenance_window;
pub mod room;
pub mod seasonal_rate;
pub mod seasonal_rate_room;

pub mod prelude;
