pub use sea_orm_migration::prelude::*;

mod m20260620_000001_create_room_table;
mod m20260620_000002_create_booking_table;
mod m20260622_000003_create_seasonal_rate_table;
mod m20260622_000004_create_seasonal_rate_room_table;
mod m20260622_000005_create_demand_level_table;
mod m20260623_000006_create_holiday_table;
mod m20260624_000007_create_blackout_date_table;
mod m20260624_000008_create_maintenance_window_table;
mod m20260626_000009_create_group_discount_tier_table;
mod m20260627_000010_create_cancellation_policy_table;
mod m20260627_000011_create_cancellation_policy_rule_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260620_000001_create_room_table::Migration),
            Box::new(m20260620_000002_create_booking_table::Migration),
            Box::new(m20260622_000003_create_seasonal_rate_table::Migration),
            Box::new(m20260622_000004_create_seasonal_rate_room_table::Migration),
            Box::new(m20260622_000005_create_demand_level_table::Migration),
            Box::new(m20260623_000006_create_holiday_table::Migration),
            Box::new(m20260624_000007_create_blackout_date_table::Migration),
            Box::new(m20260624_000008_create_maintenance_window_table::Migration),
            Box::new(m20260626_000009_create_group_discount_tier_table::Migration),
            Box::new(m20260627_000010_create_cancellation_policy_table::Migration),
            Box::new(m20260627_000011_create_cancellation_policy_rule_table::Migration),
        ]
    }
}
