//! Demand level factory for creating test multiplier rules.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a demand level with the given multiplier and priority.
pub async fn create_demand_level(
    db: &DatabaseConnection,
    start_date: NaiveDate,
    end_date: NaiveDate,
    multiplier: Decimal,
    priority: i32,
) -> Result<entity::demand_level::Model, DbErr> {
    entity::demand_level::ActiveModel {
        name: ActiveValue::Set(format!("Demand {}", next_id())),
        start_date: ActiveValue::Set(start_date),
        end_date: ActiveValue::Set(end_date),
        multiplier: ActiveValue::Set(multiplier),
        priority: ActiveValue::Set(priority),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
