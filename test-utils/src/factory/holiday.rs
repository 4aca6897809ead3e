//! Holiday factory for creating test surcharge rules.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a holiday surcharge with the given adjustment and priority.
pub async fn create_holiday(
    db: &DatabaseConnection,
    start_date: NaiveDate,
    end_date: NaiveDate,
    adjustment_type: &str,
    adjustment_value: Decimal,
    priority: i32,
) -> Result<entity::holiday::Model, DbErr> {
    entity::holiday::ActiveModel {
        name: ActiveValue::Set(format!("Holiday {}", next_id())),
        start_date: ActiveValue::Set(start_date),
        end_date: ActiveValue::Set(end_date),
        adjustment_type: ActiveValue::Set(adjustment_type.to_string()),
        adjustment_value: ActiveValue::Set(adjustment_value),
        priority: ActiveValue::Set(priority),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
