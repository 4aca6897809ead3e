//! Blackout date factory for creating test restrictions.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a hard blackout (booking disallowed) over the given span.
pub async fn create_blackout(
    db: &DatabaseConnection,
    start_date: NaiveDate,
    end_date: NaiveDate,
    reason: &str,
) -> Result<entity::blackout_date::Model, DbErr> {
    entity::blackout_date::ActiveModel {
        reason: ActiveValue::Set(reason.to_string()),
        start_date: ActiveValue::Set(start_date),
        end_date: ActiveValue::Set(end_date),
        allow_booking: ActiveValue::Set(false),
        min_stay: ActiveValue::Set(None),
        max_stay: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a soft blackout that allows booking but bounds the stay length.
pub async fn create_stay_bounds(
    db: &DatabaseConnection,
    start_date: NaiveDate,
    end_date: NaiveDate,
    min_stay: Option<i32>,
    max_stay: Option<i32>,
    reason: &str,
) -> Result<entity::blackout_date::Model, DbErr> {
    entity::blackout_date::ActiveModel {
        reason: ActiveValue::Set(reason.to_string()),
        start_date: ActiveValue::Set(start_date),
        end_date: ActiveValue::Set(end_date),
        allow_booking: ActiveValue::Set(true),
        min_stay: ActiveValue::Set(min_stay),
        max_stay: ActiveValue::Set(max_stay),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
