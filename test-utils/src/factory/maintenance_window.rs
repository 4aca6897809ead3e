//! Maintenance window factory for creating test closures.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a maintenance window for the given room.
pub async fn create_maintenance_window(
    db: &DatabaseConnection,
    room_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    reason: &str,
) -> Result<entity::maintenance_window::Model, DbErr> {
    entity::maintenance_window::ActiveModel {
        room_id: ActiveValue::Set(room_id),
        start_date: ActiveValue::Set(start_date),
        end_date: ActiveValue::Set(end_date),
        reason: ActiveValue::Set(reason.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
