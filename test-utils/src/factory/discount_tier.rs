//! Group discount tier factory.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a discount tier band.
pub async fn create_tier(
    db: &DatabaseConnection,
    min_rooms: i32,
    max_rooms: Option<i32>,
    discount_percentage: Decimal,
) -> Result<entity::group_discount_tier::Model, DbErr> {
    entity::group_discount_tier::ActiveModel {
        label: ActiveValue::Set(format!("Tier {}", next_id())),
        min_rooms: ActiveValue::Set(min_rooms),
        max_rooms: ActiveValue::Set(max_rooms),
        discount_percentage: ActiveValue::Set(discount_percentage),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
