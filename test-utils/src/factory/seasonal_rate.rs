//! Seasonal rate factory for creating test pricing rules.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test seasonal rates with customizable fields.
///
/// Defaults:
/// - name: `"Season {id}"` where id is auto-incremented
/// - adjustment: `percentage` of `20`
/// - priority: `5`
/// - no stay constraints, applies to all rooms
pub struct SeasonalRateFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    adjustment_type: String,
    adjustment_value: Decimal,
    priority: i32,
    min_stay: Option<i32>,
    advance_booking_days: Option<i32>,
    room_ids: Vec<i32>,
}

impl<'a> SeasonalRateFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Season {}", id),
            start_date,
            end_date,
            adjustment_type: "percentage".to_string(),
            adjustment_value: Decimal::from(20),
            priority: 5,
            min_stay: None,
            advance_booking_days: None,
            room_ids: Vec::new(),
        }
    }

    pub fn adjustment(mut self, adjustment_type: impl Into<String>, value: Decimal) -> Self {
        self.adjustment_type = adjustment_type.into();
        self.adjustment_value = value;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn min_stay(mut self, min_stay: i32) -> Self {
        self.min_stay = Some(min_stay);
        self
    }

    pub fn advance_booking_days(mut self, days: i32) -> Self {
        self.advance_booking_days = Some(days);
        self
    }

    /// Scopes the rate to the given rooms instead of all rooms.
    pub fn rooms(mut self, room_ids: Vec<i32>) -> Self {
        self.room_ids = room_ids;
        self
    }

    /// Inserts the rate and its room-scope junction rows.
    pub async fn build(self) -> Result<entity::seasonal_rate::Model, DbErr> {
        let rate = entity::seasonal_rate::ActiveModel {
            name: ActiveValue::Set(self.name),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            adjustment_type: ActiveValue::Set(self.adjustment_type),
            adjustment_value: ActiveValue::Set(self.adjustment_value),
            priority: ActiveValue::Set(self.priority),
            min_stay: ActiveValue::Set(self.min_stay),
            advance_booking_days: ActiveValue::Set(self.advance_booking_days),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for room_id in self.room_ids {
            entity::seasonal_rate_room::ActiveModel {
                seasonal_rate_id: ActiveValue::Set(rate.id),
                room_id: ActiveValue::Set(room_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(rate)
    }
}

/// Creates a seasonal rate with default values over the given span.
pub async fn create_seasonal_rate(
    db: &DatabaseConnection,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<entity::seasonal_rate::Model, DbErr> {
    SeasonalRateFactory::new(db, start_date, end_date).build().await
}
