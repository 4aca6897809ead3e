//! Room factory for creating test room entities.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test rooms with customizable fields.
///
/// Defaults:
/// - name: `"Villa {id}"` where id is auto-incremented
/// - description: `Some("Test villa")`
/// - base_price: `1000`
/// - max_guests: `4`
/// - active: `true`
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    base_price: Decimal,
    max_guests: i32,
    active: bool,
}

impl<'a> RoomFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Villa {}", id),
            description: Some("Test villa".to_string()),
            base_price: Decimal::from(1000),
            max_guests: 4,
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn base_price(mut self, base_price: Decimal) -> Self {
        self.base_price = base_price;
        self
    }

    pub fn max_guests(mut self, max_guests: i32) -> Self {
        self.max_guests = max_guests;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Inserts the room.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            base_price: ActiveValue::Set(self.base_price),
            max_guests: ActiveValue::Set(self.max_guests),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values.
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).build().await
}
