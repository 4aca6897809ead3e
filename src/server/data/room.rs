use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::room::CreateRoomParams;

pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new room.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created room
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateRoomParams) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            base_price: ActiveValue::Set(params.base_price),
            max_guests: ActiveValue::Set(params.max_guests),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a room by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The room
    /// - `Ok(None)`: Room not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find_by_id(id).one(self.db).await
    }

    /// Lists all active rooms ordered by name.
    pub async fn list_active(&self) -> Result<Vec<entity::room::Model>, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::Active.eq(true))
            .order_by_asc(entity::room::Column::Name)
            .all(self.db)
            .await
    }

    /// Marks a room inactive so it no longer appears in listings or quotes.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated room
    /// - `Ok(None)`: Room not found
    /// - `Err(DbErr)`: Database error
    pub async fn deactivate(&self, id: i32) -> Result<Option<entity::room::Model>, DbErr> {
        let Some(room) = entity::prelude::Room::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::room::ActiveModel = room.into();
        active.active = ActiveValue::Set(false);
        Ok(Some(active.update(self.db).await?))
    }
}
