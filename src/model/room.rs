use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateRoomDto {
    pub name: String,
    pub description: Option<String>,
    pub base_price: Decimal,
    pub max_guests: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub base_price: Decimal,
    pub max_guests: i32,
    pub active: bool,
}

impl From<entity::room::Model> for RoomDto {
    fn from(room: entity::room::Model) -> Self {
        Self {
            id: room.id,
            name: room.name,
            description: room.description,
            base_price: room.base_price,
            max_guests: room.max_guests,
            active: room.active,
        }
    }
}
