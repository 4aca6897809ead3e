use rust_decimal::Decimal;

/// Parameters for creating a room.
#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub name: String,
    pub description: Option<String>,
    pub base_price: Decimal,
    pub max_guests: i32,
}
