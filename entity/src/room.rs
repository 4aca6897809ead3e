use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// A bookable villa room with its standard nightly rate.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Standard nightly rate before any pricing rules apply.
    pub base_price: Decimal,
    pub max_guests: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
    #[sea_orm(has_many = "super::maintenance_window::Entity")]
    MaintenanceWindow,
    #[sea_orm(has_many = "super::seasonal_rate_room::Entity")]
    SeasonalRateRoom,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl Related<super::maintenance_window::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceWindow.def()
    }
}

impl Related<super::seasonal_rate_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeasonalRateRoom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
