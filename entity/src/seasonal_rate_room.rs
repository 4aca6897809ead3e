use sea_orm::entity::prelude::*;

/// Scopes a seasonal rate to a specific room.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "seasonal_rate_room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub seasonal_rate_id: i32,
    pub room_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seasonal_rate::Entity",
        from = "Column::SeasonalRateId",
        to = "super::seasonal_rate::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SeasonalRate,
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Room,
}

impl Related<super::seasonal_rate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeasonalRate.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
