use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260620_000001_create_room_table::Room,
    m20260622_000003_create_seasonal_rate_table::SeasonalRate,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeasonalRateRoom::Table)
                    .if_not_exists()
                    .col(pk_auto(SeasonalRateRoom::Id))
                    .col(integer(SeasonalRateRoom::SeasonalRateId))
                    .col(integer(SeasonalRateRoom::RoomId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seasonal_rate_room_rate_id")
                            .from(SeasonalRateRoom::Table, SeasonalRateRoom::SeasonalRateId)
                            .to(SeasonalRate::Table, SeasonalRate::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seasonal_rate_room_room_id")
                            .from(SeasonalRateRoom::Table, SeasonalRateRoom::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeasonalRateRoom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeasonalRateRoom {
    Table,
    Id,
    SeasonalRateId,
    RoomId,
}
