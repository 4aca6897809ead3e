use sea_orm_migration::{prelude::*, schema::*};

use super::m20260620_000001_create_room_table::Room;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceWindow::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceWindow::Id))
                    .col(integer(MaintenanceWindow::RoomId))
                    .col(date(MaintenanceWindow::StartDate))
                    .col(date(MaintenanceWindow::EndDate))
                    .col(string(MaintenanceWindow::Reason))
                    .col(
                        timestamp(MaintenanceWindow::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_window_room_id")
                            .from(MaintenanceWindow::Table, MaintenanceWindow::RoomId)
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
            .drop_table(Table::drop().table(MaintenanceWindow::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MaintenanceWindow {
    Table,
    Id,
    RoomId,
    StartDate,
    EndDate,
    Reason,
    CreatedAt,
}
