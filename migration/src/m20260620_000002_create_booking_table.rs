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
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::RoomId))
                    .col(string(Booking::GuestName))
                    .col(string_null(Booking::GuestContact))
                    .col(date(Booking::CheckIn))
                    .col(date(Booking::CheckOut))
                    .col(string(Booking::Status))
                    .col(decimal_len(Booking::TotalAmount, 12, 2))
                    .col(
                        timestamp(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_room_id")
                            .from(Booking::Table, Booking::RoomId)
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
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    RoomId,
    GuestName,
    GuestContact,
    CheckIn,
    CheckOut,
    Status,
    TotalAmount,
    CreatedAt,
}
