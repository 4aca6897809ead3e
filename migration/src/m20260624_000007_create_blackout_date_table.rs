use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlackoutDate::Table)
                    .if_not_exists()
                    .col(pk_auto(BlackoutDate::Id))
                    .col(string(BlackoutDate::Reason))
                    .col(date(BlackoutDate::StartDate))
                    .col(date(BlackoutDate::EndDate))
                    .col(boolean(BlackoutDate::AllowBooking).default(false))
                    .col(integer_null(BlackoutDate::MinStay))
                    .col(integer_null(BlackoutDate::MaxStay))
                    .col(
                        timestamp(BlackoutDate::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlackoutDate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BlackoutDate {
    Table,
    Id,
    Reason,
    StartDate,
    EndDate,
    AllowBooking,
    MinStay,
    MaxStay,
    CreatedAt,
}
