use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Holiday::Table)
                    .if_not_exists()
                    .col(pk_auto(Holiday::Id))
                    .col(string(Holiday::Name))
                    .col(date(Holiday::StartDate))
                    .col(date(Holiday::EndDate))
                    .col(string(Holiday::AdjustmentType))
                    .col(decimal_len(Holiday::AdjustmentValue, 12, 4))
                    .col(integer(Holiday::Priority).default(0))
                    .col(
                        timestamp(Holiday::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Holiday::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Holiday {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    AdjustmentType,
    AdjustmentValue,
    Priority,
    CreatedAt,
}
