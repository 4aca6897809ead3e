use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DemandLevel::Table)
                    .if_not_exists()
                    .col(pk_auto(DemandLevel::Id))
                    .col(string(DemandLevel::Name))
                    .col(date(DemandLevel::StartDate))
                    .col(date(DemandLevel::EndDate))
                    .col(decimal_len(DemandLevel::Multiplier, 8, 4))
                    .col(integer(DemandLevel::Priority).default(0))
                    .col(
                        timestamp(DemandLevel::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DemandLevel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DemandLevel {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    Multiplier,
    Priority,
    CreatedAt,
}
