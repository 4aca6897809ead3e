use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CancellationPolicy::Table)
                    .if_not_exists()
                    .col(pk_auto(CancellationPolicy::Id))
                    .col(string(CancellationPolicy::Name))
                    .col(decimal_len(CancellationPolicy::ProcessingFee, 12, 2).default(0))
                    .col(boolean(CancellationPolicy::WaiveProcessingFee).default(false))
                    .col(
                        timestamp(CancellationPolicy::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CancellationPolicy::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CancellationPolicy {
    Table,
    Id,
    Name,
    ProcessingFee,
    WaiveProcessingFee,
    CreatedAt,
}
