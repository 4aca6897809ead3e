use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeasonalRate::Table)
                    .if_not_exists()
                    .col(pk_auto(SeasonalRate::Id))
                    .col(string(SeasonalRate::Name))
                    .col(date(SeasonalRate::StartDate))
                    .col(date(SeasonalRate::EndDate))
                    .col(string(SeasonalRate::AdjustmentType))
                    .col(decimal_len(SeasonalRate::AdjustmentValue, 12, 4))
                    .col(integer(SeasonalRate::Priority).default(0))
                    .col(integer_null(SeasonalRate::MinStay))
                    .col(integer_null(SeasonalRate::AdvanceBookingDays))
                    .col(
                        timestamp(SeasonalRate::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeasonalRate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeasonalRate {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    AdjustmentType,
    AdjustmentValue,
    Priority,
    MinStay,
    AdvanceBookingDays,
    CreatedAt,
}
