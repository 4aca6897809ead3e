use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupDiscountTier::Table)
                    .if_not_exists()
                    .col(pk_auto(GroupDiscountTier::Id))
                    .col(string(GroupDiscountTier::Label))
                    .col(integer(GroupDiscountTier::MinRooms))
                    .col(integer_null(GroupDiscountTier::MaxRooms))
                    .col(decimal_len(GroupDiscountTier::DiscountPercentage, 5, 2))
                    .col(
                        timestamp(GroupDiscountTier::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupDiscountTier::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupDiscountTier {
    Table,
    Id,
    Label,
    MinRooms,
    MaxRooms,
    DiscountPercentage,
    CreatedAt,
}
