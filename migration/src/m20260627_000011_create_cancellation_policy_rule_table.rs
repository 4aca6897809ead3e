use sea_orm_migration::{prelude::*, schema::*};

use super::m20260627_000010_create_cancellation_policy_table::CancellationPolicy;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CancellationPolicyRule::Table)
                    .if_not_exists()
                    .col(pk_auto(CancellationPolicyRule::Id))
                    .col(integer(CancellationPolicyRule::PolicyId))
                    .col(integer(CancellationPolicyRule::DaysBeforeCheckIn))
                    .col(decimal_len(CancellationPolicyRule::RefundPercentage, 5, 2))
                    .col(decimal_len_null(
                        CancellationPolicyRule::DeductionAmount,
                        12,
                        2,
                    ))
                    .col(decimal_len_null(
                        CancellationPolicyRule::DeductionPercentage,
                        5,
                        2,
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cancellation_policy_rule_policy_id")
                            .from(
                                CancellationPolicyRule::Table,
                                CancellationPolicyRule::PolicyId,
                            )
                            .to(CancellationPolicy::Table, CancellationPolicy::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CancellationPolicyRule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CancellationPolicyRule {
    Table,
    Id,
    PolicyId,
    DaysBeforeCheckIn,
    RefundPercentage,
    DeductionAmount,
    DeductionPercentage,
}
