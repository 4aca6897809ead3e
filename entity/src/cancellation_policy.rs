use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// A named cancellation policy with a flat processing fee.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cancellation_policy")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub processing_fee: Decimal,
    pub waive_processing_fee: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cancellation_policy_rule::Entity")]
    CancellationPolicyRule,
}

impl Related<super::cancellation_policy_rule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CancellationPolicyRule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
