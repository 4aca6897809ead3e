use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// One day-threshold tier of a cancellation policy.
///
/// The tier applies when the cancellation happens at least
/// `days_before_check_in` days before check-in.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cancellation_policy_rule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub policy_id: i32,
    pub days_before_check_in: i32,
    pub refund_percentage: Decimal,
    pub deduction_amount: Option<Decimal>,
    pub deduction_percentage: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cancellation_policy::Entity",
        from = "Column::PolicyId",
        to = "super::cancellation_policy::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CancellationPolicy,
}

impl Related<super::cancellation_policy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CancellationPolicy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
