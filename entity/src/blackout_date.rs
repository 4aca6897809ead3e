use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;

/// A property-wide calendar period during which booking is disallowed or
/// restricted.
///
/// When `allow_booking` is false the period is a hard veto. When true, the
/// optional `min_stay`/`max_stay` bounds still apply to stays touching it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blackout_date")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub allow_booking: bool,
    pub min_stay: Option<i32>,
    pub max_stay: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
