use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// A seasonal pricing adjustment over a half-open date span.
///
/// `adjustment_type` is one of `percentage`, `fixed_amount`, `multiplier`.
/// Room scope is carried by `seasonal_rate_room` junction rows; a rate with no
/// junction rows applies to every room.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "seasonal_rate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub adjustment_type: String,
    pub adjustment_value: Decimal,
    pub priority: i32,
    pub min_stay: Option<i32>,
    pub advance_booking_days: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::seasonal_rate_room::Entity")]
    SeasonalRateRoom,
}

impl Related<super::seasonal_rate_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeasonalRateRoom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
