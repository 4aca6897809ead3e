use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    model::rates::{CreateDemandLevelParams, CreateHolidayParams, CreateSeasonalRateParams},
    pricing::{
        calendar::DateRange,
        rule::{PricingRule, RateAdjustment, RoomScope, RuleSource},
    },
};

/// Repository over the three pricing-rule collections: seasonal rates,
/// demand levels, and holidays.
///
/// Besides plain CRUD it acts as the rule-source adapter: `list_active_rules`
/// normalizes all three collections into the common [`PricingRule`] shape in
/// global creation order, which the resolver relies on for priority
/// tie-breaking.
pub struct RateRuleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RateRuleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a seasonal rate and its room-scope junction rows.
    ///
    /// # Returns
    /// - `Ok((Model, Vec<i32>))`: The created rate and the scoped room IDs
    /// - `Err(DbErr)`: Database error
    pub async fn create_seasonal(
        &self,
        params: CreateSeasonalRateParams,
    ) -> Result<(entity::seasonal_rate::Model, Vec<i32>), DbErr> {
        let rate = entity::seasonal_rate::ActiveModel {
            name: ActiveValue::Set(params.name),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            adjustment_type: ActiveValue::Set(params.adjustment_type),
            adjustment_value: ActiveValue::Set(params.adjustment_value),
            priority: ActiveValue::Set(params.priority),
            min_stay: ActiveValue::Set(params.min_stay),
            advance_booking_days: ActiveValue::Set(params.advance_booking_days),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for room_id in &params.room_ids {
            entity::seasonal_rate_room::ActiveModel {
                seasonal_rate_id: ActiveValue::Set(rate.id),
                room_id: ActiveValue::Set(*room_id),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok((rate, params.room_ids))
    }

    /// Creates a demand level.
    pub async fn create_demand(
        &self,
        params: CreateDemandLevelParams,
    ) -> Result<entity::demand_level::Model, DbErr> {
        entity::demand_level::ActiveModel {
            name: ActiveValue::Set(params.name),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            multiplier: ActiveValue::Set(params.multiplier),
            priority: ActiveValue::Set(params.priority),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Creates a holiday surcharge.
    pub async fn create_holiday(
        &self,
        params: CreateHolidayParams,
    ) -> Result<entity::holiday::Model, DbErr> {
        entity::holiday::ActiveModel {
            name: ActiveValue::Set(params.name),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            adjustment_type: ActiveValue::Set(params.adjustment_type),
            adjustment_value: ActiveValue::Set(params.adjustment_value),
            priority: ActiveValue::Set(params.priority),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists seasonal rates with their scoped room IDs, newest last.
    pub async fn list_seasonal(
        &self,
    ) -> Result<Vec<(entity::seasonal_rate::Model, Vec<i32>)>, DbErr> {
        let rates = entity::prelude::SeasonalRate::find()
            .order_by_asc(entity::seasonal_rate::Column::CreatedAt)
            .order_by_asc(entity::seasonal_rate::Column::Id)
            .all(self.db)
            .await?;
        let scopes = self.seasonal_scopes(&rates).await?;

        Ok(rates
            .into_iter()
            .map(|rate| {
                let rooms = scopes.get(&rate.id).cloned().unwrap_or_default();
                (rate, rooms)
            })
            .collect())
    }

    /// Lists demand levels, newest last.
    pub async fn list_demand(&self) -> Result<Vec<entity::demand_level::Model>, DbErr> {
        entity::prelude::DemandLevel::find()
            .order_by_asc(entity::demand_level::Column::CreatedAt)
            .order_by_asc(entity::demand_level::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists holidays, newest last.
    pub async fn list_holidays(&self) -> Result<Vec<entity::holiday::Model>, DbErr> {
        entity::prelude::Holiday::find()
            .order_by_asc(entity::holiday::Column::CreatedAt)
            .order_by_asc(entity::holiday::Column::Id)
            .all(self.db)
            .await
    }

    /// Normalizes every rule collection into [`PricingRule`] values.
    ///
    /// Only rules whose span ends after `as_of` are returned; anything fully
    /// in the past can no longer affect a quote. The result is ordered by
    /// creation time across all three collections, oldest first, which is the
    /// order the resolver's tie-breaking contract expects.
    ///
    /// Rows that cannot be normalized (unknown adjustment type, inverted date
    /// span) are skipped: a malformed pricing rule means "no rule applies",
    /// never a failed quote.
    pub async fn list_active_rules(&self, as_of: NaiveDate) -> Result<Vec<PricingRule>, DbErr> {
        let mut dated: Vec<(DateTime<Utc>, PricingRule)> = Vec::new();

        for (rate, room_ids) in self.list_seasonal().await? {
            if rate.end_date <= as_of {
                continue;
            }
            let Some(adjustment) =
                RateAdjustment::from_stored(&rate.adjustment_type, rate.adjustment_value)
            else {
                tracing::warn!(
                    seasonal_rate_id = rate.id,
                    adjustment_type = %rate.adjustment_type,
                    "skipping seasonal rate with unknown adjustment type"
                );
                continue;
            };
            let Ok(range) = DateRange::new(rate.start_date, rate.end_date) else {
                tracing::warn!(seasonal_rate_id = rate.id, "skipping inverted seasonal rate");
                continue;
            };
            dated.push((
                rate.created_at,
                PricingRule {
                    id: rate.id,
                    source: RuleSource::Seasonal,
                    label: rate.name,
                    scope: room_scope(room_ids),
                    range,
                    priority: rate.priority,
                    adjustment,
                    min_stay: rate.min_stay.and_then(|v| u32::try_from(v).ok()),
                    advance_booking_days: rate
                        .advance_booking_days
                        .and_then(|v| u32::try_from(v).ok()),
                },
            ));
        }

        for level in self.list_demand().await? {
            if level.end_date <= as_of {
                continue;
            }
            let Ok(range) = DateRange::new(level.start_date, level.end_date) else {
                tracing::warn!(demand_level_id = level.id, "skipping inverted demand level");
                continue;
            };
            dated.push((
                level.created_at,
                PricingRule {
                    id: level.id,
                    source: RuleSource::Demand,
                    label: level.name,
                    scope: RoomScope::All,
                    range,
                    priority: level.priority,
                    adjustment: RateAdjustment::Multiplier(level.multiplier),
                    min_stay: None,
                    advance_booking_days: None,
                },
            ));
        }

        for holiday in self.list_holidays().await? {
            if holiday.end_date <= as_of {
                continue;
            }
            let Some(adjustment) =
                RateAdjustment::from_stored(&holiday.adjustment_type, holiday.adjustment_value)
            else {
                tracing::warn!(
                    holiday_id = holiday.id,
                    adjustment_type = %holiday.adjustment_type,
                    "skipping holiday with unknown adjustment type"
                );
                continue;
            };
            let Ok(range) = DateRange::new(holiday.start_date, holiday.end_date) else {
                tracing::warn!(holiday_id = holiday.id, "skipping inverted holiday");
                continue;
            };
            dated.push((
                holiday.created_at,
                PricingRule {
                    id: holiday.id,
                    source: RuleSource::Holiday,
                    label: holiday.name,
                    scope: RoomScope::All,
                    range,
                    priority: holiday.priority,
                    adjustment,
                    min_stay: None,
                    advance_booking_days: None,
                },
            ));
        }

        // Stable sort: rows from the same collection keep their per-table
        // creation order even when timestamps collide.
        dated.sort_by_key(|(created_at, _)| *created_at);
        Ok(dated.into_iter().map(|(_, rule)| rule).collect())
    }

    async fn seasonal_scopes(
        &self,
        rates: &[entity::seasonal_rate::Model],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        let ids: Vec<i32> = rates.iter().map(|r| r.id).collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::SeasonalRateRoom::find()
            .filter(entity::seasonal_rate_room::Column::SeasonalRateId.is_in(ids))
            .all(self.db)
            .await?;

        let mut scopes: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in rows {
            scopes.entry(row.seasonal_rate_id).or_default().push(row.room_id);
        }
        Ok(scopes)
    }
}

/// An empty room list means the rate applies to every room.
fn room_scope(room_ids: Vec<i32>) -> RoomScope {
    if room_ids.is_empty() {
        RoomScope::All
    } else {
        RoomScope::Rooms(BTreeSet::from_iter(room_ids))
    }
}
