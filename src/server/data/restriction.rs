use std::collections::BTreeSet;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::{
    model::rates::{CreateBlackoutDateParams, CreateMaintenanceWindowParams},
    pricing::{
        calendar::DateRange,
        rule::{Restriction, RoomScope},
    },
};

/// Repository over the restriction collections: blackout dates and
/// maintenance windows.
///
/// `list_restrictions` is the adapter half: it normalizes both collections
/// into the common [`Restriction`] shape for the availability evaluator.
pub struct RestrictionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestrictionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a blackout period.
    pub async fn create_blackout(
        &self,
        params: CreateBlackoutDateParams,
    ) -> Result<entity::blackout_date::Model, DbErr> {
        entity::blackout_date::ActiveModel {
            reason: ActiveValue::Set(params.reason),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            allow_booking: ActiveValue::Set(params.allow_booking),
            min_stay: ActiveValue::Set(params.min_stay),
            max_stay: ActiveValue::Set(params.max_stay),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Creates a maintenance window for a room.
    pub async fn create_maintenance(
        &self,
        params: CreateMaintenanceWindowParams,
    ) -> Result<entity::maintenance_window::Model, DbErr> {
        entity::maintenance_window::ActiveModel {
            room_id: ActiveValue::Set(params.room_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            reason: ActiveValue::Set(params.reason),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists blackout periods, oldest first.
    pub async fn list_blackouts(&self) -> Result<Vec<entity::blackout_date::Model>, DbErr> {
        entity::prelude::BlackoutDate::find()
            .order_by_asc(entity::blackout_date::Column::CreatedAt)
            .order_by_asc(entity::blackout_date::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists maintenance windows, oldest first.
    pub async fn list_maintenance(
        &self,
    ) -> Result<Vec<entity::maintenance_window::Model>, DbErr> {
        entity::prelude::MaintenanceWindow::find()
            .order_by_asc(entity::maintenance_window::Column::CreatedAt)
            .order_by_asc(entity::maintenance_window::Column::Id)
            .all(self.db)
            .await
    }

    /// Normalizes blackout dates and maintenance windows into
    /// [`Restriction`] values for spans ending after `as_of`.
    ///
    /// Restrictions fail closed: a row with an inverted date span still
    /// vetoes its start night rather than being dropped, and maintenance
    /// windows always forbid booking outright.
    pub async fn list_restrictions(&self, as_of: NaiveDate) -> Result<Vec<Restriction>, DbErr> {
        let mut restrictions = Vec::new();

        for blackout in self.list_blackouts().await? {
            if blackout.end_date <= as_of {
                continue;
            }
            let Some(range) = span_or_start_night(blackout.start_date, blackout.end_date) else {
                continue;
            };
            restrictions.push(Restriction {
                scope: RoomScope::All,
                range,
                allow_booking: blackout.allow_booking,
                min_stay: blackout.min_stay.and_then(|v| u32::try_from(v).ok()),
                max_stay: blackout.max_stay.and_then(|v| u32::try_from(v).ok()),
                reason: blackout.reason,
            });
        }

        for window in self.list_maintenance().await? {
            if window.end_date <= as_of {
                continue;
            }
            let Some(range) = span_or_start_night(window.start_date, window.end_date) else {
                continue;
            };
            restrictions.push(Restriction {
                scope: RoomScope::Rooms(BTreeSet::from([window.room_id])),
                range,
                allow_booking: false,
                min_stay: None,
                max_stay: None,
                reason: window.reason,
            });
        }

        Ok(restrictions)
    }
}

/// Builds the stored span; an inverted span degrades to the single start
/// night so a corrupt restriction row still blocks something.
fn span_or_start_night(start: NaiveDate, end: NaiveDate) -> Option<DateRange> {
    DateRange::new(start, end).ok().or_else(|| {
        tracing::warn!(%start, %end, "restriction span inverted, blocking start night only");
        let next = start.succ_opt()?;
        DateRange::new(start, next).ok()
    })
}
