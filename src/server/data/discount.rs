use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::{model::rates::CreateDiscountTierParams, pricing::group::DiscountTier};

pub struct GroupDiscountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupDiscountRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a group discount tier.
    pub async fn create_tier(
        &self,
        params: CreateDiscountTierParams,
    ) -> Result<entity::group_discount_tier::Model, DbErr> {
        entity::group_discount_tier::ActiveModel {
            label: ActiveValue::Set(params.label),
            min_rooms: ActiveValue::Set(params.min_rooms),
            max_rooms: ActiveValue::Set(params.max_rooms),
            discount_percentage: ActiveValue::Set(params.discount_percentage),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists all tiers ordered by their minimum room count.
    pub async fn list_tier_models(
        &self,
    ) -> Result<Vec<entity::group_discount_tier::Model>, DbErr> {
        entity::prelude::GroupDiscountTier::find()
            .order_by_asc(entity::group_discount_tier::Column::MinRooms)
            .all(self.db)
            .await
    }

    /// Lists tiers normalized for the group aggregator.
    ///
    /// Rows with a non-positive minimum are unusable and skipped; the
    /// aggregator treats a missing tier as "no discount".
    pub async fn list_tiers(&self) -> Result<Vec<DiscountTier>, DbErr> {
        let models = self.list_tier_models().await?;

        Ok(models
            .into_iter()
            .filter_map(|model| {
                let min_rooms = u32::try_from(model.min_rooms).ok().filter(|m| *m > 0)?;
                let max_rooms = match model.max_rooms {
                    Some(max) => Some(u32::try_from(max).ok()?),
                    None => None,
                };
                Some(DiscountTier {
                    id: model.id,
                    label: model.label,
                    min_rooms,
                    max_rooms,
                    discount_percentage: model.discount_percentage,
                })
            })
            .collect())
    }
}
