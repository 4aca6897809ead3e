use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::quote::QuoteDto,
    server::{
        data::{rate_rule::RateRuleRepository, room::RoomRepository},
        error::AppError,
        pricing::{calendar::DateRange, resolver::resolve_price},
    },
};

pub struct QuoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuoteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Prices a stay for one room against every active pricing rule.
    ///
    /// # Returns
    /// - `Ok(QuoteDto)`: Itemized per-night quote
    /// - `Err(AppError::NotFound)`: Unknown or inactive room
    /// - `Err(AppError::PricingErr)`: Invalid date range
    pub async fn price_quote(
        &self,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<QuoteDto, AppError> {
        let range = DateRange::new(check_in, check_out)?;

        let room = RoomRepository::new(self.db)
            .get_by_id(room_id)
            .await?
            .filter(|r| r.active)
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        let rules = RateRuleRepository::new(self.db)
            .list_active_rules(range.start())
            .await?;

        let quote = resolve_price(room.id, room.base_price, &range, &rules)?;

        Ok(QuoteDto::from_quote(&room, check_in, check_out, quote))
    }
}
