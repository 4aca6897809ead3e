use sea_orm::DatabaseConnection;

use crate::{
    model::group::{GroupQuoteDto, GroupQuoteRequestDto},
    server::{
        data::{
            discount::GroupDiscountRepository, rate_rule::RateRuleRepository,
            room::RoomRepository,
        },
        error::AppError,
        pricing::{
            calendar::DateRange,
            group::{calculate_group_price, GroupRoom},
        },
    },
};

pub struct GroupQuoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupQuoteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Prices a multi-room stay with the tiered group discount applied.
    ///
    /// Every referenced room must exist and be active; the discount tier is
    /// selected by the repository-loaded bands.
    ///
    /// # Returns
    /// - `Ok(GroupQuoteDto)`: Itemized group quote
    /// - `Err(AppError::NotFound)`: A referenced room is unknown or inactive
    /// - `Err(AppError::PricingErr)`: Invalid range or empty request
    pub async fn quote(&self, request: GroupQuoteRequestDto) -> Result<GroupQuoteDto, AppError> {
        let range = DateRange::new(request.check_in, request.check_out)?;

        let room_repo = RoomRepository::new(self.db);
        let mut rooms = Vec::with_capacity(request.rooms.len());
        for line in &request.rooms {
            let room = room_repo
                .get_by_id(line.room_id)
                .await?
                .filter(|r| r.active)
                .ok_or_else(|| {
                    AppError::NotFound(format!("Room {} not found", line.room_id))
                })?;
            rooms.push(GroupRoom {
                room_id: room.id,
                quantity: line.quantity,
                base_price: room.base_price,
            });
        }

        let rules = RateRuleRepository::new(self.db)
            .list_active_rules(range.start())
            .await?;
        let tiers = GroupDiscountRepository::new(self.db).list_tiers().await?;

        let quote = calculate_group_price(&rooms, &range, &rules, &tiers)?;

        Ok(GroupQuoteDto::from_quote(
            request.check_in,
            request.check_out,
            quote,
        ))
    }
}
