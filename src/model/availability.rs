use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::pricing::availability::AvailabilityResult;

/// One blocked night and why it is blocked.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UnavailableDateDto {
    pub date: NaiveDate,
    pub reason: String,
}

/// Availability verdict for a requested stay, night by night.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AvailabilityDto {
    pub room_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub available: bool,
    /// Every blocked night in calendar order, for rendering a calendar.
    pub unavailable_dates: Vec<UnavailableDateDto>,
    /// Stay-length problems that apply to the request as a whole.
    pub stay_violations: Vec<String>,
}

impl AvailabilityDto {
    pub fn from_result(
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        result: AvailabilityResult,
    ) -> Self {
        Self {
            room_id,
            check_in,
            check_out,
            available: result.available,
            unavailable_dates: result
                .unavailable
                .into_iter()
                .map(|(date, reason)| UnavailableDateDto { date, reason })
                .collect(),
            stay_violations: result.stay_violations,
        }
    }
}
