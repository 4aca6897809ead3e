use chrono::NaiveDate;

/// Parameters for creating a booking.
///
/// The total amount is not a parameter: it is always computed by the price
/// resolver at creation time, never supplied by the caller.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub room_id: i32,
    pub guest_name: String,
    pub guest_contact: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}
