pub use super::blackout_date::Entity as BlackoutDate;
pub use super::booking::Entity as Booking;
pub use super::cancellation_policy::Entity as CancellationPolicy;
pub use super::cancellation_policy_rule::Entity as CancellationPolicyRule;
pub use super::demand_level::Entity as DemandLevel;
pub use super::group_discount_tier::Entity as GroupDiscountTier;
pub use super::holiday::Entity as Holiday;
pub use super::maintenance_window::Entity as MaintenanceWindow;
pub use super::room::Entity as Room;
pub use super::seasonal_rate::Entity as SeasonalRate;
pub use super::seasonal_rate_room::Entity as SeasonalRateRoom;
