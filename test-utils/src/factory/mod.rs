//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with either a `Factory` struct for
//! customization, a `create_*` convenience function for quick default
//! creation, or both. Factories insert rows and handle foreign-key
//! dependencies so tests stay concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let room = factory::room::create_room(&db).await?;
//!
//!     // Customize through the builder
//!     let booking = factory::booking::BookingFactory::new(&db, room.id)
//!         .nights(date(2026, 1, 10), 3)
//!         .status("confirmed")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod blackout_date;
pub mod booking;
pub mod cancellation_policy;
pub mod demand_level;
pub mod discount_tier;
pub mod helpers;
pub mod holiday;
pub mod maintenance_window;
pub mod room;
pub mod seasonal_rate;

// Re-export commonly used factory functions for concise usage
pub use blackout_date::create_blackout;
pub use booking::create_booking;
pub use cancellation_policy::create_policy;
pub use demand_level::create_demand_level;
pub use discount_tier::create_tier;
pub use holiday::create_holiday;
pub use maintenance_window::create_maintenance_window;
pub use room::create_room;
pub use seasonal_rate::create_seasonal_rate;
