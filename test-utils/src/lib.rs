//! Villaboard Test Utils
//!
//! Shared testing utilities for building integration and unit tests for the
//! villaboard application. This crate offers a builder pattern for creating
//! test contexts with in-memory SQLite databases and customizable table
//! schemas, plus factories for inserting test rows with sensible defaults.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_room_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_booking_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
