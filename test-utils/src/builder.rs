use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Room, Booking};
///
/// let test = TestBuilder::new()
///     .with_table(Room)
///     .with_table(Booking)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated
    /// from entity models and executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order: tables with foreign keys
    /// after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for room and booking operations.
    pub fn with_booking_tables(self) -> Self {
        self.with_table(Room).with_table(Booking)
    }

    /// Adds all tables backing the pricing-rule and restriction collections,
    /// plus the rooms they scope to.
    pub fn with_pricing_tables(self) -> Self {
        self.with_table(Room)
            .with_table(SeasonalRate)
            .with_table(SeasonalRateRoom)
            .with_table(DemandLevel)
            .with_table(Holiday)
            .with_table(BlackoutDate)
            .with_table(MaintenanceWindow)
            .with_table(GroupDiscountTier)
    }

    /// Adds the cancellation policy tables.
    pub fn with_policy_tables(self) -> Self {
        self.with_table(CancellationPolicy)
            .with_table(CancellationPolicyRule)
    }

    /// Builds the test context: connects to a fresh in-memory SQLite
    /// database and creates every configured table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Connected context with tables created
    /// - `Err(TestError::Database)` - Connection or DDL failure
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        let db = context.database().await?;

        for table in &self.tables {
            db.execute(table).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
