use std::path::PathBuf;

use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError, factory::helpers::next_id};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Add entity tables, then call `build()` to create the
/// configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Objekt, Collection};
///
/// let test = TestBuilder::new()
///     .with_table(Objekt)
///     .with_table(Collection)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// SQLite file to use instead of an in-memory database.
    file: Option<PathBuf>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            file: None,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using
    /// SQLite backend syntax. Tables with foreign keys should be added after the
    /// tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table a spin touches.
    ///
    /// Adds, in dependency order:
    /// - Objekt
    /// - Collection
    /// - Pity
    /// - Economy
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_gacha_tables(self) -> Self {
        self.with_table(Objekt)
            .with_table(Collection)
            .with_table(Pity)
            .with_table(Economy)
    }

    /// Uses a fresh SQLite file in the temp directory instead of an in-memory database.
    ///
    /// In-memory SQLite shares one connection, so transactions can never overlap.
    /// A file-backed database gets a pool of `FILE_POOL_SIZE` connections and
    /// exercises real locking between concurrent transactions.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_sqlite_file(mut self) -> Self {
        let name = format!("objekt-gacha-test-{}-{}.db", std::process::id(), next_id());
        self.file = Some(std::env::temp_dir().join(name));
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = match self.file {
            Some(file) => TestContext::with_file(file),
            None => TestContext::new(),
        };

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
