use std::path::PathBuf;

use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};

use crate::error::TestError;

/// Connections opened against a file-backed test database.
pub const FILE_POOL_SIZE: u32 = 8;

/// Test context containing the database connection.
///
/// By default provides an in-memory SQLite database for isolated tests. A
/// file-backed database with a multi-connection pool can be requested through
/// `TestBuilder::with_sqlite_file` for tests that need real concurrent
/// transactions; the file is deleted when the context is dropped.
pub struct TestContext {
    /// Optional database connection.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,
    /// Backing file, `None` for in-memory databases.
    file: Option<PathBuf>,
}

impl TestContext {
    /// Creates a new empty test context backed by in-memory SQLite.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self {
            db: None,
            file: None,
        }
    }

    /// Creates a new empty test context backed by a SQLite file.
    ///
    /// # Arguments
    /// - `file` - Database file, created on first connection
    pub fn with_file(file: PathBuf) -> Self {
        Self {
            db: None,
            file: Some(file),
        }
    }

    /// Gets or creates the database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to the SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = match &self.file {
                    Some(file) => {
                        let mut opt =
                            ConnectOptions::new(format!("sqlite://{}?mode=rwc", file.display()));
                        opt.max_connections(FILE_POOL_SIZE).sqlx_logging(false);

                        Database::connect(opt).await?
                    }
                    None => Database::connect("sqlite::memory:").await?,
                };

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(file) = &self.file {
            for suffix in ["", "-wal", "-shm", "-journal"] {
                let mut path = file.clone().into_os_string();
                path.push(suffix);
                std::fs::remove_file(path).ok();
            }
        }
    }
}
