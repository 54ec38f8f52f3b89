use std::path::Path;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config, error::AppError, model::objekt::CreateObjektParam,
    service::objekt::ObjektService,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the catalog, collection, pity and
/// economy tables exist before any spin is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds the catalog from a JSON array of entries.
///
/// # Arguments
/// - `db` - Database connection
/// - `path` - Seed file; each element deserializes into `CreateObjektParam`
///
/// # Returns
/// - `Ok(count)` - Number of entries inserted or updated
/// - `Err(AppError::IoErr)` - File could not be read
/// - `Err(AppError::JsonErr)` - File is not a valid catalog
/// - `Err(AppError::DbErr)` - Database failure; nothing was written
pub async fn seed_catalog(db: &DatabaseConnection, path: &Path) -> Result<usize, AppError> {
    let contents = tokio::fs::read_to_string(path).await?;
    let entries: Vec<CreateObjektParam> = serde_json::from_str(&contents)?;

    tracing::info!(path = %path.display(), entries = entries.len(), "Seeding catalog");

    ObjektService::new(db).seed(entries).await
}
