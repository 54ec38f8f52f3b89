//! Catalog maintenance.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{data::objekt::ObjektRepository, error::AppError, model::objekt::CreateObjektParam};

pub struct ObjektService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ObjektService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or updates catalog entries by slug in a single transaction.
    ///
    /// # Arguments
    /// - `entries` - Catalog entries, typically read from a seed file
    ///
    /// # Returns
    /// - `Ok(count)` - Number of entries written
    /// - `Err(AppError::DbErr)` - Database failure; no entry was written
    pub async fn seed(&self, entries: Vec<CreateObjektParam>) -> Result<usize, AppError> {
        let txn = self.db.begin().await?;
        let repo = ObjektRepository::new(&txn);

        let mut count = 0;
        for entry in entries {
            repo.upsert(entry).await?;
            count += 1;
        }

        txn.commit().await?;

        tracing::info!(count, "Catalog seeded");

        Ok(count)
    }

    /// Counts catalog entries.
    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(ObjektRepository::new(self.db).count().await?)
    }
}
