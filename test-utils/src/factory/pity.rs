//! Pity factory for seeding counters before a spin.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating pity rows with preset counters.
///
/// # Example
///
/// ```rust,ignore
/// let pity = PityFactory::new(&db, 42)
///     .pity_count(79)
///     .build()
///     .await?;
/// ```
pub struct PityFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: u64,
    pity_count: i32,
    chase_objekt_slug: Option<String>,
    chase_pity_count: i32,
}

impl<'a> PityFactory<'a> {
    /// Creates a new PityFactory with all counters at zero and no chase.
    pub fn new(db: &'a DatabaseConnection, user_id: u64) -> Self {
        Self {
            db,
            user_id,
            pity_count: 0,
            chase_objekt_slug: None,
            chase_pity_count: 0,
        }
    }

    pub fn pity_count(mut self, pity_count: i32) -> Self {
        self.pity_count = pity_count;
        self
    }

    /// Sets an active chase and its progress.
    pub fn chase(mut self, slug: impl Into<String>, chase_pity_count: i32) -> Self {
        self.chase_objekt_slug = Some(slug.into());
        self.chase_pity_count = chase_pity_count;
        self
    }

    /// Builds and inserts the pity row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pity::Model)` - Created pity row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pity::Model, DbErr> {
        entity::pity::ActiveModel {
            user_id: ActiveValue::Set(self.user_id.to_string()),
            pity_count: ActiveValue::Set(self.pity_count),
            chase_objekt_slug: ActiveValue::Set(self.chase_objekt_slug),
            chase_pity_count: ActiveValue::Set(self.chase_pity_count),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a zeroed pity row for a user.
pub async fn create_pity(
    db: &DatabaseConnection,
    user_id: u64,
) -> Result<entity::pity::Model, DbErr> {
    PityFactory::new(db, user_id).build().await
}
