//! Chase target management.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{objekt::ObjektRepository, pity::PityRepository},
    error::{gacha::GachaError, AppError},
    gacha::Gacha,
    model::{pity::PityState, spin::ChaseChange},
};

pub struct ChaseService<'a> {
    db: &'a DatabaseConnection,
    gacha: &'a Gacha,
}

impl<'a> ChaseService<'a> {
    pub fn new(db: &'a DatabaseConnection, gacha: &'a Gacha) -> Self {
        Self { db, gacha }
    }

    /// Sets the objekt a user is chasing.
    ///
    /// The slug is matched case-insensitively. Setting a target restarts the chase
    /// counter, and also general pity when configured to.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `slug` - `{season}-{member}-{series}` slug of the target
    ///
    /// # Returns
    /// - `Ok(ChaseChange)` - New target, the replaced slug and the saved counters
    /// - `Err(AppError::GachaErr(InvalidChaseTarget))` - Slug not in the catalog; nothing was written
    /// - `Err(AppError::DbErr)` - Database or transaction failure
    pub async fn set_chase(&self, user_id: u64, slug: &str) -> Result<ChaseChange, AppError> {
        let slug = slug.trim().to_lowercase();

        let objekt = ObjektRepository::new(self.db)
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| GachaError::InvalidChaseTarget(slug.clone()))?;

        let txn = self.db.begin().await?;
        let pity_repo = PityRepository::new(&txn);

        let mut pity = pity_repo.get_or_create(user_id).await?;
        let previous_slug = pity.chase_objekt_slug.clone();

        self.gacha.pity().set_chase(&mut pity, objekt.slug.clone());
        pity_repo.save(&pity).await?;

        txn.commit().await?;

        tracing::info!(
            user_id,
            slug = %objekt.slug,
            previous = ?previous_slug,
            "Chase target set"
        );

        Ok(ChaseChange {
            objekt,
            previous_slug,
            pity,
        })
    }

    /// Stops a user's chase.
    ///
    /// # Returns
    /// - `Ok(PityState)` - Counters after clearing (unchanged if nothing was chased)
    /// - `Err(AppError)` - Database failure
    pub async fn clear_chase(&self, user_id: u64) -> Result<PityState, AppError> {
        // Users without a chase never get a pity row written.
        match PityRepository::new(self.db).find_by_user(user_id).await? {
            Some(pity) if pity.is_chasing() => {}
            Some(pity) => return Ok(pity),
            None => return Ok(PityState::new(user_id)),
        }

        let txn = self.db.begin().await?;
        let pity_repo = PityRepository::new(&txn);

        let mut pity = pity_repo.get_or_create(user_id).await?;
        self.gacha.pity().clear_chase(&mut pity);
        pity_repo.save(&pity).await?;

        txn.commit().await?;

        tracing::info!(user_id, "Chase target cleared");

        Ok(pity)
    }

    /// Reads a user's counters without creating a pity row.
    ///
    /// # Returns
    /// - `Ok(PityState)` - Stored counters, zeroes for users who never spun
    /// - `Err(AppError)` - Database failure or corrupt stored user id
    pub async fn status(&self, user_id: u64) -> Result<PityState, AppError> {
        let pity = PityRepository::new(self.db).find_by_user(user_id).await?;

        Ok(pity.unwrap_or_else(|| PityState::new(user_id)))
    }
}
