//! Draw orchestration.
//!
//! One spin is one transaction: the pity row is loaded with an exclusive lock,
//! the engine picks the objekt, and the grant, como reward and pity update are
//! committed together. Any failure rolls the whole spin back.
//!
//! The first statement of every spin writes the pity row, so on SQLite the
//! transaction owns the write lock before it reads anything and concurrent spins
//! wait on the busy timeout rather than failing with `database is locked`.

use rand::{rngs::StdRng, Rng, SeedableRng};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::{
        collection::CollectionRepository, economy::EconomyRepository, objekt::ObjektRepository,
        pity::PityRepository,
    },
    error::{gacha::GachaError, AppError},
    gacha::{pity::PityStep, resolver::CandidatePool, Gacha},
    model::{
        banner::Banner,
        spin::{GrantSource, SpinResult},
    },
};

pub struct SpinService<'a> {
    db: &'a DatabaseConnection,
    gacha: &'a Gacha,
}

impl<'a> SpinService<'a> {
    /// Creates a new SpinService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `gacha` - Validated draw engine
    pub fn new(db: &'a DatabaseConnection, gacha: &'a Gacha) -> Self {
        Self { db, gacha }
    }

    /// Draws one objekt for a user.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user spinning
    /// - `banner` - Banner to spin on, `None` for the whole catalog
    ///
    /// # Returns
    /// - `Ok(SpinResult)` - Committed grant with updated pity and balance
    /// - `Err(AppError::GachaErr(NoCandidates))` - Nothing to draw; nothing was written
    /// - `Err(AppError::DbErr)` - Database or transaction failure; nothing was written
    pub async fn draw(
        &self,
        user_id: u64,
        banner: Option<&Banner>,
    ) -> Result<SpinResult, AppError> {
        let mut rng = StdRng::from_rng(&mut rand::rng());

        self.draw_with_rng(user_id, banner, &mut rng).await
    }

    /// Draws one objekt using the provided random number generator.
    ///
    /// Same as [`SpinService::draw`]; a seeded rng makes the draw reproducible.
    pub async fn draw_with_rng<R: Rng + Send>(
        &self,
        user_id: u64,
        banner: Option<&Banner>,
        rng: &mut R,
    ) -> Result<SpinResult, AppError> {
        let txn = self.db.begin().await?;

        match self.spin(&txn, user_id, banner, rng).await {
            Ok(result) => {
                txn.commit().await?;

                tracing::debug!(
                    user_id,
                    objekt = %result.objekt.slug,
                    rarity = result.objekt.rarity,
                    source = ?result.source,
                    pity_count = result.pity.pity_count,
                    chase_pity_count = result.pity.chase_pity_count,
                    "Spin committed"
                );

                Ok(result)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(user_id, error = %rollback_err, "Spin rollback failed");
                }
                Err(err)
            }
        }
    }

    async fn spin<R: Rng + Send>(
        &self,
        txn: &DatabaseTransaction,
        user_id: u64,
        banner: Option<&Banner>,
        rng: &mut R,
    ) -> Result<SpinResult, AppError> {
        let objekt_repo = ObjektRepository::new(txn);
        let pity_repo = PityRepository::new(txn);

        let mut pity = pity_repo.get_or_create(user_id).await?;

        let selection = self.gacha.selector().select(banner, rng);
        let ids = match selection.season.as_deref() {
            Some(season) => {
                objekt_repo
                    .ids_by_rarity_and_season(selection.tier, season)
                    .await?
            }
            None => objekt_repo.ids_by_rarity(selection.tier).await?,
        };
        let pool = CandidatePool::resolve(&selection, ids)?;

        let chase_objekt_id = match pity.chase_objekt_slug.as_deref() {
            Some(slug) => {
                let id = objekt_repo.find_by_slug(slug).await?.map(|o| o.id);
                if id.is_none() {
                    tracing::warn!(user_id, slug, "Chase target no longer exists, clearing chase");
                }
                id
            }
            None => None,
        };

        let engine = self.gacha.pity();
        let step = engine.step(&mut pity, selection.tier, &pool, chase_objekt_id, rng);

        let (objekt_id, source, pity_taken) = match step {
            PityStep::Chase {
                objekt_id,
                pity_taken,
                forced,
            } => {
                let source = if forced {
                    GrantSource::ChaseForced
                } else {
                    GrantSource::ChaseNatural
                };
                (objekt_id, source, Some(pity_taken))
            }
            PityStep::GuaranteeDue => {
                let thresholds = engine.thresholds();
                let season = banner.map(|b| self.gacha.selector().banner_season(b));
                let unowned = objekt_repo
                    .unowned_ids_min_rarity(user_id, thresholds.guarantee_min_tier, season)
                    .await?;

                match engine.pick_guarantee(&unowned, rng) {
                    Some(id) => (id, GrantSource::Guarantee, Some(thresholds.general_ceiling)),
                    // Everything qualifying is owned; the counter still resets.
                    None => (pool.pick(rng), GrantSource::Natural, None),
                }
            }
            PityStep::Natural => (pool.pick(rng), GrantSource::Natural, None),
        };

        let objekt = objekt_repo
            .find_by_id(objekt_id)
            .await?
            .ok_or(GachaError::ObjektNotFound(objekt_id))?;

        let copies = CollectionRepository::new(txn)
            .grant(user_id, objekt.id)
            .await?;

        let como_reward = self.gacha.config().rewards.for_tier(objekt.rarity);
        let balance = EconomyRepository::new(txn)
            .add_balance(user_id, como_reward)
            .await?;

        pity_repo.save(&pity).await?;

        Ok(SpinResult {
            objekt,
            copies,
            source,
            pity_taken,
            como_reward,
            balance,
            pity,
        })
    }
}
