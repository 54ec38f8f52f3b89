//! Pity state repository.
//!
//! Rows are created lazily on a user's first spin or chase change and never
//! deleted. `get_or_create` writes before it reads so two spins inside separate
//! transactions queue on the write lock (SQLite) or the pity row lock (Postgres).

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

use crate::{error::AppError, model::pity::PityState};

pub struct PityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PityRepository<'a, C> {
    /// Creates a new PityRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user's pity state without creating it.
    ///
    /// # Returns
    /// - `Ok(Some(PityState))` - The user has spun or set a chase before
    /// - `Ok(None)` - No pity row exists yet
    /// - `Err(AppError)` - Database error or unparseable stored user id
    pub async fn find_by_user(&self, user_id: u64) -> Result<Option<PityState>, AppError> {
        let entity = entity::prelude::Pity::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        entity.map(PityState::from_entity).transpose()
    }

    /// Loads a user's pity state for update, creating a zeroed row if needed.
    ///
    /// The zeroed row is written with `ON CONFLICT DO NOTHING` before anything is
    /// read, so the calling transaction holds the write lock from its first
    /// statement. SQLite then queues concurrent spins on its busy timeout instead
    /// of failing them, and backends with row locks also take `FOR UPDATE` on the
    /// select. Call inside the transaction that will `save` the state.
    ///
    /// # Returns
    /// - `Ok(PityState)` - Existing or newly created state
    /// - `Err(AppError)` - Database error or unparseable stored user id
    pub async fn get_or_create(&self, user_id: u64) -> Result<PityState, AppError> {
        entity::prelude::Pity::insert(entity::pity::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            pity_count: ActiveValue::Set(0),
            chase_objekt_slug: ActiveValue::Set(None),
            chase_pity_count: ActiveValue::Set(0),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::pity::Column::UserId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        let entity = entity::prelude::Pity::find_by_id(user_id.to_string())
            .lock_exclusive()
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("pity row for user {}", user_id)))?;

        PityState::from_entity(entity)
    }

    /// Persists all counters of a pity state.
    ///
    /// # Returns
    /// - `Ok(())` - State written
    /// - `Err(DbErr::RecordNotUpdated)` - No pity row exists for the user
    /// - `Err(DbErr)` - Database error during update
    pub async fn save(&self, state: &PityState) -> Result<(), DbErr> {
        let result = entity::prelude::Pity::update_many()
            .col_expr(
                entity::pity::Column::PityCount,
                sea_orm::sea_query::Expr::value(state.pity_count),
            )
            .col_expr(
                entity::pity::Column::ChaseObjektSlug,
                sea_orm::sea_query::Expr::value(state.chase_objekt_slug.clone()),
            )
            .col_expr(
                entity::pity::Column::ChasePityCount,
                sea_orm::sea_query::Expr::value(state.chase_pity_count),
            )
            .col_expr(
                entity::pity::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(entity::pity::Column::UserId.eq(state.user_id.to_string()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        Ok(())
    }
}
