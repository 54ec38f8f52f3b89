//! Como balance repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

/// Balance a user starts with on their first credit.
pub const STARTING_BALANCE: i64 = 100;

pub struct EconomyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EconomyRepository<'a, C> {
    /// Creates a new EconomyRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a user's balance.
    ///
    /// # Returns
    /// - `Ok(balance)` - Stored balance, or `STARTING_BALANCE` for unknown users
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_balance(&self, user_id: u64) -> Result<i64, DbErr> {
        let entity = entity::prelude::Economy::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|e| e.balance).unwrap_or(STARTING_BALANCE))
    }

    /// Adds como to a user's balance, creating the balance row if needed.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `amount` - Como to add (may be negative)
    ///
    /// # Returns
    /// - `Ok(balance)` - Balance after the change
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn add_balance(&self, user_id: u64, amount: i64) -> Result<i64, DbErr> {
        let existing = entity::prelude::Economy::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(entity) => {
                let balance = entity.balance + amount;
                let mut active: entity::economy::ActiveModel = entity.into();
                active.balance = ActiveValue::Set(balance);
                active.update(self.db).await?
            }
            None => {
                entity::economy::ActiveModel {
                    user_id: ActiveValue::Set(user_id.to_string()),
                    balance: ActiveValue::Set(STARTING_BALANCE + amount),
                    created_at: ActiveValue::Set(Utc::now()),
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(entity.balance)
    }
}
