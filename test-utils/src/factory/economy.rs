//! Economy factory for preset balances.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a balance row for a user.
///
/// # Returns
/// - `Ok(entity::economy::Model)` - Created balance row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_balance(
    db: &DatabaseConnection,
    user_id: u64,
    balance: i64,
) -> Result<entity::economy::Model, DbErr> {
    entity::economy::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        balance: ActiveValue::Set(balance),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
