//! Collection factory for giving test users objekts.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a collection row owning `copies` of an objekt.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord ID of the owner
/// - `objekt_id` - Catalog id of the objekt
/// - `copies` - Number of copies owned
///
/// # Returns
/// - `Ok(entity::collection::Model)` - Created collection row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_collection_entry(
    db: &DatabaseConnection,
    user_id: u64,
    objekt_id: i32,
    copies: i32,
) -> Result<entity::collection::Model, DbErr> {
    entity::collection::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        objekt_id: ActiveValue::Set(objekt_id),
        copies: ActiveValue::Set(copies),
        ..Default::default()
    }
    .insert(db)
    .await
}
