//! Inventory repository.
//!
//! `CollectionRepository` keeps one row per (user, objekt) with a positive copy
//! count. Granting creates or increments the row, revoking decrements it and
//! deletes it at zero.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct CollectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CollectionRepository<'a, C> {
    /// Creates a new CollectionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets how many copies of an objekt a user owns.
    ///
    /// # Returns
    /// - `Ok(copies)` - Copy count, 0 when the user has none
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_copies(&self, user_id: u64, objekt_id: i32) -> Result<i32, DbErr> {
        Ok(self
            .find(user_id, objekt_id)
            .await?
            .map(|entry| entry.copies)
            .unwrap_or(0))
    }

    /// Adds one copy of an objekt to a user's collection.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `objekt_id` - Catalog id of the objekt
    ///
    /// # Returns
    /// - `Ok(copies)` - Copy count after the grant
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn grant(&self, user_id: u64, objekt_id: i32) -> Result<i32, DbErr> {
        match self.find(user_id, objekt_id).await? {
            Some(entry) => {
                let copies = entry.copies + 1;
                let mut active: entity::collection::ActiveModel = entry.into();
                active.copies = ActiveValue::Set(copies);

                Ok(active.update(self.db).await?.copies)
            }
            None => {
                let entry = entity::collection::ActiveModel {
                    user_id: ActiveValue::Set(user_id.to_string()),
                    objekt_id: ActiveValue::Set(objekt_id),
                    copies: ActiveValue::Set(1),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;

                Ok(entry.copies)
            }
        }
    }

    /// Removes one copy of an objekt from a user's collection.
    ///
    /// Deletes the row when the last copy is removed.
    ///
    /// # Returns
    /// - `Ok(Some(copies))` - Copies left after removal (0 when the row was deleted)
    /// - `Ok(None)` - The user did not own the objekt
    /// - `Err(DbErr)` - Database error during update or delete
    pub async fn revoke(&self, user_id: u64, objekt_id: i32) -> Result<Option<i32>, DbErr> {
        let Some(entry) = self.find(user_id, objekt_id).await? else {
            return Ok(None);
        };

        if entry.copies <= 1 {
            entity::prelude::Collection::delete_by_id(entry.id)
                .exec(self.db)
                .await?;
            return Ok(Some(0));
        }

        let copies = entry.copies - 1;
        let mut active: entity::collection::ActiveModel = entry.into();
        active.copies = ActiveValue::Set(copies);

        Ok(Some(active.update(self.db).await?.copies))
    }

    /// Gets the ids of every objekt a user owns.
    pub async fn owned_objekt_ids(&self, user_id: u64) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Collection::find()
            .select_only()
            .column(entity::collection::Column::ObjektId)
            .filter(entity::collection::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::collection::Column::ObjektId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    async fn find(
        &self,
        user_id: u64,
        objekt_id: i32,
    ) -> Result<Option<entity::collection::Model>, DbErr> {
        entity::prelude::Collection::find()
            .filter(entity::collection::Column::UserId.eq(user_id.to_string()))
            .filter(entity::collection::Column::ObjektId.eq(objekt_id))
            .one(self.db)
            .await
    }
}
