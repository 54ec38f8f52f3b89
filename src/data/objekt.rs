//! Catalog repository.
//!
//! Provides `ObjektRepository` for seeding the catalog and for the pool queries a
//! draw needs: ids by rarity, ids by rarity within a season, and the high-tier
//! objekts a user does not own yet.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait,
};

use crate::model::objekt::{CreateObjektParam, Objekt};

/// Repository providing catalog queries.
pub struct ObjektRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ObjektRepository<'a, C> {
    /// Creates a new ObjektRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a catalog entry or updates the entry with the same slug.
    ///
    /// # Arguments
    /// - `param` - Catalog entry; its slug is derived from season, member and series
    ///
    /// # Returns
    /// - `Ok(Objekt)` - The stored objekt
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: CreateObjektParam) -> Result<Objekt, DbErr> {
        let slug = param.slug();

        let entity = entity::prelude::Objekt::insert(entity::objekt::ActiveModel {
            slug: ActiveValue::Set(slug),
            season: ActiveValue::Set(param.season),
            member: ActiveValue::Set(param.member),
            series: ActiveValue::Set(param.series),
            class: ActiveValue::Set(param.class),
            rarity: ActiveValue::Set(param.rarity),
            image_url: ActiveValue::Set(param.image_url),
            background_color: ActiveValue::Set(param.background_color),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::objekt::Column::Slug)
                .update_columns([
                    entity::objekt::Column::Season,
                    entity::objekt::Column::Member,
                    entity::objekt::Column::Series,
                    entity::objekt::Column::Class,
                    entity::objekt::Column::Rarity,
                    entity::objekt::Column::ImageUrl,
                    entity::objekt::Column::BackgroundColor,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Objekt::from_entity(entity))
    }

    /// Finds an objekt by id.
    ///
    /// # Returns
    /// - `Ok(Some(Objekt))` - Objekt found
    /// - `Ok(None)` - No objekt with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Objekt>, DbErr> {
        let entity = entity::prelude::Objekt::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Objekt::from_entity))
    }

    /// Finds an objekt by its slug.
    ///
    /// # Arguments
    /// - `slug` - Lower-case `{season}-{member}-{series}` slug
    ///
    /// # Returns
    /// - `Ok(Some(Objekt))` - Objekt found
    /// - `Ok(None)` - Slug is not in the catalog
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Objekt>, DbErr> {
        let entity = entity::prelude::Objekt::find()
            .filter(entity::objekt::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Objekt::from_entity))
    }

    /// Gets the ids of every objekt at a rarity, across all seasons.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Ids ordered ascending (empty when nothing is seeded)
    /// - `Err(DbErr)` - Database error during query
    pub async fn ids_by_rarity(&self, rarity: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Objekt::find()
            .select_only()
            .column(entity::objekt::Column::Id)
            .filter(entity::objekt::Column::Rarity.eq(rarity))
            .order_by_asc(entity::objekt::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets the ids of every objekt at a rarity within one season.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Ids ordered ascending (empty when nothing is seeded)
    /// - `Err(DbErr)` - Database error during query
    pub async fn ids_by_rarity_and_season(
        &self,
        rarity: i32,
        season: &str,
    ) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Objekt::find()
            .select_only()
            .column(entity::objekt::Column::Id)
            .filter(entity::objekt::Column::Rarity.eq(rarity))
            .filter(entity::objekt::Column::Season.eq(season))
            .order_by_asc(entity::objekt::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets the ids of objekts at or above a rarity that a user does not own.
    ///
    /// Used by general pity to pick its guaranteed objekt. Objekts whose collection
    /// row was removed (traded or sold away) count as unowned again.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `min_rarity` - Lowest qualifying rarity tier
    /// - `season` - Restrict to one season when a banner is active
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Ids ordered ascending (empty when the user owns them all)
    /// - `Err(DbErr)` - Database error during query
    pub async fn unowned_ids_min_rarity(
        &self,
        user_id: u64,
        min_rarity: i32,
        season: Option<&str>,
    ) -> Result<Vec<i32>, DbErr> {
        let owned = entity::prelude::Collection::find()
            .select_only()
            .column(entity::collection::Column::ObjektId)
            .filter(entity::collection::Column::UserId.eq(user_id.to_string()))
            .into_query();

        let mut query = entity::prelude::Objekt::find()
            .select_only()
            .column(entity::objekt::Column::Id)
            .filter(entity::objekt::Column::Rarity.gte(min_rarity))
            .filter(entity::objekt::Column::Id.not_in_subquery(owned));

        if let Some(season) = season {
            query = query.filter(entity::objekt::Column::Season.eq(season));
        }

        query
            .order_by_asc(entity::objekt::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Counts catalog entries.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Objekt::find().count(self.db).await
    }
}
