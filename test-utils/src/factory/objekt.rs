//! Objekt factory for creating test catalog entries.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating catalog objekts with customizable fields.
///
/// The slug is derived the same way the catalog seeder derives it, so tests can
/// chase factory objekts by slug.
///
/// # Example
///
/// ```rust,ignore
/// let objekt = ObjektFactory::new(&db)
///     .season("Atom01")
///     .member("Nien")
///     .series("301")
///     .rarity(5)
///     .build()
///     .await?;
/// ```
pub struct ObjektFactory<'a> {
    db: &'a DatabaseConnection,
    season: String,
    member: String,
    series: String,
    class: String,
    rarity: i32,
}

impl<'a> ObjektFactory<'a> {
    /// Creates a new ObjektFactory with default values.
    ///
    /// Defaults:
    /// - season: `"Atom01"`
    /// - member: `"Member{id}"` where id is auto-incremented
    /// - series: `"100"`
    /// - class: `"First"`
    /// - rarity: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            season: "Atom01".to_string(),
            member: format!("Member{}", id),
            series: "100".to_string(),
            class: "First".to_string(),
            rarity: 1,
        }
    }

    pub fn season(mut self, season: impl Into<String>) -> Self {
        self.season = season.into();
        self
    }

    pub fn member(mut self, member: impl Into<String>) -> Self {
        self.member = member.into();
        self
    }

    pub fn series(mut self, series: impl Into<String>) -> Self {
        self.series = series.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn rarity(mut self, rarity: i32) -> Self {
        self.rarity = rarity;
        self
    }

    /// Builds and inserts the objekt into the database.
    ///
    /// # Returns
    /// - `Ok(entity::objekt::Model)` - Created objekt
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::objekt::Model, DbErr> {
        let slug = format!("{}-{}-{}", self.season, self.member, self.series).to_lowercase();

        entity::objekt::ActiveModel {
            slug: ActiveValue::Set(slug),
            season: ActiveValue::Set(self.season),
            member: ActiveValue::Set(self.member),
            series: ActiveValue::Set(self.series),
            class: ActiveValue::Set(self.class),
            rarity: ActiveValue::Set(self.rarity),
            image_url: ActiveValue::Set(None),
            background_color: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tier 1 objekt in season Atom01.
pub async fn create_objekt(db: &DatabaseConnection) -> Result<entity::objekt::Model, DbErr> {
    ObjektFactory::new(db).build().await
}

/// Creates an objekt of the given rarity in season Atom01.
pub async fn create_objekt_with_rarity(
    db: &DatabaseConnection,
    rarity: i32,
) -> Result<entity::objekt::Model, DbErr> {
    ObjektFactory::new(db).rarity(rarity).build().await
}

/// Creates an objekt of the given rarity in the given season.
pub async fn create_objekt_in_season(
    db: &DatabaseConnection,
    season: &str,
    rarity: i32,
) -> Result<entity::objekt::Model, DbErr> {
    ObjektFactory::new(db)
        .season(season)
        .rarity(rarity)
        .build()
        .await
}
