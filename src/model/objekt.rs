//! Catalog objekt models.

use serde::Deserialize;

/// A catalog objekt.
#[derive(Debug, Clone, PartialEq)]
pub struct Objekt {
    pub id: i32,
    /// Unique identity, `{season}-{member}-{series}` lower-cased.
    pub slug: String,
    pub season: String,
    pub member: String,
    pub series: String,
    pub class: String,
    /// Rarity tier, 1 (Common) to 6 (Ultra Rare), 7 for rate-up exclusives.
    pub rarity: i32,
    pub image_url: Option<String>,
    pub background_color: Option<String>,
}

impl Objekt {
    /// Converts an entity model to an objekt domain model at the repository boundary.
    pub fn from_entity(entity: entity::objekt::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            season: entity.season,
            member: entity.member,
            series: entity.series,
            class: entity.class,
            rarity: entity.rarity,
            image_url: entity.image_url,
            background_color: entity.background_color,
        }
    }

    /// Builds the catalog slug for a season, member and series.
    ///
    /// # Example
    ///
    /// ```
    /// use objekt_gacha::model::objekt::Objekt;
    ///
    /// assert_eq!(Objekt::slug_for("Atom01", "Nien", "301"), "atom01-nien-301");
    /// ```
    pub fn slug_for(season: &str, member: &str, series: &str) -> String {
        format!("{}-{}-{}", season, member, series).to_lowercase()
    }

    /// Short collector name such as `Nien AA201` for season `Atom02`.
    ///
    /// The season prefix is its first letter repeated by its trailing digit.
    pub fn display_name(&self) -> String {
        let letter = self.season.chars().next().unwrap_or_default();
        let repeat = self
            .season
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .unwrap_or(1) as usize;

        format!(
            "{} {}{}",
            self.member,
            letter.to_string().repeat(repeat),
            self.series
        )
    }

    /// Human readable rarity name.
    pub fn rarity_name(&self) -> &'static str {
        rarity_name(self.rarity)
    }
}

/// Maps a rarity tier to its display name.
pub fn rarity_name(tier: i32) -> &'static str {
    match tier {
        1 => "Common",
        2 | 7 => "Uncommon",
        3 => "Rare",
        4 => "Very Rare",
        5 => "Super Rare",
        6 => "Ultra Rare",
        _ => "Unknown",
    }
}

/// Catalog entry as found in a seed file.
///
/// The slug is derived from season, member and series when the entry is written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateObjektParam {
    pub season: String,
    pub member: String,
    pub series: String,
    #[serde(default = "default_class")]
    pub class: String,
    pub rarity: i32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
}

impl CreateObjektParam {
    /// Slug the entry will be stored under.
    pub fn slug(&self) -> String {
        Objekt::slug_for(&self.season, &self.member, &self.series)
    }
}

fn default_class() -> String {
    "First".to_string()
}
