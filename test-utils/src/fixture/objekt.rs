//! Objekt entity fixtures.

/// Creates an objekt entity model with default values.
///
/// Defaults: id 1, `Atom01` Nien 301, class First, rarity 1.
pub fn entity() -> entity::objekt::Model {
    entity_builder().build()
}

/// Creates a builder for an objekt entity model.
pub fn entity_builder() -> ObjektEntityBuilder {
    ObjektEntityBuilder {
        id: 1,
        season: "Atom01".to_string(),
        member: "Nien".to_string(),
        series: "301".to_string(),
        class: "First".to_string(),
        rarity: 1,
        image_url: None,
    }
}

/// Builder for in-memory objekt entity models.
pub struct ObjektEntityBuilder {
    id: i32,
    season: String,
    member: String,
    series: String,
    class: String,
    rarity: i32,
    image_url: Option<String>,
}

impl ObjektEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
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

    pub fn rarity(mut self, rarity: i32) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn build(self) -> entity::objekt::Model {
        entity::objekt::Model {
            id: self.id,
            slug: format!("{}-{}-{}", self.season, self.member, self.series).to_lowercase(),
            season: self.season,
            member: self.member,
            series: self.series,
            class: self.class,
            rarity: self.rarity,
            image_url: self.image_url,
            background_color: None,
        }
    }
}
