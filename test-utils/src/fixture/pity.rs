//! Pity entity fixtures.

use chrono::Utc;

/// Creates a zeroed pity entity model for user `"1"`.
pub fn entity() -> entity::pity::Model {
    entity_builder().build()
}

/// Creates a builder for a pity entity model.
pub fn entity_builder() -> PityEntityBuilder {
    PityEntityBuilder {
        user_id: "1".to_string(),
        pity_count: 0,
        chase_objekt_slug: None,
        chase_pity_count: 0,
    }
}

/// Builder for in-memory pity entity models.
pub struct PityEntityBuilder {
    user_id: String,
    pity_count: i32,
    chase_objekt_slug: Option<String>,
    chase_pity_count: i32,
}

impl PityEntityBuilder {
    /// Sets the stored user id; non-numeric values exercise parse failures.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn pity_count(mut self, pity_count: i32) -> Self {
        self.pity_count = pity_count;
        self
    }

    pub fn chase(mut self, slug: impl Into<String>, chase_pity_count: i32) -> Self {
        self.chase_objekt_slug = Some(slug.into());
        self.chase_pity_count = chase_pity_count;
        self
    }

    pub fn build(self) -> entity::pity::Model {
        entity::pity::Model {
            user_id: self.user_id,
            pity_count: self.pity_count,
            chase_objekt_slug: self.chase_objekt_slug,
            chase_pity_count: self.chase_pity_count,
            updated_at: Utc::now(),
        }
    }
}
