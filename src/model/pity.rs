//! Per-user pity counters.

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Pity counters for one user.
///
/// Mutated only by `PityEngine` during a draw or a chase change, and persisted in the
/// same transaction as the grant that caused the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PityState {
    /// Discord ID of the user
    pub user_id: u64,
    /// Consecutive low-tier draws since the last high-tier objekt or guarantee.
    pub pity_count: i32,
    /// Slug of the objekt the user is chasing.
    pub chase_objekt_slug: Option<String>,
    /// Draws spent on the current chase; meaningless without a chase slug.
    pub chase_pity_count: i32,
}

impl PityState {
    /// Fresh counters for a user who has never spun.
    pub fn new(user_id: u64) -> Self {
        Self {
            user_id,
            pity_count: 0,
            chase_objekt_slug: None,
            chase_pity_count: 0,
        }
    }

    /// Whether a chase target is set.
    pub fn is_chasing(&self) -> bool {
        self.chase_objekt_slug.is_some()
    }

    /// Converts an entity model to pity state at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(PityState)` - The converted state
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored user id is not numeric
    pub fn from_entity(entity: entity::pity::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_u64_from_string(entity.user_id)?,
            pity_count: entity.pity_count,
            chase_objekt_slug: entity.chase_objekt_slug,
            chase_pity_count: entity.chase_pity_count,
        })
    }
}
