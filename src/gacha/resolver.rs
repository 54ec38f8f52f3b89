//! Candidate pool resolution.

use rand::{seq::IndexedRandom, Rng};

use crate::{error::gacha::GachaError, gacha::selector::Selection};

/// Non-empty set of objekt ids eligible for one draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    ids: Vec<i32>,
}

impl CandidatePool {
    /// Wraps the catalog ids matching a selection.
    ///
    /// # Arguments
    /// - `selection` - Tier and season the ids were fetched for
    /// - `ids` - Catalog ids at that tier (and season, when set)
    ///
    /// # Returns
    /// - `Ok(CandidatePool)` - At least one candidate
    /// - `Err(GachaError::NoCandidates)` - The catalog has nothing for this selection
    pub fn resolve(selection: &Selection, ids: Vec<i32>) -> Result<Self, GachaError> {
        if ids.is_empty() {
            return Err(GachaError::NoCandidates {
                rarity: selection.tier,
                season: selection.season.clone(),
            });
        }

        Ok(Self { ids })
    }

    pub fn contains(&self, id: i32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always false; an empty pool cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Uniformly picks one candidate.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        // ids is never empty
        self.ids.choose(rng).copied().unwrap_or(self.ids[0])
    }
}
