//! Results returned by the spin and chase services.

use crate::model::{objekt::Objekt, pity::PityState};

/// How the granted objekt was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantSource {
    /// Uniform pick from the candidate pool.
    Natural,
    /// The chase objekt was drawn from the pool before its ceiling.
    ChaseNatural,
    /// The chase ceiling was reached and the chase objekt was forced.
    ChaseForced,
    /// General pity granted an unowned high-tier objekt.
    Guarantee,
}

impl GrantSource {
    /// Whether pity or chase logic decided the grant.
    pub fn is_pity(&self) -> bool {
        !matches!(self, Self::Natural)
    }
}

/// Outcome of one committed spin.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinResult {
    /// Objekt added to the user's collection.
    pub objekt: Objekt,
    /// Copies owned after the grant.
    pub copies: i32,
    pub source: GrantSource,
    /// Draws the pity or chase counter had accumulated when it granted the objekt.
    pub pity_taken: Option<i32>,
    /// Como credited for the objekt's rarity.
    pub como_reward: i64,
    /// Balance after the reward.
    pub balance: i64,
    /// Counters as persisted by the spin.
    pub pity: PityState,
}

/// Outcome of setting a chase target.
#[derive(Debug, Clone, PartialEq)]
pub struct ChaseChange {
    /// The new chase objekt.
    pub objekt: Objekt,
    /// Slug that was being chased before, if any.
    pub previous_slug: Option<String>,
    /// Counters as persisted by the change.
    pub pity: PityState,
}
