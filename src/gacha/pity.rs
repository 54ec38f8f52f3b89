//! Pity state machine.
//!
//! Runs once per draw with the counters loaded inside the draw transaction. The
//! chase check runs first and may short-circuit; otherwise general pity is
//! accounted against the tier the selector picked. Nothing here touches the
//! database: when the general ceiling is hit the caller fetches the unowned
//! high-tier ids and hands them to [`PityEngine::pick_guarantee`].

use rand::{seq::IndexedRandom, Rng};

use crate::{
    gacha::{config::PityThresholds, resolver::CandidatePool},
    model::pity::PityState,
};

/// What the pity engine decided for one draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PityStep {
    /// The chase resolved and its objekt must be granted.
    Chase {
        objekt_id: i32,
        /// Chase counter value when the chase resolved.
        pity_taken: i32,
        /// True when the ceiling forced the grant.
        forced: bool,
    },
    /// General pity hit its ceiling; grant an unowned high-tier objekt if one exists.
    GuaranteeDue,
    /// No override, grant from the candidate pool.
    Natural,
}

#[derive(Debug, Clone)]
pub struct PityEngine {
    thresholds: PityThresholds,
}

impl PityEngine {
    pub fn new(thresholds: PityThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &PityThresholds {
        &self.thresholds
    }

    /// Advances the counters for one draw.
    ///
    /// # Arguments
    /// - `state` - Counters to mutate
    /// - `tier` - Tier picked by the rarity selector for this draw
    /// - `pool` - Candidate pool resolved for that tier
    /// - `chase_objekt_id` - Catalog id of the chase slug; `None` when the slug no
    ///   longer resolves, in which case the stale chase is dropped
    /// - `rng` - Source of randomness for the natural chase roll
    ///
    /// # Returns
    /// - `PityStep` - Override decision for the orchestrator
    pub fn step<R: Rng + ?Sized>(
        &self,
        state: &mut PityState,
        tier: i32,
        pool: &CandidatePool,
        chase_objekt_id: Option<i32>,
        rng: &mut R,
    ) -> PityStep {
        if state.is_chasing() {
            match chase_objekt_id {
                Some(objekt_id) => {
                    if let Some(step) = self.chase_step(state, objekt_id, pool, rng) {
                        return step;
                    }
                }
                None => self.clear_chase(state),
            }
        }

        self.general_step(state, tier)
    }

    /// Picks the guaranteed objekt once general pity has triggered.
    ///
    /// # Returns
    /// - `Some(id)` - Uniformly chosen unowned objekt
    /// - `None` - The user already owns every qualifying objekt
    pub fn pick_guarantee<R: Rng + ?Sized>(&self, unowned: &[i32], rng: &mut R) -> Option<i32> {
        unowned.choose(rng).copied()
    }

    /// Points the chase at a new objekt and restarts its counter.
    pub fn set_chase(&self, state: &mut PityState, slug: String) {
        state.chase_objekt_slug = Some(slug);
        state.chase_pity_count = 0;
        if self.thresholds.reset_general_on_chase_change {
            state.pity_count = 0;
        }
    }

    /// Drops the chase target and its progress.
    pub fn clear_chase(&self, state: &mut PityState) {
        state.chase_objekt_slug = None;
        state.chase_pity_count = 0;
    }

    fn chase_step<R: Rng + ?Sized>(
        &self,
        state: &mut PityState,
        objekt_id: i32,
        pool: &CandidatePool,
        rng: &mut R,
    ) -> Option<PityStep> {
        if pool.contains(objekt_id) && pool.pick(rng) == objekt_id {
            let pity_taken = state.chase_pity_count;
            Self::finish_chase(state);
            return Some(PityStep::Chase {
                objekt_id,
                pity_taken,
                forced: false,
            });
        }

        state.chase_pity_count += 1;
        if state.chase_pity_count >= self.thresholds.chase_ceiling {
            let pity_taken = state.chase_pity_count;
            Self::finish_chase(state);
            return Some(PityStep::Chase {
                objekt_id,
                pity_taken,
                forced: true,
            });
        }

        None
    }

    fn general_step(&self, state: &mut PityState, tier: i32) -> PityStep {
        if self.thresholds.is_low_tier(tier) {
            state.pity_count += 1;
        } else {
            state.pity_count = 0;
        }

        if state.pity_count >= self.thresholds.general_ceiling {
            state.pity_count = 0;
            return PityStep::GuaranteeDue;
        }

        PityStep::Natural
    }

    // A resolved chase also wipes general pity.
    fn finish_chase(state: &mut PityState) {
        state.chase_objekt_slug = None;
        state.chase_pity_count = 0;
        state.pity_count = 0;
    }
}
