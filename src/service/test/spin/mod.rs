use rand::{rngs::StdRng, SeedableRng};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

use super::{gacha_always, gacha_always_without_general_pity, gacha_with};
use crate::{
    data::{collection::CollectionRepository, pity::PityRepository},
    error::{gacha::GachaError, AppError},
    gacha::config::{BannerWeights, GachaConfig, RarityWeights, TierWeight},
    model::{banner::Banner, pity::PityState, spin::GrantSource},
    service::spin::SpinService,
};

mod draw;
mod no_candidates;
