use crate::{data::objekt::ObjektRepository, model::objekt::CreateObjektParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod ids_by_rarity;
mod unowned_ids_min_rarity;
mod upsert;
