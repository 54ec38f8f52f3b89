use crate::data::economy::{EconomyRepository, STARTING_BALANCE};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
