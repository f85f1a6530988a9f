use crate::server::{
    data::{game::GameRepository, reference::ReferenceRepository},
    model::{game::CreateGameParam, reference::ReferenceList},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_all;
