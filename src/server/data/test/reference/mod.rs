use crate::server::{data::reference::ReferenceRepository, model::reference::ReferenceList};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod clear;
mod get_children_for_parents;
mod pull;
mod push;
