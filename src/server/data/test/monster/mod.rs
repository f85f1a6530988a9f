use crate::server::{
    data::monster::MonsterRepository,
    model::monster::{CreateMonsterParam, UpdateMonsterParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_ids;
mod update;

fn update_param(picture_link: Option<&str>) -> UpdateMonsterParam {
    UpdateMonsterParam {
        name: "Goblin King".to_string(),
        health: 40,
        x: 3.5,
        y: 1.0,
        picture_link: picture_link.map(str::to_string),
    }
}
