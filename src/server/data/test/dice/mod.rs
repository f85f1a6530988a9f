use crate::{
    model::dice::DiceType,
    server::{
        data::dice::DiceRepository,
        error::{internal::InternalError, AppError},
        model::dice::{CreateDiceParam, UpdateDiceParam},
    },
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod update;

fn update_param(objective: Option<i32>) -> UpdateDiceParam {
    UpdateDiceParam {
        name: "Attack".to_string(),
        number: 2,
        dice_type: DiceType::D6,
        bonus: 4,
        objective,
    }
}
