use crate::{
    model::dice::DiceType,
    server::{
        error::AppError,
        model::{dice::CreateDiceParam, monster::CreateMonsterParam},
    },
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};


fn monster_param(name: &str) -> CreateMonsterParam {
    CreateMonsterParam {
        name: name.to_string(),
        health: 12,
        x: 0.0,
        y: 0.0,
        picture_link: String::new(),
    }
}

fn dice_param(dice_type: DiceType) -> CreateDiceParam {
    CreateDiceParam {
        name: "Attack".to_string(),
        number: 1,
        dice_type,
        bonus: 0,
        objective: None,
    }
}
