use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{dice::DiceDto, monster::MonsterDto};

/// Game with its reference lists as identifiers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GameDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    #[serde(rename = "_monsters")]
    pub monsters: Vec<i32>,
    #[serde(rename = "_dices")]
    pub dices: Vec<i32>,
}

/// Game with monsters and dice resolved to full records.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PopulatedGameDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    #[serde(rename = "_monsters")]
    pub monsters: Vec<MonsterDto>,
    #[serde(rename = "_dices")]
    pub dices: Vec<DiceDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, Validate)]
pub struct CreateGameDto {
    #[validate(length(min = 3, max = 20, message = "\"name\" length must be between 3 and 20"))]
    pub name: String,
}
