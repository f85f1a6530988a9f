use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::dice::DiceDto;

/// Monster with its dice as identifiers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MonsterDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub health: i32,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "pictureLink")]
    pub picture_link: String,
    #[serde(rename = "_dices")]
    pub dices: Vec<i32>,
}

/// Monster with its dice resolved to full records.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PopulatedMonsterDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub health: i32,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "pictureLink")]
    pub picture_link: String,
    #[serde(rename = "_dices")]
    pub dices: Vec<DiceDto>,
}

/// Payload for creating a monster under a user or game.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, Validate)]
pub struct CreateMonsterDto {
    #[validate(length(min = 3, max = 20, message = "\"name\" length must be between 3 and 20"))]
    pub name: String,
    #[validate(range(min = 1, message = "\"health\" must be greater than or equal to 1"))]
    pub health: i32,
    #[validate(range(min = 0.0, message = "\"x\" must be greater than or equal to 0"))]
    pub x: Option<f64>,
    #[validate(range(min = 0.0, message = "\"y\" must be greater than or equal to 0"))]
    pub y: Option<f64>,
    #[serde(rename = "pictureLink")]
    #[validate(length(min = 1, message = "\"pictureLink\" is not allowed to be empty"))]
    pub picture_link: Option<String>,
}

/// Payload replacing the mutable fields of a monster.
///
/// `pictureLink` is only applied when present and non-empty.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, Validate)]
pub struct UpdateMonsterDto {
    #[validate(length(min = 3, max = 20, message = "\"name\" length must be between 3 and 20"))]
    pub name: String,
    #[validate(range(min = 1, message = "\"health\" must be greater than or equal to 1"))]
    pub health: i32,
    #[validate(range(min = 0.0, message = "\"x\" must be greater than or equal to 0"))]
    pub x: f64,
    #[validate(range(min = 0.0, message = "\"y\" must be greater than or equal to 0"))]
    pub y: f64,
    #[serde(rename = "pictureLink")]
    pub picture_link: Option<String>,
}
