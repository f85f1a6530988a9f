//! Game domain models and parameters.

use crate::model::game::{CreateGameDto, GameDto, PopulatedGameDto};

use super::{dice::Dice, monster::Monster};

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub name: String,
    pub monsters: Vec<i32>,
    pub dices: Vec<i32>,
}

impl Game {
    /// Converts an entity model and its loaded reference lists into the domain model.
    pub fn from_entity(entity: entity::game::Model, monsters: Vec<i32>, dices: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            monsters,
            dices,
        }
    }

    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            name: self.name,
            monsters: self.monsters,
            dices: self.dices,
        }
    }
}

/// Game with both reference lists resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct GameWithRelations {
    pub game: Game,
    pub monsters: Vec<Monster>,
    pub dices: Vec<Dice>,
}

impl GameWithRelations {
    pub fn into_dto(self) -> PopulatedGameDto {
        PopulatedGameDto {
            id: self.game.id,
            name: self.game.name,
            monsters: self.monsters.into_iter().map(Monster::into_dto).collect(),
            dices: self.dices.into_iter().map(Dice::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGameParam {
    pub name: String,
}

impl From<CreateGameDto> for CreateGameParam {
    fn from(dto: CreateGameDto) -> Self {
        Self { name: dto.name }
    }
}
