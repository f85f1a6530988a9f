//! Monster domain models and parameters.
//!
//! Monsters are created through a parent (a user or a game) and afterwards
//! updated on their own. Updates replace every mutable field except
//! `picture_link`, which only changes when a non-empty link is supplied.

use crate::model::monster::{CreateMonsterDto, MonsterDto, PopulatedMonsterDto, UpdateMonsterDto};

use super::dice::Dice;

/// Picture link stored when a monster is created without one.
pub const DEFAULT_PICTURE_LINK: &str = "";

#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    pub id: i32,
    pub name: String,
    pub health: i32,
    pub x: f64,
    pub y: f64,
    pub picture_link: String,
    /// Attached dice identifiers in insertion order.
    pub dices: Vec<i32>,
}

impl Monster {
    /// Converts an entity model and its loaded reference list into the domain model.
    pub fn from_entity(entity: entity::monster::Model, dices: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            health: entity.health,
            x: entity.x,
            y: entity.y,
            picture_link: entity.picture_link,
            dices,
        }
    }

    /// Converts the monster into a DTO with dice as identifiers.
    pub fn into_dto(self) -> MonsterDto {
        MonsterDto {
            id: self.id,
            name: self.name,
            health: self.health,
            x: self.x,
            y: self.y,
            picture_link: self.picture_link,
            dices: self.dices,
        }
    }
}

/// Monster with its dice resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterWithDices {
    pub monster: Monster,
    pub dices: Vec<Dice>,
}

impl MonsterWithDices {
    pub fn into_dto(self) -> PopulatedMonsterDto {
        PopulatedMonsterDto {
            id: self.monster.id,
            name: self.monster.name,
            health: self.monster.health,
            x: self.monster.x,
            y: self.monster.y,
            picture_link: self.monster.picture_link,
            dices: self.dices.into_iter().map(Dice::into_dto).collect(),
        }
    }
}

/// Parameters for creating a monster.
#[derive(Debug, Clone)]
pub struct CreateMonsterParam {
    pub name: String,
    pub health: i32,
    pub x: f64,
    pub y: f64,
    pub picture_link: String,
}

impl From<CreateMonsterDto> for CreateMonsterParam {
    fn from(dto: CreateMonsterDto) -> Self {
        Self {
            name: dto.name,
            health: dto.health,
            x: dto.x.unwrap_or(0.0),
            y: dto.y.unwrap_or(0.0),
            picture_link: dto
                .picture_link
                .unwrap_or_else(|| DEFAULT_PICTURE_LINK.to_string()),
        }
    }
}

/// Parameters for replacing the mutable fields of a monster.
#[derive(Debug, Clone)]
pub struct UpdateMonsterParam {
    pub name: String,
    pub health: i32,
    pub x: f64,
    pub y: f64,
    pub picture_link: Option<String>,
}

impl UpdateMonsterParam {
    /// Picture link to write, if any.
    ///
    /// An empty link counts as not provided, so an update can never clear a
    /// previously stored link.
    pub fn picture_link_to_apply(&self) -> Option<&str> {
        self.picture_link.as_deref().filter(|link| !link.is_empty())
    }
}

impl From<UpdateMonsterDto> for UpdateMonsterParam {
    fn from(dto: UpdateMonsterDto) -> Self {
        Self {
            name: dto.name,
            health: dto.health,
            x: dto.x,
            y: dto.y,
            picture_link: dto.picture_link,
        }
    }
}
