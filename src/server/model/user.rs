//! User domain models and parameters.

use crate::model::user::{CreateUserDto, UserDto};

use super::monster::Monster;

/// User record with the identifiers of the monsters it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Stored as provided; no hashing is applied.
    pub password: String,
    /// Owned monster identifiers in insertion order.
    pub monsters: Vec<i32>,
}

impl User {
    /// Converts an entity model and its loaded reference list into the domain model.
    pub fn from_entity(entity: entity::user::Model, monsters: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            password: entity.password,
            monsters,
        }
    }
}

/// User with its monsters resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithMonsters {
    pub user: User,
    pub monsters: Vec<Monster>,
}

impl UserWithMonsters {
    /// Converts the populated user into a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.user.id,
            name: self.user.name,
            password: self.user.password,
            monsters: self.monsters.into_iter().map(Monster::into_dto).collect(),
        }
    }
}

/// Parameters for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub password: String,
}

impl From<CreateUserDto> for CreateUserParam {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            password: dto.password,
        }
    }
}
