use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::monster::MonsterDto;

/// User with owned monsters resolved to full records.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub password: String,
    pub monsters: Vec<MonsterDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, Validate)]
pub struct CreateUserDto {
    #[validate(length(min = 3, max = 20, message = "\"name\" length must be between 3 and 20"))]
    pub name: String,
    #[validate(length(
        min = 3,
        max = 20,
        message = "\"password\" length must be between 3 and 20"
    ))]
    pub password: String,
}
