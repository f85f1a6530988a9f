use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// Face count of a die.
///
/// Only the standard tabletop dice are accepted. The value travels over the
/// wire as its plain integer face count; any other integer fails
/// deserialization.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "i32", into = "i32")]
pub enum DiceType {
    D2 = 2,
    D3 = 3,
    D4 = 4,
    D6 = 6,
    D8 = 8,
    D10 = 10,
    D12 = 12,
    D20 = 20,
    D100 = 100,
}

impl DiceType {
    /// Every accepted dice type in ascending face count.
    pub const ALL: [DiceType; 9] = [
        DiceType::D2,
        DiceType::D3,
        DiceType::D4,
        DiceType::D6,
        DiceType::D8,
        DiceType::D10,
        DiceType::D12,
        DiceType::D20,
        DiceType::D100,
    ];

    pub fn faces(self) -> i32 {
        self as i32
    }
}

/// Rejected dice type value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDiceType(pub i32);

impl fmt::Display for InvalidDiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"type\" must be one of [2, 3, 4, 6, 8, 10, 12, 20, 100], got {}",
            self.0
        )
    }
}

impl TryFrom<i32> for DiceType {
    type Error = InvalidDiceType;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        DiceType::ALL
            .into_iter()
            .find(|dice_type| dice_type.faces() == value)
            .ok_or(InvalidDiceType(value))
    }
}

impl From<DiceType> for i32 {
    fn from(value: DiceType) -> Self {
        value.faces()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DiceDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub number: i32,
    #[serde(rename = "type")]
    #[schema(value_type = i32, example = 20)]
    pub dice_type: DiceType,
    pub bonus: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<i32>,
}

/// Payload for creating a dice under a game or monster.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, Validate)]
pub struct CreateDiceDto {
    #[validate(length(min = 3, max = 20, message = "\"name\" length must be between 3 and 20"))]
    pub name: String,
    #[validate(range(min = 1, message = "\"number\" must be greater than or equal to 1"))]
    pub number: i32,
    #[serde(rename = "type")]
    #[schema(value_type = i32, example = 20)]
    pub dice_type: DiceType,
    pub bonus: i32,
    #[validate(range(min = 1, message = "\"objective\" must be greater than or equal to 1"))]
    pub objective: Option<i32>,
}

/// Payload replacing the mutable fields of a dice.
///
/// `objective` is only applied when present and non-zero.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema, Validate)]
pub struct UpdateDiceDto {
    #[validate(length(min = 3, max = 20, message = "\"name\" length must be between 3 and 20"))]
    pub name: String,
    #[validate(range(min = 1, message = "\"number\" must be greater than or equal to 1"))]
    pub number: i32,
    #[serde(rename = "type")]
    #[schema(value_type = i32, example = 20)]
    pub dice_type: DiceType,
    pub bonus: i32,
    #[validate(range(min = 1, message = "\"objective\" must be greater than or equal to 1"))]
    pub objective: Option<i32>,
}
