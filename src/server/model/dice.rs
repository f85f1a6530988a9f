//! Dice domain models and parameters.

use crate::{
    model::dice::{CreateDiceDto, DiceDto, DiceType, UpdateDiceDto},
    server::error::{internal::InternalError, AppError},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dice {
    pub id: i32,
    pub name: String,
    /// How many dice are rolled.
    pub number: i32,
    pub dice_type: DiceType,
    pub bonus: i32,
    /// Target value of a roll, if any.
    pub objective: Option<i32>,
}

impl Dice {
    /// Converts an entity model to the dice domain model.
    ///
    /// # Returns
    /// - `Ok(Dice)` - The converted dice
    /// - `Err(AppError::InternalErr(InvalidDiceType))` - The stored face count is not a
    ///   supported dice type
    pub fn from_entity(entity: entity::dice::Model) -> Result<Self, AppError> {
        let dice_type =
            DiceType::try_from(entity.dice_type).map_err(|_| InternalError::InvalidDiceType {
                id: entity.id,
                value: entity.dice_type,
            })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            number: entity.number,
            dice_type,
            bonus: entity.bonus,
            objective: entity.objective,
        })
    }

    pub fn into_dto(self) -> DiceDto {
        DiceDto {
            id: self.id,
            name: self.name,
            number: self.number,
            dice_type: self.dice_type,
            bonus: self.bonus,
            objective: self.objective,
        }
    }
}

/// Parameters for creating a dice.
#[derive(Debug, Clone)]
pub struct CreateDiceParam {
    pub name: String,
    pub number: i32,
    pub dice_type: DiceType,
    pub bonus: i32,
    pub objective: Option<i32>,
}

impl From<CreateDiceDto> for CreateDiceParam {
    fn from(dto: CreateDiceDto) -> Self {
        Self {
            name: dto.name,
            number: dto.number,
            dice_type: dto.dice_type,
            bonus: dto.bonus,
            objective: dto.objective,
        }
    }
}

/// Parameters for replacing the mutable fields of a dice.
#[derive(Debug, Clone)]
pub struct UpdateDiceParam {
    pub name: String,
    pub number: i32,
    pub dice_type: DiceType,
    pub bonus: i32,
    pub objective: Option<i32>,
}

impl UpdateDiceParam {
    /// Objective to write, if any.
    ///
    /// Zero counts as not provided, so an update can never clear a previously
    /// stored objective.
    pub fn objective_to_apply(&self) -> Option<i32> {
        self.objective.filter(|objective| *objective != 0)
    }
}

impl From<UpdateDiceDto> for UpdateDiceParam {
    fn from(dto: UpdateDiceDto) -> Self {
        Self {
            name: dto.name,
            number: dto.number,
            dice_type: dto.dice_type,
            bonus: dto.bonus,
            objective: dto.objective,
        }
    }
}
