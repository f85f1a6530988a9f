//! Dice data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::dice::{CreateDiceParam, Dice, UpdateDiceParam},
};

/// Repository providing database operations for dice.
///
/// Dice hold no reference lists, so every query maps straight from the
/// `dice` table.
pub struct DiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiceRepository<'a> {
    /// Creates a new DiceRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DiceRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new dice.
    ///
    /// # Returns
    /// - `Ok(Dice)` - The created dice
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateDiceParam) -> Result<Dice, AppError> {
        let entity = entity::dice::ActiveModel {
            name: ActiveValue::Set(param.name),
            number: ActiveValue::Set(param.number),
            dice_type: ActiveValue::Set(param.dice_type.faces()),
            bonus: ActiveValue::Set(param.bonus),
            objective: ActiveValue::Set(param.objective),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Dice::from_entity(entity)
    }

    /// Gets every dice, attached or not.
    ///
    /// # Returns
    /// - `Ok(Vec<Dice>)` - All dice ordered by ID
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A stored dice has an unsupported type
    pub async fn get_all(&self) -> Result<Vec<Dice>, AppError> {
        entity::prelude::Dice::find()
            .order_by_asc(entity::dice::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Dice::from_entity)
            .collect()
    }

    /// Finds all dice whose ID is in `ids`, skipping unknown IDs.
    ///
    /// # Arguments
    /// - `ids` - Identifiers to look up, in any order
    ///
    /// # Returns
    /// - `Ok(Vec<Dice>)` - Matching dice ordered by ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Dice>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Dice::find()
            .filter(entity::dice::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::dice::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Dice::from_entity)
            .collect()
    }

    /// Replaces the mutable fields of a dice and returns the updated record.
    ///
    /// The objective is only written when `param` carries a non-zero one.
    ///
    /// # Arguments
    /// - `id` - ID of the dice to update
    /// - `param` - New field values
    ///
    /// # Returns
    /// - `Ok(Some(Dice))` - The updated dice
    /// - `Ok(None)` - No dice with that ID exists
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn update(&self, id: i32, param: UpdateDiceParam) -> Result<Option<Dice>, AppError> {
        let Some(existing) = entity::prelude::Dice::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let objective = param.objective_to_apply();

        let mut active: entity::dice::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.number = ActiveValue::Set(param.number);
        active.dice_type = ActiveValue::Set(param.dice_type.faces());
        active.bonus = ActiveValue::Set(param.bonus);
        if let Some(objective) = objective {
            active.objective = ActiveValue::Set(Some(objective));
        }

        let entity = active.update(self.db).await?;

        Dice::from_entity(entity).map(Some)
    }
}
