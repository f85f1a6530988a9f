//! Dice service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::dice::DiceRepository,
    error::AppError,
    model::dice::{Dice, UpdateDiceParam},
};

pub struct DiceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Dice>, AppError> {
        DiceRepository::new(self.db).get_all().await
    }

    /// Replaces the mutable fields of a dice.
    ///
    /// A zero or missing objective keeps the stored objective.
    ///
    /// # Returns
    /// - `Ok(Dice)` - The updated dice
    /// - `Err(AppError::NotFound)` - No dice with that ID exists
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateDiceParam) -> Result<Dice, AppError> {
        DiceRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Dice not found".to_string()))
    }
}
