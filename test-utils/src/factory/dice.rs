//! Dice factory for creating test dice entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dice with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::dice::DiceFactory;
///
/// let dice = DiceFactory::new(&db)
///     .number(2)
///     .dice_type(6)
///     .bonus(3)
///     .build()
///     .await?;
/// ```
pub struct DiceFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    number: i32,
    dice_type: i32,
    bonus: i32,
    objective: Option<i32>,
}

impl<'a> DiceFactory<'a> {
    /// Creates a new DiceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Dice {id}"` where id is auto-incremented
    /// - number: `1`
    /// - dice_type: `20`
    /// - bonus: `0`
    /// - objective: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Dice {}", id),
            number: 1,
            dice_type: 20,
            bonus: 0,
            objective: None,
        }
    }

    /// Sets the dice name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets how many dice are rolled.
    pub fn number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    /// Sets the face count of the dice.
    pub fn dice_type(mut self, dice_type: i32) -> Self {
        self.dice_type = dice_type;
        self
    }

    /// Sets the flat bonus added to the roll.
    pub fn bonus(mut self, bonus: i32) -> Self {
        self.bonus = bonus;
        self
    }

    /// Sets the roll objective.
    pub fn objective(mut self, objective: Option<i32>) -> Self {
        self.objective = objective;
        self
    }

    /// Builds and inserts the dice entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::dice::Model)` - Created dice entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::dice::Model, DbErr> {
        entity::dice::ActiveModel {
            name: ActiveValue::Set(self.name),
            number: ActiveValue::Set(self.number),
            dice_type: ActiveValue::Set(self.dice_type),
            bonus: ActiveValue::Set(self.bonus),
            objective: ActiveValue::Set(self.objective),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a dice with default values.
pub async fn create_dice(db: &DatabaseConnection) -> Result<entity::dice::Model, DbErr> {
    DiceFactory::new(db).build().await
}
