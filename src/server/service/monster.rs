//! Monster service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{dice::DiceRepository, monster::MonsterRepository, reference::ReferenceRepository},
    error::AppError,
    model::{
        dice::{CreateDiceParam, Dice},
        monster::{Monster, MonsterWithDices, UpdateMonsterParam},
        reference::ReferenceList,
    },
    service::resolver::RelationshipResolver,
};

pub struct MonsterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MonsterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every monster with its dice as identifiers.
    pub async fn get_all(&self) -> Result<Vec<Monster>, AppError> {
        Ok(MonsterRepository::new(self.db).get_all().await?)
    }

    /// Retrieves the monsters matching an ID with their dice resolved.
    ///
    /// # Returns
    /// - `Ok(Vec<MonsterWithDices>)` - Zero or one monster
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Vec<MonsterWithDices>, AppError> {
        let Some(monster) = MonsterRepository::new(self.db).find_by_id(id).await? else {
            return Ok(Vec::new());
        };

        Ok(vec![
            RelationshipResolver::new(self.db)
                .populate_monster(monster)
                .await,
        ])
    }

    /// Replaces the mutable fields of a monster.
    ///
    /// # Returns
    /// - `Ok(Monster)` - The updated monster
    /// - `Err(AppError::NotFound)` - No monster with that ID exists
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateMonsterParam) -> Result<Monster, AppError> {
        MonsterRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Monster not found".to_string()))
    }

    /// Creates a dice and appends it to the monster's dice list.
    ///
    /// Same two-write sequence as the other add-child operations: a missing
    /// monster leaves the new dice unattached.
    ///
    /// # Returns
    /// - `Ok(Dice)` - The created dice
    /// - `Err(AppError::NotFound)` - No monster with that ID exists
    /// - `Err(AppError::DbErr)` - Database error during either write
    pub async fn add_dice(&self, monster_id: i32, param: CreateDiceParam) -> Result<Dice, AppError> {
        let dice = DiceRepository::new(self.db).create(param).await?;

        let Some(monster) = MonsterRepository::new(self.db)
            .find_by_id(monster_id)
            .await?
        else {
            tracing::warn!(
                "Dice {} was created for missing monster {} and is left unattached",
                dice.id,
                monster_id
            );
            return Err(AppError::NotFound("Monster not found".to_string()));
        };

        ReferenceRepository::new(self.db)
            .push(ReferenceList::MonsterDices, monster.id, dice.id)
            .await?;

        Ok(dice)
    }
}
