//! Game service for business logic.
//!
//! Provides the `GameService`, which manages games and the monsters and dice they
//! reference. Attaching a child creates it first and then appends it to the game;
//! detaching only edits the game's list, never the child record. Neither path is
//! transactional, and deleting a game leaves its children in place.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        dice::DiceRepository, game::GameRepository, monster::MonsterRepository,
        reference::ReferenceRepository,
    },
    error::AppError,
    model::{
        dice::{CreateDiceParam, Dice},
        game::{CreateGameParam, Game, GameWithRelations},
        monster::{CreateMonsterParam, Monster},
        reference::ReferenceList,
    },
    service::resolver::RelationshipResolver,
};

/// Service providing business logic for games.
pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    /// Creates a new GameService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GameService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every game with its reference lists as identifiers.
    pub async fn get_all(&self) -> Result<Vec<Game>, AppError> {
        Ok(GameRepository::new(self.db).get_all().await?)
    }

    /// Retrieves the games matching an ID with monsters and dice resolved.
    ///
    /// # Returns
    /// - `Ok(Vec<GameWithRelations>)` - Zero or one game
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Vec<GameWithRelations>, AppError> {
        let Some(game) = GameRepository::new(self.db).find_by_id(id).await? else {
            return Ok(Vec::new());
        };

        Ok(vec![RelationshipResolver::new(self.db).populate_game(game).await])
    }

    pub async fn create(&self, param: CreateGameParam) -> Result<Game, AppError> {
        Ok(GameRepository::new(self.db).create(param).await?)
    }

    /// Deletes every game matching the ID without touching its monsters or dice.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of games removed
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let removed = GameRepository::new(self.db).delete_matching(id).await?;

        tracing::debug!("Deleted {} game(s) matching id {}", removed, id);

        Ok(removed)
    }

    /// Creates a monster and appends it to the game's monster list.
    ///
    /// # Returns
    /// - `Ok(Monster)` - The created monster
    /// - `Err(AppError::NotFound)` - No game with that ID exists; the monster stays orphaned
    /// - `Err(AppError::DbErr)` - Database error during either write
    pub async fn add_monster(
        &self,
        game_id: i32,
        param: CreateMonsterParam,
    ) -> Result<Monster, AppError> {
        let monster = MonsterRepository::new(self.db).create(param).await?;

        self.attach(ReferenceList::GameMonsters, game_id, monster.id)
            .await?;

        Ok(monster)
    }

    /// Creates a dice and appends it to the game's dice list.
    ///
    /// # Returns
    /// - `Ok(Dice)` - The created dice
    /// - `Err(AppError::NotFound)` - No game with that ID exists; the dice stays orphaned
    /// - `Err(AppError::DbErr)` - Database error during either write
    pub async fn add_dice(&self, game_id: i32, param: CreateDiceParam) -> Result<Dice, AppError> {
        let dice = DiceRepository::new(self.db).create(param).await?;

        self.attach(ReferenceList::GameDices, game_id, dice.id)
            .await?;

        Ok(dice)
    }

    /// Detaches a monster from the game. The monster record is kept.
    ///
    /// # Returns
    /// - `Ok(GameWithRelations)` - The game after the change, resolved
    /// - `Err(AppError::NotFound)` - No game with that ID exists
    pub async fn remove_monster(
        &self,
        game_id: i32,
        monster_id: i32,
    ) -> Result<GameWithRelations, AppError> {
        let mut game = self.require_game(game_id).await?;

        ReferenceRepository::new(self.db)
            .pull(ReferenceList::GameMonsters, game.id, monster_id)
            .await?;
        game.monsters.retain(|id| *id != monster_id);

        Ok(RelationshipResolver::new(self.db).populate_game(game).await)
    }

    /// Detaches a dice from the game. The dice record is kept.
    ///
    /// # Returns
    /// - `Ok(GameWithRelations)` - The game after the change, resolved
    /// - `Err(AppError::NotFound)` - No game with that ID exists
    pub async fn remove_dice(
        &self,
        game_id: i32,
        dice_id: i32,
    ) -> Result<GameWithRelations, AppError> {
        let mut game = self.require_game(game_id).await?;

        ReferenceRepository::new(self.db)
            .pull(ReferenceList::GameDices, game.id, dice_id)
            .await?;
        game.dices.retain(|id| *id != dice_id);

        Ok(RelationshipResolver::new(self.db).populate_game(game).await)
    }

    async fn attach(&self, list: ReferenceList, game_id: i32, child_id: i32) -> Result<(), AppError> {
        let game = match self.require_game(game_id).await {
            Ok(game) => game,
            Err(err) => {
                tracing::warn!(
                    "Child {} created for game {} is left unreferenced: {}",
                    child_id,
                    game_id,
                    err
                );
                return Err(err);
            }
        };

        ReferenceRepository::new(self.db)
            .push(list, game.id, child_id)
            .await?;

        Ok(())
    }

    async fn require_game(&self, game_id: i32) -> Result<Game, AppError> {
        GameRepository::new(self.db)
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Game not found".to_string()))
    }
}
