//! Game data repository for database operations.
//!
//! Provides the `GameRepository` for managing games and loading their monster and
//! dice reference lists.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::reference::ReferenceRepository,
    model::{
        game::{CreateGameParam, Game},
        reference::ReferenceList,
    },
};

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new game with empty reference lists.
    pub async fn create(&self, param: CreateGameParam) -> Result<Game, DbErr> {
        let entity = entity::game::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Game::from_entity(entity, Vec::new(), Vec::new()))
    }

    /// Gets every game with its monster and dice identifiers.
    pub async fn get_all(&self) -> Result<Vec<Game>, DbErr> {
        let entities = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = entities.iter().map(|game| game.id).collect();
        let references = ReferenceRepository::new(self.db);
        let mut monsters = references
            .get_children_for_parents(ReferenceList::GameMonsters, &ids)
            .await?;
        let mut dices = references
            .get_children_for_parents(ReferenceList::GameDices, &ids)
            .await?;

        Ok(entities
            .into_iter()
            .map(|game| {
                let game_monsters = monsters.remove(&game.id).unwrap_or_default();
                let game_dices = dices.remove(&game.id).unwrap_or_default();
                Game::from_entity(game, game_monsters, game_dices)
            })
            .collect())
    }

    /// Finds a game by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - The game with both reference lists
    /// - `Ok(None)` - No game with that ID exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Game>, DbErr> {
        let Some(entity) = entity::prelude::Game::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let references = ReferenceRepository::new(self.db);
        let monsters = references
            .get_children(ReferenceList::GameMonsters, entity.id)
            .await?;
        let dices = references
            .get_children(ReferenceList::GameDices, entity.id)
            .await?;

        Ok(Some(Game::from_entity(entity, monsters, dices)))
    }

    /// Deletes every game matching the ID filter, one record at a time.
    ///
    /// The deleted games' reference lists are cleared; referenced monsters and
    /// dice are kept.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of games removed (zero when nothing matched)
    /// - `Err(DbErr)` - Database error during query or delete
    pub async fn delete_matching(&self, id: i32) -> Result<u64, DbErr> {
        let matches = entity::prelude::Game::find()
            .filter(entity::game::Column::Id.eq(id))
            .all(self.db)
            .await?;

        let references = ReferenceRepository::new(self.db);
        let mut removed = 0;
        for game in matches {
            entity::prelude::Game::delete_by_id(game.id)
                .exec(self.db)
                .await?;
            for list in ReferenceList::GAME {
                references.clear(list, game.id).await?;
            }
            removed += 1;
        }

        Ok(removed)
    }
}
