//! Game factory for creating test game entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games.
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory named `"Game {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Game {}", id),
        }
    }

    /// Sets the game name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the game entity into the database.
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}
