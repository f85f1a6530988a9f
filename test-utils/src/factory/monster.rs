//! Monster factory for creating test monster entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test monsters with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::monster::MonsterFactory;
///
/// let goblin = MonsterFactory::new(&db)
///     .name("Goblin")
///     .health(7)
///     .picture_link("goblin.png")
///     .build()
///     .await?;
/// ```
pub struct MonsterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    health: i32,
    x: f64,
    y: f64,
    picture_link: String,
}

impl<'a> MonsterFactory<'a> {
    /// Creates a new MonsterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Monster {id}"` where id is auto-incremented
    /// - health: `10`
    /// - x, y: `0.0`
    /// - picture_link: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Monster {}", id),
            health: 10,
            x: 0.0,
            y: 0.0,
            picture_link: String::new(),
        }
    }

    /// Sets the monster name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the monster health.
    pub fn health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    /// Sets the monster position on the board.
    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Sets the monster picture link.
    pub fn picture_link(mut self, picture_link: impl Into<String>) -> Self {
        self.picture_link = picture_link.into();
        self
    }

    /// Builds and inserts the monster entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::monster::Model)` - Created monster entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::monster::Model, DbErr> {
        entity::monster::ActiveModel {
            name: ActiveValue::Set(self.name),
            health: ActiveValue::Set(self.health),
            x: ActiveValue::Set(self.x),
            y: ActiveValue::Set(self.y),
            picture_link: ActiveValue::Set(self.picture_link),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a monster with default values.
pub async fn create_monster(db: &DatabaseConnection) -> Result<entity::monster::Model, DbErr> {
    MonsterFactory::new(db).build().await
}
