//! User service for business logic.
//!
//! This module provides the `UserService` for listing, creating, and deleting users
//! and for creating monsters owned by a user.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{monster::MonsterRepository, reference::ReferenceRepository, user::UserRepository},
    error::AppError,
    model::{
        monster::CreateMonsterParam,
        reference::ReferenceList,
        user::{CreateUserParam, UserWithMonsters},
    },
    service::resolver::RelationshipResolver,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users with their monsters resolved.
    ///
    /// # Returns
    /// - `Ok(Vec<UserWithMonsters>)` - Every user, ordered by ID
    /// - `Err(AppError::DbErr)` - Database error while listing users
    pub async fn get_all(&self) -> Result<Vec<UserWithMonsters>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(RelationshipResolver::new(self.db)
            .populate_users(users)
            .await)
    }

    /// Retrieves the users matching an ID with their monsters resolved.
    ///
    /// A missing user is reported as an empty list rather than an error.
    ///
    /// # Returns
    /// - `Ok(Vec<UserWithMonsters>)` - Zero or one user
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Vec<UserWithMonsters>, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(id).await? else {
            return Ok(Vec::new());
        };

        Ok(vec![RelationshipResolver::new(self.db).populate_user(user).await])
    }

    /// Creates a user owning no monsters.
    pub async fn create(&self, param: CreateUserParam) -> Result<UserWithMonsters, AppError> {
        let user = UserRepository::new(self.db).create(param).await?;

        Ok(UserWithMonsters {
            user,
            monsters: Vec::new(),
        })
    }

    /// Deletes every user matching the ID.
    ///
    /// Owned monsters are not deleted.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users removed
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let removed = UserRepository::new(self.db).delete_matching(id).await?;

        tracing::debug!("Deleted {} user(s) matching id {}", removed, id);

        Ok(removed)
    }

    /// Creates a monster and appends it to the user's monster list.
    ///
    /// The monster is inserted before the user is looked up and the two writes are
    /// independent. If the user does not exist, or the second write fails, the
    /// monster remains in its collection without any owner.
    ///
    /// # Arguments
    /// - `user_id` - ID of the owning user
    /// - `param` - Fields of the new monster
    ///
    /// # Returns
    /// - `Ok(UserWithMonsters)` - The updated user with monsters resolved
    /// - `Err(AppError::NotFound)` - No user with that ID exists
    /// - `Err(AppError::DbErr)` - Database error during either write
    pub async fn add_monster(
        &self,
        user_id: i32,
        param: CreateMonsterParam,
    ) -> Result<UserWithMonsters, AppError> {
        let monster = MonsterRepository::new(self.db).create(param).await?;

        let Some(mut user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            tracing::warn!(
                "Monster {} was created for missing user {} and is left unowned",
                monster.id,
                user_id
            );
            return Err(AppError::NotFound("User not found".to_string()));
        };

        ReferenceRepository::new(self.db)
            .push(ReferenceList::UserMonsters, user.id, monster.id)
            .await?;
        user.monsters.push(monster.id);

        Ok(RelationshipResolver::new(self.db).populate_user(user).await)
    }
}
