//! User data repository for database operations.
//!
//! Provides the `UserRepository` for managing user records together with their
//! owned-monster reference list.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::reference::ReferenceRepository,
    model::{
        reference::ReferenceList,
        user::{CreateUserParam, User},
    },
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user owning no monsters.
    ///
    /// # Arguments
    /// - `param` - Name and password of the user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            password: ActiveValue::Set(param.password),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity, Vec::new()))
    }

    /// Gets every user with its monster identifiers.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users ordered by ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = entities.iter().map(|user| user.id).collect();
        let mut monsters = ReferenceRepository::new(self.db)
            .get_children_for_parents(ReferenceList::UserMonsters, &ids)
            .await?;

        Ok(entities
            .into_iter()
            .map(|user| {
                let owned = monsters.remove(&user.id).unwrap_or_default();
                User::from_entity(user, owned)
            })
            .collect())
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The user with its monster identifiers
    /// - `Ok(None)` - No user with that ID exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let monsters = ReferenceRepository::new(self.db)
            .get_children(ReferenceList::UserMonsters, entity.id)
            .await?;

        Ok(Some(User::from_entity(entity, monsters)))
    }

    /// Deletes every user matching the ID filter, one record at a time.
    ///
    /// Each deleted user's monster list is cleared as well; the monsters
    /// themselves are kept.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users removed (zero when nothing matched)
    /// - `Err(DbErr)` - Database error during query or delete
    pub async fn delete_matching(&self, id: i32) -> Result<u64, DbErr> {
        let matches = entity::prelude::User::find()
            .filter(entity::user::Column::Id.eq(id))
            .all(self.db)
            .await?;

        let references = ReferenceRepository::new(self.db);
        let mut removed = 0;
        for user in matches {
            entity::prelude::User::delete_by_id(user.id)
                .exec(self.db)
                .await?;
            for list in ReferenceList::USER {
                references.clear(list, user.id).await?;
            }
            removed += 1;
        }

        Ok(removed)
    }
}
