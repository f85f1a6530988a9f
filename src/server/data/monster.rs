//! Monster data repository for database operations.
//!
//! Provides the `MonsterRepository` for creating, reading, and updating monsters
//! along with their attached-dice reference list.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::reference::ReferenceRepository,
    model::{
        monster::{CreateMonsterParam, Monster, UpdateMonsterParam},
        reference::ReferenceList,
    },
};

pub struct MonsterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MonsterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new monster with no dice attached.
    ///
    /// The monster is not attached to any parent; see `ReferenceRepository::push`.
    pub async fn create(&self, param: CreateMonsterParam) -> Result<Monster, DbErr> {
        let entity = entity::monster::ActiveModel {
            name: ActiveValue::Set(param.name),
            health: ActiveValue::Set(param.health),
            x: ActiveValue::Set(param.x),
            y: ActiveValue::Set(param.y),
            picture_link: ActiveValue::Set(param.picture_link),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Monster::from_entity(entity, Vec::new()))
    }

    /// Gets every monster, attached or not.
    pub async fn get_all(&self) -> Result<Vec<Monster>, DbErr> {
        let entities = entity::prelude::Monster::find()
            .order_by_asc(entity::monster::Column::Id)
            .all(self.db)
            .await?;

        self.with_dices(entities).await
    }

    /// Finds a monster by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Monster))` - The monster with its dice identifiers
    /// - `Ok(None)` - No monster with that ID exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Monster>, DbErr> {
        let Some(entity) = entity::prelude::Monster::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let dices = ReferenceRepository::new(self.db)
            .get_children(ReferenceList::MonsterDices, entity.id)
            .await?;

        Ok(Some(Monster::from_entity(entity, dices)))
    }

    /// Finds all monsters whose ID is in `ids`.
    ///
    /// Unknown IDs are skipped. Results are ordered by ID, not by the order of `ids`.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Monster>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Monster::find()
            .filter(entity::monster::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::monster::Column::Id)
            .all(self.db)
            .await?;

        self.with_dices(entities).await
    }

    /// Replaces the mutable fields of a monster and returns the updated record.
    ///
    /// The picture link is only written when `param` carries a non-empty one.
    ///
    /// # Returns
    /// - `Ok(Some(Monster))` - The updated monster
    /// - `Ok(None)` - No monster with that ID exists
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateMonsterParam,
    ) -> Result<Option<Monster>, DbErr> {
        let Some(existing) = entity::prelude::Monster::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let picture_link = param.picture_link_to_apply().map(str::to_string);

        let mut active: entity::monster::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.health = ActiveValue::Set(param.health);
        active.x = ActiveValue::Set(param.x);
        active.y = ActiveValue::Set(param.y);
        if let Some(link) = picture_link {
            active.picture_link = ActiveValue::Set(link);
        }

        let entity = active.update(self.db).await?;

        let dices = ReferenceRepository::new(self.db)
            .get_children(ReferenceList::MonsterDices, entity.id)
            .await?;

        Ok(Some(Monster::from_entity(entity, dices)))
    }

    async fn with_dices(
        &self,
        entities: Vec<entity::monster::Model>,
    ) -> Result<Vec<Monster>, DbErr> {
        let ids: Vec<i32> = entities.iter().map(|monster| monster.id).collect();
        let mut dices = ReferenceRepository::new(self.db)
            .get_children_for_parents(ReferenceList::MonsterDices, &ids)
            .await?;

        Ok(entities
            .into_iter()
            .map(|monster| {
                let attached = dices.remove(&monster.id).unwrap_or_default();
                Monster::from_entity(monster, attached)
            })
            .collect())
    }
}
