//! Reference list repository.
//!
//! Stores the ordered child identifier lists held by users, monsters, and games.
//! Appending and detaching are independent writes; no check is made that the
//! parent or child exists, so callers decide how to handle orphans and dangling
//! identifiers.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::reference::ReferenceList;

pub struct ReferenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferenceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the child identifiers of one parent list in insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Child identifiers, duplicates preserved
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_children(&self, list: ReferenceList, parent_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::Reference::find()
            .filter(entity::reference::Column::List.eq(list.as_str()))
            .filter(entity::reference::Column::ParentId.eq(parent_id))
            .order_by_asc(entity::reference::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.child_id).collect())
    }

    /// Gets the child identifiers of the same list for many parents in one query.
    ///
    /// Parents without any reference are absent from the returned map.
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, Vec<i32>>)` - Parent ID to child identifiers in insertion order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_children_for_parents(
        &self,
        list: ReferenceList,
        parent_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if parent_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Reference::find()
            .filter(entity::reference::Column::List.eq(list.as_str()))
            .filter(entity::reference::Column::ParentId.is_in(parent_ids.to_vec()))
            .order_by_asc(entity::reference::Column::Id)
            .all(self.db)
            .await?;

        let mut children: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in rows {
            children.entry(row.parent_id).or_default().push(row.child_id);
        }

        Ok(children)
    }

    /// Appends a child identifier to the end of a parent list.
    pub async fn push(&self, list: ReferenceList, parent_id: i32, child_id: i32) -> Result<(), DbErr> {
        entity::reference::ActiveModel {
            list: ActiveValue::Set(list.as_str().to_string()),
            parent_id: ActiveValue::Set(parent_id),
            child_id: ActiveValue::Set(child_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes every occurrence of a child identifier from a parent list.
    ///
    /// The child record itself is left untouched.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entries removed from the list
    /// - `Err(DbErr)` - Database error during delete
    pub async fn pull(&self, list: ReferenceList, parent_id: i32, child_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Reference::delete_many()
            .filter(entity::reference::Column::List.eq(list.as_str()))
            .filter(entity::reference::Column::ParentId.eq(parent_id))
            .filter(entity::reference::Column::ChildId.eq(child_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Empties a parent list. Used when the parent itself is removed.
    pub async fn clear(&self, list: ReferenceList, parent_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Reference::delete_many()
            .filter(entity::reference::Column::List.eq(list.as_str()))
            .filter(entity::reference::Column::ParentId.eq(parent_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
