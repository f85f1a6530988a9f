//! Reference factory appending child identifiers to parent lists.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Appends `child_id` to the reference list `list` of `parent_id`.
///
/// The child is not required to exist, which allows tests to set up dangling
/// references.
///
/// # Arguments
/// - `db` - Database connection
/// - `list` - List name, one of the constants in `entity::reference`
/// - `parent_id` - Identifier of the parent record
/// - `child_id` - Identifier appended to the list
///
/// # Returns
/// - `Ok(entity::reference::Model)` - Created reference row
/// - `Err(DbErr)` - Database error during insert
pub async fn attach(
    db: &DatabaseConnection,
    list: &str,
    parent_id: i32,
    child_id: i32,
) -> Result<entity::reference::Model, DbErr> {
    entity::reference::ActiveModel {
        list: ActiveValue::Set(list.to_string()),
        parent_id: ActiveValue::Set(parent_id),
        child_id: ActiveValue::Set(child_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
