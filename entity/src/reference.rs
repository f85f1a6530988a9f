//! Ordered reference lists held by a parent record.
//!
//! Each row appends one child identifier to the list named by `list` on the
//! parent `parent_id`. Rows are not constrained by foreign keys; a removed
//! child leaves its identifier behind until the parent detaches it.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reference")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// List name, e.g. `game.dices`.
    pub list: String,
    pub parent_id: i32,
    pub child_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// List of monsters owned by a user.
pub const USER_MONSTERS: &str = "user.monsters";
/// List of dice attached to a monster.
pub const MONSTER_DICES: &str = "monster.dices";
/// List of monsters taking part in a game.
pub const GAME_MONSTERS: &str = "game.monsters";
/// List of dice used by a game.
pub const GAME_DICES: &str = "game.dices";
