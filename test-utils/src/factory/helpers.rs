//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{dice, game, monster, reference};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a game holding one monster and one dice in its reference lists.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((game, monster, dice))` - The created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_game_with_children(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::game::Model,
        entity::monster::Model,
        entity::dice::Model,
    ),
    DbErr,
> {
    let game = game::create_game(db).await?;
    let monster = monster::create_monster(db).await?;
    let dice = dice::create_dice(db).await?;

    reference::attach(db, entity::reference::GAME_MONSTERS, game.id, monster.id).await?;
    reference::attach(db, entity::reference::GAME_DICES, game.id, dice.id).await?;

    Ok((game, monster, dice))
}
