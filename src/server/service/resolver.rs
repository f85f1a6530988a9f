//! Relationship resolution ("population") for reference lists.
//!
//! Replaces the child identifiers stored on a record with the full child records.
//! Resolution is read-only and done per request. Each target collection is fetched
//! in one query and the results are laid out in list order, so duplicates appear
//! as often as they are referenced. Identifiers whose record no longer exists are
//! skipped.
//!
//! Resolution is best effort: when a fetch fails the error is logged and the
//! affected list comes back empty instead of failing the request.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{dice::DiceRepository, monster::MonsterRepository},
    error::AppError,
    model::{
        dice::Dice,
        game::{Game, GameWithRelations},
        monster::{Monster, MonsterWithDices},
        user::{User, UserWithMonsters},
    },
};

pub struct RelationshipResolver<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RelationshipResolver<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the monsters owned by each user with a single monster query.
    pub async fn populate_users(&self, users: Vec<User>) -> Vec<UserWithMonsters> {
        let ids: Vec<i32> = users
            .iter()
            .flat_map(|user| user.monsters.iter().copied())
            .collect();
        let monsters = self.best_effort("monsters", self.fetch_monsters(&ids).await);

        users
            .into_iter()
            .map(|user| {
                let resolved = arrange(&user.monsters, &monsters);
                UserWithMonsters {
                    user,
                    monsters: resolved,
                }
            })
            .collect()
    }

    pub async fn populate_user(&self, user: User) -> UserWithMonsters {
        let monsters = self.resolve_monsters(&user.monsters).await;
        UserWithMonsters { user, monsters }
    }

    pub async fn populate_monster(&self, monster: Monster) -> MonsterWithDices {
        let dices = self.resolve_dices(&monster.dices).await;
        MonsterWithDices { monster, dices }
    }

    /// Resolves both reference lists of a game.
    pub async fn populate_game(&self, game: Game) -> GameWithRelations {
        let monsters = self.resolve_monsters(&game.monsters).await;
        let dices = self.resolve_dices(&game.dices).await;
        GameWithRelations {
            game,
            monsters,
            dices,
        }
    }

    async fn resolve_monsters(&self, ids: &[i32]) -> Vec<Monster> {
        let monsters = self.best_effort("monsters", self.fetch_monsters(ids).await);
        arrange(ids, &monsters)
    }

    async fn resolve_dices(&self, ids: &[i32]) -> Vec<Dice> {
        let dices = self.best_effort("dices", self.fetch_dices(ids).await);
        arrange(ids, &dices)
    }

    async fn fetch_monsters(&self, ids: &[i32]) -> Result<HashMap<i32, Monster>, AppError> {
        let monsters = MonsterRepository::new(self.db).find_by_ids(ids).await?;
        Ok(monsters
            .into_iter()
            .map(|monster| (monster.id, monster))
            .collect())
    }

    async fn fetch_dices(&self, ids: &[i32]) -> Result<HashMap<i32, Dice>, AppError> {
        let dices = DiceRepository::new(self.db).find_by_ids(ids).await?;
        Ok(dices.into_iter().map(|dice| (dice.id, dice)).collect())
    }

    fn best_effort<T>(&self, list: &str, result: Result<HashMap<i32, T>, AppError>) -> HashMap<i32, T> {
        result.unwrap_or_else(|err| {
            tracing::error!("Failed to resolve {}: {}", list, err);
            HashMap::new()
        })
    }
}

/// Lays out fetched records in the order of `ids`, skipping unknown identifiers.
fn arrange<T: Clone>(ids: &[i32], records: &HashMap<i32, T>) -> Vec<T> {
    ids.iter().filter_map(|id| records.get(id).cloned()).collect()
}
