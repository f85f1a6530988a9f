pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_user_table;
mod m20240301_000002_create_monster_table;
mod m20240301_000003_create_dice_table;
mod m20240301_000004_create_game_table;
mod m20240301_000005_create_reference_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_user_table::Migration),
            Box::new(m20240301_000002_create_monster_table::Migration),
            Box::new(m20240301_000003_create_dice_table::Migration),
            Box::new(m20240301_000004_create_game_table::Migration),
            Box::new(m20240301_000005_create_reference_table::Migration),
        ]
    }
}
