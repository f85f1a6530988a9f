//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let game = factory::game::create_game(&db).await?;
//!     let dice = factory::dice::create_dice(&db).await?;
//!
//!     // Attach the dice to the game's reference list
//!     factory::reference::attach(&db, entity::reference::GAME_DICES, game.id, dice.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let dice = factory::dice::DiceFactory::new(&db)
//!     .dice_type(20)
//!     .objective(Some(12))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `monster` - Create monster entities
//! - `dice` - Create dice entities
//! - `game` - Create game entities
//! - `reference` - Append child identifiers to a parent's reference list
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod dice;
pub mod game;
pub mod helpers;
pub mod monster;
pub mod reference;
pub mod user;

pub use dice::create_dice;
pub use game::create_game;
pub use monster::create_monster;
pub use user::create_user;
