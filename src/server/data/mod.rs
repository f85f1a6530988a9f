//! Database repository layer for all collections.
//!
//! This module contains repository structs that handle database operations for each
//! collection in the application. Repositories use SeaORM entity models internally and
//! return domain models to maintain separation between the data layer and the service
//! layer. Reference lists are stored separately and loaded into each record here.

pub mod dice;
pub mod game;
pub mod monster;
pub mod reference;
pub mod user;

#[cfg(test)]
mod test;
