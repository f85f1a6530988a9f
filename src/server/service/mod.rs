//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Orchestration**: Sequencing the child-create and parent-update writes of add-child
//!   operations and the parent-only writes of remove-child operations
//! - **Population**: Resolving reference lists into full records on read
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! No operation here is transactional. A failure between two writes leaves the
//! first write in place.

pub mod dice;
pub mod game;
pub mod monster;
pub mod resolver;
pub mod user;

#[cfg(test)]
mod test;
