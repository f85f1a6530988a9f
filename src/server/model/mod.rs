//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Each record carries its own
//! reference lists as ordered identifiers; the `*With*` types hold the same
//! lists resolved to full records.

pub mod dice;
pub mod game;
pub mod monster;
pub mod reference;
pub mod user;
