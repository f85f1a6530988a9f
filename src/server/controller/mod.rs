//! HTTP request handlers.
//!
//! Each handler extracts its path and validated body, calls one service, and
//! converts the resulting domain model into a DTO. Handlers are annotated with
//! `utoipa::path` so the router can publish them in the OpenAPI document.

pub mod dice;
pub mod game;
pub mod index;
pub mod monster;
pub mod user;

#[cfg(test)]
mod test;
