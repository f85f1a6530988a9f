//! Request and response DTOs exchanged over the HTTP API.
//!
//! Field names follow the wire format clients already rely on: identifiers are
//! `_id`, game and monster reference lists are `_monsters` / `_dices`, and the
//! user's list is `monsters`.

pub mod api;
pub mod dice;
pub mod game;
pub mod monster;
pub mod user;
