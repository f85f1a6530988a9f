pub mod prelude;

pub mod dice;
pub mod game;
pub mod monster;
pub mod reference;
pub mod user;
