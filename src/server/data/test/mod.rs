mod dice;
mod game;
mod monster;
mod reference;
