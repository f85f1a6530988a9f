pub use super::dice::Entity as Dice;
pub use super::game::Entity as Game;
pub use super::monster::Entity as Monster;
pub use super::reference::Entity as Reference;
pub use super::user::Entity as User;
