//! Reference list names.

/// A named, ordered list of child identifiers held by a parent record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceList {
    /// Monsters owned by a user.
    UserMonsters,
    /// Dice attached to a monster.
    MonsterDices,
    /// Monsters taking part in a game.
    GameMonsters,
    /// Dice used by a game.
    GameDices,
}

impl ReferenceList {
    /// Lists stored on a user record.
    pub const USER: [ReferenceList; 1] = [ReferenceList::UserMonsters];
    /// Lists stored on a game record.
    pub const GAME: [ReferenceList; 2] = [ReferenceList::GameMonsters, ReferenceList::GameDices];

    /// Value stored in the `list` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserMonsters => entity::reference::USER_MONSTERS,
            Self::MonsterDices => entity::reference::MONSTER_DICES,
            Self::GameMonsters => entity::reference::GAME_MONSTERS,
            Self::GameDices => entity::reference::GAME_DICES,
        }
    }
}
