//! The game catalog: every game the shell can offer, with display metadata.
//!
//! Two entries (Connect 4, Monopoly) are placeholders: they are listed so
//! the picker can show them, but carry `implemented = false` and
//! [`crate::session::Session::start`] refuses them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Identifies one game in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    DotsAndBoxes,
    Mancala,
    TicTacToe,
    ConnectFour,
    Uno,
    Monopoly,
    Antistress,
    BlockFill,
    WaterSort,
    FruitMerge,
    NumberConnect,
    MemoryCards,
    ColorConnect,
}

impl GameKind {
    /// Every catalog entry, in picker order.
    pub const ALL: [GameKind; 13] = [
        GameKind::DotsAndBoxes,
        GameKind::Mancala,
        GameKind::TicTacToe,
        GameKind::ConnectFour,
        GameKind::Uno,
        GameKind::Monopoly,
        GameKind::Antistress,
        GameKind::BlockFill,
        GameKind::WaterSort,
        GameKind::FruitMerge,
        GameKind::NumberConnect,
        GameKind::MemoryCards,
        GameKind::ColorConnect,
    ];
}

/// Display metadata for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub kind: GameKind,
    /// Human-readable name for the picker.
    pub name: String,
    /// How many players the game seats.
    pub players: u8,
    /// Placeholders are listed but cannot be started.
    pub implemented: bool,
}

impl GameInfo {
    /// Create an entry for a playable game.
    pub fn new(kind: GameKind, name: impl Into<String>, players: u8) -> Self {
        Self {
            kind,
            name: name.into(),
            players,
            implemented: true,
        }
    }

    /// Mark this entry as an unimplemented placeholder.
    #[must_use]
    pub fn placeholder(mut self) -> Self {
        self.implemented = false;
        self
    }
}

/// Registry of game metadata.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    games: FxHashMap<GameKind, GameInfo>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard catalog with all thirteen entries.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();

        catalog.register(GameInfo::new(GameKind::DotsAndBoxes, "Dots and Boxes", 2));
        catalog.register(GameInfo::new(GameKind::Mancala, "Mancala", 2));
        catalog.register(GameInfo::new(GameKind::TicTacToe, "Tic Tac Toe", 2));
        catalog.register(GameInfo::new(GameKind::ConnectFour, "Connect 4", 2).placeholder());
        catalog.register(GameInfo::new(GameKind::Uno, "Uno", 4));
        catalog.register(GameInfo::new(GameKind::Monopoly, "Monopoly", 4).placeholder());
        catalog.register(GameInfo::new(GameKind::Antistress, "Antistress", 1));
        catalog.register(GameInfo::new(GameKind::BlockFill, "Block Fill", 1));
        catalog.register(GameInfo::new(GameKind::WaterSort, "Water Sort", 1));
        catalog.register(GameInfo::new(GameKind::FruitMerge, "Fruit Merge", 1));
        catalog.register(GameInfo::new(GameKind::NumberConnect, "Number Connect", 1));
        catalog.register(GameInfo::new(GameKind::MemoryCards, "Color Cards", 1));
        catalog.register(GameInfo::new(GameKind::ColorConnect, "Color Connect", 1));

        catalog
    }

    /// Register a game.
    ///
    /// Panics if the kind is already registered.
    pub fn register(&mut self, info: GameInfo) {
        if self.games.contains_key(&info.kind) {
            panic!("Game {:?} already registered", info.kind);
        }
        self.games.insert(info.kind, info);
    }

    /// Get a game's metadata.
    #[must_use]
    pub fn get(&self, kind: GameKind) -> Option<&GameInfo> {
        self.games.get(&kind)
    }

    /// Check whether a kind is registered.
    #[must_use]
    pub fn contains(&self, kind: GameKind) -> bool {
        self.games.contains_key(&kind)
    }

    /// Number of registered games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Iterate over entries in picker order (registered kinds only).
    pub fn iter(&self) -> impl Iterator<Item = &GameInfo> {
        GameKind::ALL.iter().filter_map(|kind| self.games.get(kind))
    }

    /// Iterate over the playable (non-placeholder) entries in picker order.
    pub fn playable(&self) -> impl Iterator<Item = &GameInfo> {
        self.iter().filter(|info| info.implemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_complete() {
        let catalog = Catalog::standard();

        assert_eq!(catalog.len(), GameKind::ALL.len());
        for kind in GameKind::ALL {
            assert!(catalog.contains(kind), "{kind:?} missing");
        }
    }

    #[test]
    fn test_placeholders_are_flagged() {
        let catalog = Catalog::standard();

        assert!(!catalog.get(GameKind::ConnectFour).unwrap().implemented);
        assert!(!catalog.get(GameKind::Monopoly).unwrap().implemented);
        assert_eq!(catalog.playable().count(), 11);
    }

    #[test]
    fn test_iter_follows_picker_order() {
        let catalog = Catalog::standard();

        let kinds: Vec<GameKind> = catalog.iter().map(|info| info.kind).collect();
        assert_eq!(kinds, GameKind::ALL);
    }

    #[test]
    fn test_player_counts() {
        let catalog = Catalog::standard();

        assert_eq!(catalog.get(GameKind::Mancala).unwrap().players, 2);
        assert_eq!(catalog.get(GameKind::Uno).unwrap().players, 4);
        assert_eq!(catalog.get(GameKind::WaterSort).unwrap().players, 1);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_registration_panics() {
        let mut catalog = Catalog::standard();
        catalog.register(GameInfo::new(GameKind::Mancala, "Mancala", 2));
    }

    #[test]
    fn test_info_serialization() {
        let info = GameInfo::new(GameKind::WaterSort, "Water Sort", 1);
        let json = serde_json::to_string(&info).unwrap();
        let deserialized: GameInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info, deserialized);
    }
}
