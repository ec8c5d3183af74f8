//! Minimal turn-based and toggle engines.
//!
//! These are intentionally small: no win detection, no rule validation
//! beyond "the cell must be empty" or "it must be your turn".
//!
//! - [`MarkGrid`] backs both Tic-Tac-Toe (3×3) and Dot-and-Boxes (5×5):
//!   click an empty cell, stamp the current player's mark, flip the player.
//! - [`BlockFill`] is a stateless 6×6 toggle with no turn concept.
//! - [`UnoHands`] holds four hands; playing any card from the current hand
//!   removes it and advances the turn modulo 4.

use serde::{Deserialize, Serialize};

use crate::core::{Grid, PlayerId, PlayerMap, Rotation};

/// A player's mark on a [`MarkGrid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    #[must_use]
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Stamp-and-flip board shared by Tic-Tac-Toe and Dot-and-Boxes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkGrid {
    grid: Grid,
    cells: Vec<Option<Mark>>,
    to_move: Mark,
}

impl MarkGrid {
    /// A 3×3 Tic-Tac-Toe board, X to move.
    #[must_use]
    pub fn tic_tac_toe() -> Self {
        Self::with_grid(Grid::new(3, 3))
    }

    /// A 5×5 Dot-and-Boxes board, X to move.
    #[must_use]
    pub fn dots_and_boxes() -> Self {
        Self::with_grid(Grid::new(5, 5))
    }

    /// An empty board over an arbitrary grid.
    #[must_use]
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            cells: vec![None; grid.len()],
            to_move: Mark::X,
        }
    }

    /// The grid topology.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// All cells.
    #[must_use]
    pub fn cells(&self) -> &[Option<Mark>] {
        &self.cells
    }

    /// One cell's mark, if stamped.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells[index]
    }

    /// The mark that moves next.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Stamp the current mark at `index` and flip the turn.
    ///
    /// Occupied or out-of-range cells are no-ops.
    pub fn place(&mut self, index: usize) -> bool {
        if !self.grid.contains(index) || self.cells[index].is_some() {
            return false;
        }
        self.cells[index] = Some(self.to_move);
        self.to_move = self.to_move.other();
        true
    }
}

/// Stateless per-cell toggle board (Block Fill).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockFill {
    grid: Grid,
    cells: Vec<bool>,
}

impl Default for BlockFill {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockFill {
    /// A 6×6 board with every cell clear.
    #[must_use]
    pub fn new() -> Self {
        let grid = Grid::new(6, 6);
        Self {
            grid,
            cells: vec![false; grid.len()],
        }
    }

    /// All cells.
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Whether a cell is filled.
    #[must_use]
    pub fn filled(&self, index: usize) -> bool {
        self.cells[index]
    }

    /// Flip one cell. Out-of-range clicks are no-ops.
    pub fn toggle(&mut self, index: usize) -> bool {
        if !self.grid.contains(index) {
            return false;
        }
        self.cells[index] = !self.cells[index];
        true
    }
}

/// A card color in the four-player card game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
}

/// A card: color plus rank digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnoCard {
    pub color: CardColor,
    pub rank: u8,
}

impl UnoCard {
    /// Create a card.
    #[must_use]
    pub const fn new(color: CardColor, rank: u8) -> Self {
        Self { color, rank }
    }
}

/// Four hands with play-anything rules: the current player discards any
/// card by index and the turn advances modulo 4. No validation beyond
/// "the index must exist in the current hand".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnoHands {
    hands: PlayerMap<Vec<UnoCard>>,
    turn: Rotation,
}

impl Default for UnoHands {
    fn default() -> Self {
        Self::new()
    }
}

impl UnoHands {
    /// The standard four-card deal.
    #[must_use]
    pub fn new() -> Self {
        use CardColor::{Blue, Green, Red, Yellow};

        const DEALS: [[UnoCard; 4]; 4] = [
            [
                UnoCard::new(Red, 7),
                UnoCard::new(Blue, 3),
                UnoCard::new(Green, 5),
                UnoCard::new(Yellow, 2),
            ],
            [
                UnoCard::new(Red, 4),
                UnoCard::new(Blue, 8),
                UnoCard::new(Green, 1),
                UnoCard::new(Yellow, 6),
            ],
            [
                UnoCard::new(Red, 9),
                UnoCard::new(Blue, 2),
                UnoCard::new(Green, 7),
                UnoCard::new(Yellow, 3),
            ],
            [
                UnoCard::new(Red, 1),
                UnoCard::new(Blue, 5),
                UnoCard::new(Green, 8),
                UnoCard::new(Yellow, 9),
            ],
        ];

        Self {
            hands: PlayerMap::new(4, |p| DEALS[p.index()].to_vec()),
            turn: Rotation::new(4),
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.turn.active()
    }

    /// One player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[UnoCard] {
        &self.hands[player]
    }

    /// Cards left per player.
    #[must_use]
    pub fn hand_sizes(&self) -> Vec<usize> {
        self.hands.iter().map(|(_, hand)| hand.len()).collect()
    }

    /// Play (discard) the current player's card at `card_index` and advance
    /// the turn. Out-of-range indices are no-ops.
    pub fn play(&mut self, card_index: usize) -> bool {
        let player = self.turn.active();
        if card_index >= self.hands[player].len() {
            return false;
        }
        self.hands[player].remove(card_index);
        self.turn.advance();
        true
    }
}
