//! Mancala sowing engine.
//!
//! The board is 14 cells: indices 0–5 are player 0's pits, 6 is player 0's
//! store, 7–12 are player 1's pits, 13 is player 1's store. Sowing empties
//! the chosen pit and drops one stone per step along the circular sequence,
//! skipping the opponent's store. The turn passes to the other player after
//! every sow; capture and extra-turn rules are not modeled, and the engine
//! evaluates no terminal condition.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PlayerId, Rotation};

/// Pits per player side.
pub const PITS_PER_SIDE: usize = 6;

/// Total board cells, both stores included.
pub const BOARD_LEN: usize = 14;

/// Player 0's store index.
pub const STORE_A: usize = 6;

/// Player 1's store index.
pub const STORE_B: usize = 13;

/// Stones placed in every pit at the start of a game.
pub const STARTING_STONES: u32 = 4;

/// Mancala game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mancala {
    stones: [u32; BOARD_LEN],
    turn: Rotation,
}

impl Default for Mancala {
    fn default() -> Self {
        Self::new()
    }
}

impl Mancala {
    /// Create a fresh board: [`STARTING_STONES`] in every pit, empty stores,
    /// player 0 to move.
    #[must_use]
    pub fn new() -> Self {
        let mut stones = [STARTING_STONES; BOARD_LEN];
        stones[STORE_A] = 0;
        stones[STORE_B] = 0;
        Self {
            stones,
            turn: Rotation::new(2),
        }
    }

    /// Create a board from explicit contents with the given player to move.
    #[must_use]
    pub fn from_board(stones: [u32; BOARD_LEN], active: PlayerId) -> Self {
        assert!(active.index() < 2, "Mancala is a 2-player game");
        let mut turn = Rotation::new(2);
        if active.index() == 1 {
            turn.advance();
        }
        Self { stones, turn }
    }

    /// The full board, pits and stores.
    #[must_use]
    pub fn board(&self) -> &[u32; BOARD_LEN] {
        &self.stones
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.turn.active()
    }

    /// The pit indices a player may sow from.
    #[must_use]
    pub fn pit_range(player: PlayerId) -> std::ops::Range<usize> {
        if player.index() == 0 {
            0..PITS_PER_SIDE
        } else {
            STORE_A + 1..STORE_B
        }
    }

    /// A player's store index.
    #[must_use]
    pub fn store_index(player: PlayerId) -> usize {
        if player.index() == 0 {
            STORE_A
        } else {
            STORE_B
        }
    }

    /// Stones in a player's store.
    #[must_use]
    pub fn store(&self, player: PlayerId) -> u32 {
        self.stones[Self::store_index(player)]
    }

    /// Total stones on the board. Sowing never creates or destroys stones.
    #[must_use]
    pub fn total_stones(&self) -> u32 {
        self.stones.iter().sum()
    }

    /// A pit is legal iff it belongs to the active player and is non-empty.
    #[must_use]
    pub fn legal(&self, pit: usize) -> bool {
        Self::pit_range(self.turn.active()).contains(&pit) && self.stones[pit] > 0
    }

    /// Sow from `pit`.
    ///
    /// Empties the pit and distributes one stone per step circularly,
    /// skipping the opponent's store, then passes the turn. Returns `false`
    /// (leaving the state untouched) when the pit is not a legal source.
    pub fn sow(&mut self, pit: usize) -> bool {
        if !self.legal(pit) {
            return false;
        }

        let sower = self.turn.active();
        let skip = Self::store_index(PlayerId::new(1 - sower.0));

        let mut remaining = std::mem::take(&mut self.stones[pit]);
        let mut pos = pit;
        while remaining > 0 {
            pos = (pos + 1) % BOARD_LEN;
            if pos == skip {
                continue;
            }
            self.stones[pos] += 1;
            remaining -= 1;
        }

        debug!(pit, player = %sower, landed = pos, "sowed");
        self.turn.advance();
        true
    }
}
