//! Pairwise-match (memory card) engine.
//!
//! 2N cells hold N symbols, each appearing exactly twice, shuffled with a
//! uniform permutation. Revealing two equal cells marks both matched and
//! play continues; revealing two unequal cells locks the board and asks the
//! caller to schedule a re-hide after [`REHIDE_DELAY`].
//!
//! ## Timer protocol
//!
//! The engine never sleeps or spawns tasks. A mismatching flip returns
//! [`FlipOutcome::Mismatch`] carrying the delay; the shell schedules a
//! callback and invokes [`MemoryMatch::rehide`] when it fires. `rehide` is
//! idempotent and ignores spurious calls, so a stale callback arriving after
//! the state was torn down and rebuilt is harmless. While the board is
//! locked every flip is a no-op.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::time::Duration;
use tracing::debug;

use crate::core::GameRng;

/// How long a mismatched pair stays visible before it is hidden again.
pub const REHIDE_DELAY: Duration = Duration::from_millis(1000);

/// Symbol pairs on the default board (12 cells).
pub const DEFAULT_PAIRS: usize = 6;

/// Result of a flip attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The click changed nothing: board locked, cell out of range, or the
    /// cell was already face-up.
    Ignored,
    /// A first cell was revealed; awaiting its partner.
    Revealed(usize),
    /// Two equal cells were revealed and are now matched.
    Matched(usize, usize),
    /// Two unequal cells were revealed; the board is locked until the
    /// caller delivers `rehide` after `rehide_after`.
    Mismatch {
        first: usize,
        second: usize,
        rehide_after: Duration,
    },
}

/// Memory card game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryMatch {
    symbols: Vec<u8>,
    revealed: Vec<bool>,
    matched: Vec<bool>,
    can_flip: bool,
    pending: Option<(usize, usize)>,
}

impl MemoryMatch {
    /// Create the default board: [`DEFAULT_PAIRS`] shuffled symbol pairs.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        Self::with_pairs(DEFAULT_PAIRS, rng)
    }

    /// Create a board with `pairs` shuffled symbol pairs.
    #[must_use]
    pub fn with_pairs(pairs: usize, rng: &mut GameRng) -> Self {
        assert!(pairs > 0, "Must have at least 1 pair");
        assert!(pairs <= 255, "At most 255 symbol pairs supported");

        let mut symbols: Vec<u8> = (0..pairs as u8).chain(0..pairs as u8).collect();
        rng.shuffle(&mut symbols);

        let len = symbols.len();
        Self {
            symbols,
            revealed: vec![false; len],
            matched: vec![false; len],
            can_flip: true,
            pending: None,
        }
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the board has no cells. Boards always have at least one pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// A cell's face value. Whether it is *shown* is the renderer's concern,
    /// via [`MemoryMatch::revealed`] and [`MemoryMatch::matched`].
    #[must_use]
    pub fn symbol(&self, cell: usize) -> u8 {
        self.symbols[cell]
    }

    /// Whether a cell is currently face-up.
    #[must_use]
    pub fn revealed(&self, cell: usize) -> bool {
        self.revealed[cell]
    }

    /// Whether a cell has been matched with its partner.
    #[must_use]
    pub fn matched(&self, cell: usize) -> bool {
        self.matched[cell]
    }

    /// Whether the board accepts flips (false during the lockout window).
    #[must_use]
    pub fn can_flip(&self) -> bool {
        self.can_flip
    }

    /// Whether every cell is matched. The engine never signals completion;
    /// collaborators poll this.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched.iter().all(|&m| m)
    }

    /// Attempt to reveal a cell.
    pub fn flip(&mut self, cell: usize) -> FlipOutcome {
        if !self.can_flip
            || cell >= self.symbols.len()
            || self.revealed[cell]
            || self.matched[cell]
        {
            return FlipOutcome::Ignored;
        }

        self.revealed[cell] = true;

        let open: SmallVec<[usize; 2]> = (0..self.symbols.len())
            .filter(|&c| self.revealed[c] && !self.matched[c])
            .collect();

        if open.len() < 2 {
            return FlipOutcome::Revealed(cell);
        }

        let (first, second) = (open[0], open[1]);
        if self.symbols[first] == self.symbols[second] {
            self.matched[first] = true;
            self.matched[second] = true;
            debug!(first, second, symbol = self.symbols[first], "pair matched");
            FlipOutcome::Matched(first, second)
        } else {
            self.can_flip = false;
            self.pending = Some((first, second));
            debug!(first, second, "mismatch, locked");
            FlipOutcome::Mismatch {
                first,
                second,
                rehide_after: REHIDE_DELAY,
            }
        }
    }

    /// Hide the pending mismatched pair and unlock the board.
    ///
    /// Returns `false` when nothing was pending (stale or duplicate timer
    /// callback).
    pub fn rehide(&mut self) -> bool {
        match self.pending.take() {
            Some((first, second)) => {
                self.revealed[first] = false;
                self.revealed[second] = false;
                self.can_flip = true;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_board() -> MemoryMatch {
        // Bypass shuffling for predictable layouts: [0, 0, 1, 1, 2, 2].
        MemoryMatch {
            symbols: vec![0, 0, 1, 1, 2, 2],
            revealed: vec![false; 6],
            matched: vec![false; 6],
            can_flip: true,
            pending: None,
        }
    }

    fn open_unmatched(game: &MemoryMatch) -> usize {
        (0..game.len())
            .filter(|&c| game.revealed(c) && !game.matched(c))
            .count()
    }

    #[test]
    fn test_board_holds_every_symbol_twice() {
        let mut rng = GameRng::new(42);
        let game = MemoryMatch::new(&mut rng);

        assert_eq!(game.len(), DEFAULT_PAIRS * 2);
        for symbol in 0..DEFAULT_PAIRS as u8 {
            let count = (0..game.len()).filter(|&c| game.symbol(c) == symbol).count();
            assert_eq!(count, 2, "symbol {symbol} count");
        }
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        let a = MemoryMatch::new(&mut rng1);
        let b = MemoryMatch::new(&mut rng2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_matching_pair_stays_up_and_unlocked() {
        let mut game = fixed_board();

        assert_eq!(game.flip(0), FlipOutcome::Revealed(0));
        assert_eq!(game.flip(1), FlipOutcome::Matched(0, 1));

        assert!(game.matched(0) && game.matched(1));
        assert!(game.can_flip());
        assert_eq!(open_unmatched(&game), 0);
    }

    #[test]
    fn test_mismatch_locks_until_rehide() {
        let mut game = fixed_board();

        game.flip(0);
        let outcome = game.flip(2);
        assert_eq!(
            outcome,
            FlipOutcome::Mismatch {
                first: 0,
                second: 2,
                rehide_after: REHIDE_DELAY,
            }
        );
        assert!(!game.can_flip());

        // Clicks during the lockout window are no-ops.
        assert_eq!(game.flip(4), FlipOutcome::Ignored);
        assert!(!game.revealed(4));

        assert!(game.rehide());
        assert!(game.can_flip());
        assert!(!game.revealed(0) && !game.revealed(2));
    }

    #[test]
    fn test_rehide_without_pending_is_a_no_op() {
        let mut game = fixed_board();
        assert!(!game.rehide());

        game.flip(0);
        assert!(!game.rehide()); // single reveal pends nothing
        assert!(game.revealed(0));
    }

    #[test]
    fn test_reflip_of_face_up_cell_ignored() {
        let mut game = fixed_board();

        game.flip(0);
        assert_eq!(game.flip(0), FlipOutcome::Ignored);
        assert_eq!(open_unmatched(&game), 1);
    }

    #[test]
    fn test_matched_cells_cannot_be_flipped() {
        let mut game = fixed_board();

        game.flip(0);
        game.flip(1);
        assert_eq!(game.flip(0), FlipOutcome::Ignored);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut game = fixed_board();
        assert_eq!(game.flip(6), FlipOutcome::Ignored);
    }

    #[test]
    fn test_at_most_two_cells_open() {
        let mut game = fixed_board();

        game.flip(0);
        game.flip(2);
        game.flip(4); // locked: ignored

        assert!(open_unmatched(&game) <= 2);
    }

    #[test]
    fn test_completion_by_pairing_everything() {
        let mut rng = GameRng::new(123);
        let mut game = MemoryMatch::new(&mut rng);

        for symbol in 0..DEFAULT_PAIRS as u8 {
            let cells: Vec<usize> = (0..game.len())
                .filter(|&c| game.symbol(c) == symbol)
                .collect();
            game.flip(cells[0]);
            game.flip(cells[1]);
        }

        assert!(game.is_complete());
        assert!(game.can_flip());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut game = fixed_board();
        game.flip(0);
        game.flip(2);

        let json = serde_json::to_string(&game).unwrap();
        let deserialized: MemoryMatch = serde_json::from_str(&json).unwrap();
        assert_eq!(game, deserialized);
    }
}
