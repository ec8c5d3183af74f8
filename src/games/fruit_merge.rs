//! Merge/cascade engine (Fruit Merge).
//!
//! A 4×4 grid of symbols drawn from an ordered tier list. Clicking a cell
//! advances it one tier (below the top tier) and scores
//! `(tier_index + 1) * 10` points. After every merge one uniformly-chosen
//! empty cell, if any exist, is refilled with a random low-tier symbol.
//!
//! No operation here ever vacates a cell, so the refill branch never fires
//! on a board produced by this engine.

use tracing::debug;

use crate::core::GameRng;

/// Cells per row and rows per board.
pub const GRID_SIDE: usize = 4;

/// Number of symbol tiers.
pub const TIER_COUNT: u8 = 8;

/// New symbols spawn uniformly from tiers `0..SPAWN_TIERS`.
pub const SPAWN_TIERS: u8 = 3;

/// Fruit Merge game state.
///
/// Owns its RNG (for the refill draw), so it is cloneable but not
/// serialized.
#[derive(Clone, Debug)]
pub struct FruitMerge {
    cells: Vec<Option<u8>>,
    score: u32,
    rng: GameRng,
}

impl FruitMerge {
    /// Create a board with every cell seeded from the low spawn tiers.
    #[must_use]
    pub fn new(mut rng: GameRng) -> Self {
        let cells = (0..GRID_SIDE * GRID_SIDE)
            .map(|_| Some(rng.gen_range_usize(0..SPAWN_TIERS as usize) as u8))
            .collect();
        Self {
            cells,
            score: 0,
            rng,
        }
    }

    /// All cells; `None` is an empty cell.
    #[must_use]
    pub fn cells(&self) -> &[Option<u8>] {
        &self.cells
    }

    /// One cell's tier, or `None` when empty.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<u8> {
        self.cells[index]
    }

    /// Accumulated score. Non-decreasing.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Merge the cell at `index` up one tier, then refill one empty cell
    /// (if any exist) with a low-tier symbol.
    ///
    /// A top-tier cell neither advances nor scores. Returns `false` when
    /// the click changed nothing.
    pub fn merge(&mut self, index: usize) -> bool {
        if index >= self.cells.len() {
            return false;
        }

        let advanced = match self.cells[index] {
            Some(tier) if tier + 1 < TIER_COUNT => {
                self.cells[index] = Some(tier + 1);
                self.score += (u32::from(tier) + 1) * 10;
                debug!(index, tier = tier + 1, score = self.score, "merged");
                true
            }
            // Top tier: nothing to advance into.
            Some(_) => false,
            // A vacant cell seeds at the lowest tier for zero points.
            None => {
                self.cells[index] = Some(0);
                true
            }
        };

        let refilled = self.refill_one();
        advanced || refilled
    }

    /// Fill one uniformly-chosen empty cell with a spawn-tier symbol.
    fn refill_one(&mut self) -> bool {
        let empties: Vec<usize> = (0..self.cells.len())
            .filter(|&i| self.cells[i].is_none())
            .collect();

        match self.rng.choose(&empties).copied() {
            Some(slot) => {
                self.cells[slot] = Some(self.rng.gen_range_usize(0..SPAWN_TIERS as usize) as u8);
                true
            }
            None => false,
        }
    }
}
