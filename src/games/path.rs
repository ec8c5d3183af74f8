//! Path-building engine shared by Number Connect and Color Connect.
//!
//! Both games run on a 6×6 grid. Clicking a cell either extends the current
//! path (when the cell is 8-directionally adjacent to the path's last cell
//! and not already on the path) or restarts the path at that cell. Restart
//! is a deliberate "start a new chain" fallback, not a rejected input.
//!
//! - Numbers mode: cells hold values 1–9; the observable score is the sum of
//!   the values on the current path, recomputed on demand. A path reset
//!   forfeits the sum.
//! - Colors mode: cells hold one of [`COLOR_COUNT`] color tags; a cell may
//!   only join the path if it matches the color of the path's first cell.
//!   The observable count is the path length.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameRng, Grid};

/// Board width and height.
pub const GRID_SIDE: usize = 6;

/// Smallest cell value in Numbers mode.
pub const NUMBER_MIN: u8 = 1;

/// Largest cell value in Numbers mode.
pub const NUMBER_MAX: u8 = 9;

/// Distinct color tags in Colors mode.
pub const COLOR_COUNT: u8 = 6;

/// Which rule set the board plays under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathMode {
    /// Cells hold 1–9; score is the path's value sum.
    Numbers,
    /// Cells hold color tags; the path is single-colored.
    Colors,
}

/// Path-connect game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConnect {
    grid: Grid,
    cells: Vec<u8>,
    path: Vec<usize>,
    mode: PathMode,
}

impl PathConnect {
    /// Create a Numbers board with RNG-filled cell values.
    #[must_use]
    pub fn numbers(rng: &mut GameRng) -> Self {
        let grid = Grid::new(GRID_SIDE, GRID_SIDE);
        let cells = (0..grid.len())
            .map(|_| rng.gen_range_usize(NUMBER_MIN as usize..NUMBER_MAX as usize + 1) as u8)
            .collect();
        Self {
            grid,
            cells,
            path: Vec::new(),
            mode: PathMode::Numbers,
        }
    }

    /// Create a Colors board with RNG-filled color tags.
    #[must_use]
    pub fn colors(rng: &mut GameRng) -> Self {
        let grid = Grid::new(GRID_SIDE, GRID_SIDE);
        let cells = (0..grid.len())
            .map(|_| rng.gen_range_usize(0..COLOR_COUNT as usize) as u8)
            .collect();
        Self {
            grid,
            cells,
            path: Vec::new(),
            mode: PathMode::Colors,
        }
    }

    /// Create a board from explicit cell contents.
    #[must_use]
    pub fn from_cells(mode: PathMode, cells: Vec<u8>) -> Self {
        let grid = Grid::new(GRID_SIDE, GRID_SIDE);
        assert_eq!(cells.len(), grid.len(), "Board must hold exactly {} cells", grid.len());
        Self {
            grid,
            cells,
            path: Vec::new(),
            mode,
        }
    }

    /// The rule set in play.
    #[must_use]
    pub fn mode(&self) -> PathMode {
        self.mode
    }

    /// The grid topology.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// All cell values.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// The current path, in selection order.
    #[must_use]
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Whether `index` may extend the current path without a reset.
    #[must_use]
    pub fn extends(&self, index: usize) -> bool {
        match self.path.last() {
            None => self.grid.contains(index),
            Some(&last) => {
                self.grid.is_adjacent(last, index)
                    && !self.path.contains(&index)
                    && (self.mode == PathMode::Numbers
                        || self.cells[index] == self.cells[self.path[0]])
            }
        }
    }

    /// Handle a cell click: extend the path, or restart it at `index`.
    ///
    /// Out-of-range indices are ignored. Returns `false` only for an ignored
    /// input; both extension and restart report `true`.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.grid.contains(index) {
            return false;
        }

        if self.extends(index) {
            self.path.push(index);
        } else {
            debug!(index, "path restarted");
            self.path.clear();
            self.path.push(index);
        }
        true
    }

    /// Sum of the cell values on the current path.
    ///
    /// This is the Numbers-mode score. It is recomputed from the live path,
    /// so a reset forfeits it.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.path.iter().map(|&i| u32::from(self.cells[i])).sum()
    }

    /// Length of the current path, the Colors-mode "connected" count.
    #[must_use]
    pub fn connected(&self) -> usize {
        self.path.len()
    }
}
