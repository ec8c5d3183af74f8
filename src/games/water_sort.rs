//! Water Sort pour engine.
//!
//! Six tubes, each an ordered stack of at most four color tokens with the
//! top at the end. Selection is two-phase: the first click on a non-empty
//! tube selects it as the source, the second click attempts a pour into the
//! target. A pour is legal iff the target has room and is empty or matches
//! the source's top color; exactly one token moves per pour. Clicking the
//! selected tube again, or an illegal target, clears the selection without
//! touching the tubes. The engine detects no win condition.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

/// Number of tubes on the default board.
pub const TUBE_COUNT: usize = 6;

/// Maximum tokens per tube.
pub const TUBE_CAPACITY: usize = 4;

/// A water color token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// All colors, in display order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];
}

type Tube = SmallVec<[Color; TUBE_CAPACITY]>;

/// Water Sort game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterSort {
    tubes: Vec<Tube>,
    selected: Option<usize>,
}

impl Default for WaterSort {
    fn default() -> Self {
        Self::new()
    }
}

impl WaterSort {
    /// The standard board: four full scrambled tubes and two empty ones.
    #[must_use]
    pub fn new() -> Self {
        use Color::{Blue as B, Green as G, Red as R, Yellow as Y};
        Self::from_tubes(vec![
            vec![R, B, G, Y],
            vec![Y, G, B, R],
            vec![B, Y, R, G],
            vec![G, R, Y, B],
            vec![],
            vec![],
        ])
    }

    /// Create a board from explicit tube contents (bottom to top).
    #[must_use]
    pub fn from_tubes(tubes: Vec<Vec<Color>>) -> Self {
        let tubes: Vec<Tube> = tubes
            .into_iter()
            .map(|t| {
                assert!(t.len() <= TUBE_CAPACITY, "Tube holds at most {TUBE_CAPACITY} tokens");
                Tube::from_vec(t)
            })
            .collect();
        Self {
            tubes,
            selected: None,
        }
    }

    /// All tubes, bottom to top.
    #[must_use]
    pub fn tubes(&self) -> &[Tube] {
        &self.tubes
    }

    /// One tube's contents, bottom to top.
    #[must_use]
    pub fn tube(&self, index: usize) -> &[Color] {
        &self.tubes[index]
    }

    /// The currently selected source tube, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether a single-token pour from `source` to `target` is legal.
    #[must_use]
    pub fn pour_legal(&self, source: usize, target: usize) -> bool {
        if source == target || source >= self.tubes.len() || target >= self.tubes.len() {
            return false;
        }
        let (src, dst) = (&self.tubes[source], &self.tubes[target]);
        match (src.last(), dst.last()) {
            (None, _) => false,
            (Some(_), None) => dst.len() < TUBE_CAPACITY,
            (Some(s), Some(d)) => dst.len() < TUBE_CAPACITY && s == d,
        }
    }

    /// Handle a tube click.
    ///
    /// With no selection, selects the tube when it is non-empty. With a
    /// selection, pours a single token when legal; either way the selection
    /// is cleared. Returns `false` only when the click changed nothing
    /// (empty-tube first click, or an index off the board).
    pub fn click(&mut self, tube: usize) -> bool {
        if tube >= self.tubes.len() {
            return false;
        }

        match self.selected {
            None => {
                if self.tubes[tube].is_empty() {
                    return false;
                }
                self.selected = Some(tube);
                true
            }
            Some(source) => {
                if tube != source && self.pour_legal(source, tube) {
                    if let Some(token) = self.tubes[source].pop() {
                        self.tubes[tube].push(token);
                        debug!(source, into = tube, ?token, "poured");
                    }
                }
                self.selected = None;
                true
            }
        }
    }
}
