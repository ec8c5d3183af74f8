//! Antistress bubble field.
//!
//! A free-form field of bubbles. A press pops the topmost bubble containing
//! the point; a press on open space spawns a new bubble there with a random
//! radius. No score, no turns, no terminal condition.

use tracing::debug;

use crate::core::GameRng;

/// Smallest spawnable bubble radius.
pub const MIN_RADIUS: f32 = 10.0;

/// Largest spawnable bubble radius.
pub const MAX_RADIUS: f32 = 60.0;

/// One bubble on the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Bubble {
    /// Whether a point falls inside this bubble.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let (dx, dy) = (x - self.x, y - self.y);
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// What a press did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// An existing bubble was popped.
    Popped(u32),
    /// A new bubble was spawned.
    Spawned(u32),
}

/// Antistress game state.
///
/// Owns its RNG (for spawn radii), so it is cloneable but not serialized.
#[derive(Clone, Debug)]
pub struct Antistress {
    bubbles: Vec<Bubble>,
    next_id: u32,
    rng: GameRng,
}

impl Antistress {
    /// An empty field.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            bubbles: Vec::new(),
            next_id: 0,
            rng,
        }
    }

    /// All live bubbles, oldest first.
    #[must_use]
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// Handle a press at `(x, y)`: pop the topmost containing bubble, or
    /// spawn a new one.
    pub fn press(&mut self, x: f32, y: f32) -> PressOutcome {
        // Newest bubbles render on top, so search from the end.
        if let Some(hit) = self.bubbles.iter().rev().find(|b| b.contains(x, y)) {
            let id = hit.id;
            self.pop(id);
            return PressOutcome::Popped(id);
        }
        PressOutcome::Spawned(self.spawn(x, y))
    }

    /// Spawn a bubble at `(x, y)` with a random radius. Returns its id.
    pub fn spawn(&mut self, x: f32, y: f32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        let radius = self.rng.gen_range_f32(MIN_RADIUS..MAX_RADIUS);
        self.bubbles.push(Bubble { id, x, y, radius });
        debug!(id, x, y, radius, "bubble spawned");
        id
    }

    /// Remove the bubble with the given id. Unknown ids are no-ops.
    pub fn pop(&mut self, id: u32) -> bool {
        let before = self.bubbles.len();
        self.bubbles.retain(|b| b.id != id);
        self.bubbles.len() != before
    }
}
