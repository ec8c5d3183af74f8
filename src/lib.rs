//! # arcade-core
//!
//! Game-state engines for an offline arcade collection.
//!
//! ## Design Principles
//!
//! 1. **Independent engines**: Each game owns its board, legality rule, and
//!    transition function. There is no shared engine trait; the dispatcher
//!    is a tagged enum switched by `match`.
//!
//! 2. **Illegal moves are no-ops**: Every input is either accepted
//!    (producing the next state) or silently ignored, leaving the prior
//!    state identical. Engines never panic, error, or log a failure for an
//!    illegal move.
//!
//! 3. **Deterministic randomness**: Shuffles and random fills draw from a
//!    seeded, forkable RNG so tests can assert exact layouts.
//!
//! 4. **Presentation stays outside**: Engines expose snapshots and plain
//!    return values (state changed, schedule this delay); rendering, audio,
//!    and timers belong to the shell.
//!
//! ## Modules
//!
//! - `core`: grid topology, player identity and turns, RNG
//! - `games`: the engines: Mancala, path-connect, Water Sort, memory
//!   cards, Fruit Merge, the minimal turn/toggle games, Antistress
//! - `catalog`: game metadata, including unimplemented placeholders
//! - `session`: the dispatcher composing one active engine

pub mod catalog;
pub mod core;
pub mod games;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameRng, Grid, PlayerId, PlayerMap, Rotation};

pub use crate::catalog::{Catalog, GameInfo, GameKind};

pub use crate::session::{ActiveGame, BoardView, ClickOutcome, MoveInput, MoveRecord, Session};

pub use crate::games::antistress::{Antistress, Bubble, PressOutcome};
pub use crate::games::fruit_merge::FruitMerge;
pub use crate::games::mancala::Mancala;
pub use crate::games::memory::{FlipOutcome, MemoryMatch, REHIDE_DELAY};
pub use crate::games::path::{PathConnect, PathMode};
pub use crate::games::simple::{BlockFill, CardColor, Mark, MarkGrid, UnoCard, UnoHands};
pub use crate::games::water_sort::{Color, WaterSort};
