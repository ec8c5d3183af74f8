//! Core building blocks shared by the game engines: grid topology, player
//! identity and turn rotation, and deterministic randomness.
//!
//! Nothing in this module knows about any particular game; engines compose
//! these pieces and keep their own state types.

pub mod grid;
pub mod rng;
pub mod turn;

pub use grid::Grid;
pub use rng::GameRng;
pub use turn::{PlayerId, PlayerMap, Rotation};
