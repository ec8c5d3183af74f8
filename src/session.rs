//! The dispatcher: one active game selected from the catalog.
//!
//! A [`Session`] is created at game-select time with a fresh layout, routes
//! the shell's input events to the active engine, and is dropped when the
//! user returns to the picker; no state survives it. The shell renders
//! from [`Session::view`] (or by matching on [`Session::game`]) and never
//! mutates engine state directly.
//!
//! ## Input surface
//!
//! - [`Session::click`] - the per-cell click every grid game consumes.
//! - [`Session::press`] - the coordinate press only Antistress consumes.
//! - [`Session::timer_fired`] - delivers the memory game's deferred
//!   re-hide. Safe to call late or spuriously: after a game switch it
//!   reaches a different engine (or none) and is ignored.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::GameKind;
use crate::core::{GameRng, PlayerId};
use crate::games::antistress::Antistress;
use crate::games::fruit_merge::FruitMerge;
use crate::games::mancala::Mancala;
use crate::games::memory::{FlipOutcome, MemoryMatch};
use crate::games::path::PathConnect;
use crate::games::simple::{BlockFill, Mark, MarkGrid, UnoHands};
use crate::games::water_sort::{WaterSort, TUBE_CAPACITY};

/// The active engine's state, tagged by game.
///
/// Engines share no base type; the dispatcher switches on the variant.
#[derive(Clone, Debug)]
pub enum ActiveGame {
    Mancala(Mancala),
    NumberConnect(PathConnect),
    ColorConnect(PathConnect),
    WaterSort(WaterSort),
    MemoryCards(MemoryMatch),
    FruitMerge(FruitMerge),
    TicTacToe(MarkGrid),
    DotsAndBoxes(MarkGrid),
    BlockFill(BlockFill),
    Uno(UnoHands),
    Antistress(Antistress),
}

/// One input event as recorded in the session history.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MoveInput {
    /// A cell index click.
    Cell(usize),
    /// A coordinate press (Antistress).
    Press { x: f32, y: f32 },
    /// The deferred re-hide timer.
    Timer,
}

/// A recorded input with its effect, for replay and debugging.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub input: MoveInput,
    /// Whether the input changed any state.
    pub applied: bool,
    /// Position in the session's input sequence.
    pub sequence: u32,
}

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// Precondition failed; the state is identical to before the click.
    Ignored,
    /// The state advanced.
    Applied,
    /// The state advanced and the board locked; the shell must call
    /// [`Session::timer_fired`] after the given delay.
    LockoutScheduled(Duration),
}

/// Rendering snapshot: cell values encoded as `i64`.
///
/// Per-game encoding:
///
/// | game            | cell value                                        |
/// |-----------------|---------------------------------------------------|
/// | Mancala         | stone count per pit/store                         |
/// | Tic-Tac-Toe / Dots-and-Boxes | 0 empty, 1 X, 2 O                    |
/// | Block Fill      | 0 clear, 1 filled                                 |
/// | Uno             | current hand, `color * 10 + rank` per card        |
/// | Water Sort      | 4 slots per tube, 0 empty else color + 1          |
/// | Memory cards    | -1 face-down, else the symbol value               |
/// | Fruit Merge     | 0 empty, else tier + 1                            |
/// | Number Connect  | the cell's number                                 |
/// | Color Connect   | the cell's color tag                              |
/// | Antistress      | no cells (see [`Session::game`] for the bubbles)  |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub kind: GameKind,
    pub cells: Vec<i64>,
    /// The player to act, for turn-based games.
    pub active_player: Option<PlayerId>,
    /// Score or connected-count, for the games that report one.
    pub score: Option<i64>,
    /// True once every memory cell is matched; false elsewhere.
    pub complete: bool,
}

/// One running game plus its input history.
#[derive(Clone, Debug)]
pub struct Session {
    kind: GameKind,
    game: ActiveGame,
    history: Vector<MoveRecord>,
    sequence: u32,
}

impl Session {
    /// Start a game with a fresh layout.
    ///
    /// Each randomized engine receives its own fork of the seed's stream,
    /// so layouts are deterministic per `(kind, seed)`. Returns `None` for
    /// the placeholder entries (Connect 4, Monopoly).
    #[must_use]
    pub fn start(kind: GameKind, seed: u64) -> Option<Self> {
        let mut rng = GameRng::new(seed);

        let game = match kind {
            GameKind::ConnectFour | GameKind::Monopoly => return None,
            GameKind::Mancala => ActiveGame::Mancala(Mancala::new()),
            GameKind::TicTacToe => ActiveGame::TicTacToe(MarkGrid::tic_tac_toe()),
            GameKind::DotsAndBoxes => ActiveGame::DotsAndBoxes(MarkGrid::dots_and_boxes()),
            GameKind::BlockFill => ActiveGame::BlockFill(BlockFill::new()),
            GameKind::Uno => ActiveGame::Uno(UnoHands::new()),
            GameKind::WaterSort => ActiveGame::WaterSort(WaterSort::new()),
            GameKind::NumberConnect => {
                let mut fork = rng.fork();
                ActiveGame::NumberConnect(PathConnect::numbers(&mut fork))
            }
            GameKind::ColorConnect => {
                let mut fork = rng.fork();
                ActiveGame::ColorConnect(PathConnect::colors(&mut fork))
            }
            GameKind::MemoryCards => {
                let mut fork = rng.fork();
                ActiveGame::MemoryCards(MemoryMatch::new(&mut fork))
            }
            GameKind::FruitMerge => ActiveGame::FruitMerge(FruitMerge::new(rng.fork())),
            GameKind::Antistress => ActiveGame::Antistress(Antistress::new(rng.fork())),
        };

        info!(?kind, seed, "game started");
        Some(Self {
            kind,
            game,
            history: Vector::new(),
            sequence: 0,
        })
    }

    /// Which game is running.
    #[must_use]
    pub fn kind(&self) -> GameKind {
        self.kind
    }

    /// The active engine's state, for renderers that need more than
    /// [`Session::view`].
    #[must_use]
    pub fn game(&self) -> &ActiveGame {
        &self.game
    }

    /// Every input this session received, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Route a cell click to the active engine.
    pub fn click(&mut self, index: usize) -> ClickOutcome {
        let outcome = match &mut self.game {
            ActiveGame::Mancala(game) => applied_if(game.sow(index)),
            ActiveGame::NumberConnect(game) | ActiveGame::ColorConnect(game) => {
                applied_if(game.select(index))
            }
            ActiveGame::WaterSort(game) => applied_if(game.click(index)),
            ActiveGame::MemoryCards(game) => match game.flip(index) {
                FlipOutcome::Ignored => ClickOutcome::Ignored,
                FlipOutcome::Revealed(_) | FlipOutcome::Matched(_, _) => ClickOutcome::Applied,
                FlipOutcome::Mismatch { rehide_after, .. } => {
                    ClickOutcome::LockoutScheduled(rehide_after)
                }
            },
            ActiveGame::FruitMerge(game) => applied_if(game.merge(index)),
            ActiveGame::TicTacToe(game) | ActiveGame::DotsAndBoxes(game) => {
                applied_if(game.place(index))
            }
            ActiveGame::BlockFill(game) => applied_if(game.toggle(index)),
            ActiveGame::Uno(game) => applied_if(game.play(index)),
            // Coordinate input only; cell clicks mean nothing here.
            ActiveGame::Antistress(_) => ClickOutcome::Ignored,
        };

        self.record(MoveInput::Cell(index), outcome != ClickOutcome::Ignored);
        outcome
    }

    /// Route a coordinate press (Antistress only; no-op elsewhere).
    pub fn press(&mut self, x: f32, y: f32) -> bool {
        let applied = match &mut self.game {
            ActiveGame::Antistress(field) => {
                field.press(x, y);
                true
            }
            _ => false,
        };

        self.record(MoveInput::Press { x, y }, applied);
        applied
    }

    /// Deliver the deferred re-hide. Returns whether anything changed;
    /// stale deliveries (wrong game, nothing pending) return `false`.
    pub fn timer_fired(&mut self) -> bool {
        let applied = match &mut self.game {
            ActiveGame::MemoryCards(game) => game.rehide(),
            _ => false,
        };

        if applied {
            debug!("re-hide delivered");
        }
        self.record(MoveInput::Timer, applied);
        applied
    }

    /// Snapshot for the rendering collaborator.
    #[must_use]
    pub fn view(&self) -> BoardView {
        let (cells, active_player, score, complete) = match &self.game {
            ActiveGame::Mancala(game) => (
                game.board().iter().map(|&n| i64::from(n)).collect(),
                Some(game.active_player()),
                None,
                false,
            ),
            ActiveGame::NumberConnect(game) => (
                game.cells().iter().map(|&v| i64::from(v)).collect(),
                None,
                Some(i64::from(game.score())),
                false,
            ),
            ActiveGame::ColorConnect(game) => (
                game.cells().iter().map(|&v| i64::from(v)).collect(),
                None,
                Some(game.connected() as i64),
                false,
            ),
            ActiveGame::WaterSort(game) => {
                let mut cells = Vec::with_capacity(game.tubes().len() * TUBE_CAPACITY);
                for tube in game.tubes() {
                    for slot in 0..TUBE_CAPACITY {
                        cells.push(tube.get(slot).map_or(0, |&c| c as i64 + 1));
                    }
                }
                (cells, None, None, false)
            }
            ActiveGame::MemoryCards(game) => (
                (0..game.len())
                    .map(|c| {
                        if game.revealed(c) || game.matched(c) {
                            i64::from(game.symbol(c))
                        } else {
                            -1
                        }
                    })
                    .collect(),
                None,
                None,
                game.is_complete(),
            ),
            ActiveGame::FruitMerge(game) => (
                game.cells()
                    .iter()
                    .map(|c| c.map_or(0, |t| i64::from(t) + 1))
                    .collect(),
                None,
                Some(i64::from(game.score())),
                false,
            ),
            ActiveGame::TicTacToe(game) | ActiveGame::DotsAndBoxes(game) => (
                game.cells()
                    .iter()
                    .map(|c| match c {
                        None => 0,
                        Some(Mark::X) => 1,
                        Some(Mark::O) => 2,
                    })
                    .collect(),
                Some(mark_player(game.to_move())),
                None,
                false,
            ),
            ActiveGame::BlockFill(game) => (
                game.cells().iter().map(|&b| i64::from(b)).collect(),
                None,
                None,
                false,
            ),
            ActiveGame::Uno(game) => (
                game.hand(game.active_player())
                    .iter()
                    .map(|card| card.color as i64 * 10 + i64::from(card.rank))
                    .collect(),
                Some(game.active_player()),
                None,
                false,
            ),
            ActiveGame::Antistress(_) => (Vec::new(), None, None, false),
        };

        BoardView {
            kind: self.kind,
            cells,
            active_player,
            score,
            complete,
        }
    }

    fn record(&mut self, input: MoveInput, applied: bool) {
        let sequence = self.sequence;
        self.sequence += 1;
        self.history.push_back(MoveRecord {
            input,
            applied,
            sequence,
        });
    }
}

fn applied_if(changed: bool) -> ClickOutcome {
    if changed {
        ClickOutcome::Applied
    } else {
        ClickOutcome::Ignored
    }
}

fn mark_player(mark: Mark) -> PlayerId {
    match mark {
        Mark::X => PlayerId::new(0),
        Mark::O => PlayerId::new(1),
    }
}
