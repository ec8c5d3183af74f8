//! End-to-end scenario walkthroughs across the engines.

use arcade_core::core::{GameRng, PlayerId};
use arcade_core::games::mancala::Mancala;
use arcade_core::games::memory::{FlipOutcome, MemoryMatch, DEFAULT_PAIRS, REHIDE_DELAY};
use arcade_core::games::water_sort::{Color, WaterSort};

/// Opening Mancala position, player 0 sows pit 2: pits 3–5 each gain a
/// stone, the store gains one, and the turn passes.
#[test]
fn test_mancala_opening_sow() {
    let mut game = Mancala::from_board(
        [4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0],
        PlayerId::new(0),
    );

    assert!(game.sow(2));

    assert_eq!(game.board(), &[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
    assert_eq!(game.active_player(), PlayerId::new(1));
}

/// Tubes [[R, B], [G]]: selecting tube 0 then tube 1 attempts a pour whose
/// tops differ, so both tubes stay unchanged and the selection clears.
#[test]
fn test_water_sort_mismatched_pour() {
    let mut game = WaterSort::from_tubes(vec![
        vec![Color::Red, Color::Blue],
        vec![Color::Green],
    ]);

    assert!(game.click(0));
    assert_eq!(game.selected(), Some(0));

    assert!(game.click(1));

    assert_eq!(game.tube(0), &[Color::Red, Color::Blue]);
    assert_eq!(game.tube(1), &[Color::Green]);
    assert_eq!(game.selected(), None);
}

/// Twelve cells, six symbol pairs. Equal reveals match immediately and the
/// board stays unlocked; unequal reveals lock it until the timed re-hide.
#[test]
fn test_memory_match_and_mismatch_flow() {
    let mut rng = GameRng::new(42);
    let mut game = MemoryMatch::new(&mut rng);
    assert_eq!(game.len(), 12);

    // Equal pair: locate both cells of symbol 0.
    let pair: Vec<usize> = (0..game.len()).filter(|&c| game.symbol(c) == 0).collect();
    game.flip(pair[0]);
    let outcome = game.flip(pair[1]);

    assert_eq!(outcome, FlipOutcome::Matched(pair[0], pair[1]));
    assert!(game.matched(pair[0]) && game.matched(pair[1]));
    assert!(game.can_flip());

    // Unequal pair: one cell of symbol 1, one of symbol 2.
    let a = (0..game.len()).find(|&c| game.symbol(c) == 1).unwrap();
    let b = (0..game.len()).find(|&c| game.symbol(c) == 2).unwrap();
    game.flip(a);
    let outcome = game.flip(b);

    match outcome {
        FlipOutcome::Mismatch { rehide_after, .. } => assert_eq!(rehide_after, REHIDE_DELAY),
        other => panic!("expected mismatch, got {other:?}"),
    }
    assert!(!game.can_flip());

    // The deferred re-hide restores the idle state.
    assert!(game.rehide());
    assert!(game.can_flip());
    assert!(!game.revealed(a) && !game.revealed(b));

    // The earlier match survived the re-hide.
    assert!(game.matched(pair[0]) && game.matched(pair[1]));
}

/// Any shuffled board can be driven to completion.
#[test]
fn test_memory_full_clear() {
    let mut rng = GameRng::new(9001);
    let mut game = MemoryMatch::new(&mut rng);

    for symbol in 0..DEFAULT_PAIRS as u8 {
        let cells: Vec<usize> = (0..game.len())
            .filter(|&c| game.symbol(c) == symbol)
            .collect();
        assert_eq!(cells.len(), 2);
        game.flip(cells[0]);
        assert!(matches!(game.flip(cells[1]), FlipOutcome::Matched(_, _)));
    }

    assert!(game.is_complete());
}

/// A full sort: pour a tube's run token by token onto a matching target.
#[test]
fn test_water_sort_drains_a_run() {
    let mut game = WaterSort::from_tubes(vec![
        vec![Color::Blue, Color::Blue, Color::Blue],
        vec![Color::Blue],
        vec![],
    ]);

    for _ in 0..3 {
        game.click(0);
        game.click(1);
    }

    assert!(game.tube(0).is_empty());
    assert_eq!(game.tube(1).len(), 4);

    // Tube 1 is full; pouring back onto the now-empty tube 0 still works.
    game.click(1);
    game.click(0);
    assert_eq!(game.tube(1).len(), 3);
    assert_eq!(game.tube(0).len(), 1);
}
