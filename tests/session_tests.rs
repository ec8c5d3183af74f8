//! Dispatcher-level tests: catalog-driven starts, input routing, replay
//! determinism, and timer hygiene across game switches.

use arcade_core::catalog::{Catalog, GameKind};
use arcade_core::core::PlayerId;
use arcade_core::session::{ActiveGame, ClickOutcome, Session};

#[test]
fn test_catalog_and_session_agree_on_placeholders() {
    let catalog = Catalog::standard();

    for info in catalog.iter() {
        let session = Session::start(info.kind, 42);
        assert_eq!(
            session.is_some(),
            info.implemented,
            "{:?} catalog/session disagreement",
            info.kind
        );
    }
}

#[test]
fn test_every_playable_game_accepts_a_first_click() {
    let catalog = Catalog::standard();

    for info in catalog.playable() {
        let mut session = Session::start(info.kind, 42).unwrap();
        // Antistress is coordinate-driven; everything else takes cell 0.
        let changed = if info.kind == GameKind::Antistress {
            session.press(50.0, 50.0)
        } else {
            session.click(0) != ClickOutcome::Ignored
        };
        assert!(changed, "{:?} rejected its opening input", info.kind);
    }
}

#[test]
fn test_replay_reproduces_views() {
    let script = [0usize, 1, 7, 3, 3, 14, 2];

    for kind in [
        GameKind::Mancala,
        GameKind::NumberConnect,
        GameKind::ColorConnect,
        GameKind::WaterSort,
        GameKind::MemoryCards,
        GameKind::FruitMerge,
        GameKind::TicTacToe,
        GameKind::DotsAndBoxes,
        GameKind::BlockFill,
        GameKind::Uno,
    ] {
        let mut first = Session::start(kind, 1234).unwrap();
        let mut second = Session::start(kind, 1234).unwrap();

        for &click in &script {
            let a = first.click(click);
            let b = second.click(click);
            assert_eq!(a, b, "{kind:?} diverged on click {click}");
        }

        assert_eq!(first.view(), second.view(), "{kind:?} views diverged");
    }
}

#[test]
fn test_mancala_session_round() {
    let mut session = Session::start(GameKind::Mancala, 42).unwrap();

    assert_eq!(session.click(2), ClickOutcome::Applied);
    let view = session.view();
    assert_eq!(view.cells, vec![4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]);
    assert_eq!(view.active_player, Some(PlayerId::new(1)));

    // Player 1 may not sow from player 0's side.
    assert_eq!(session.click(0), ClickOutcome::Ignored);
    assert_eq!(session.click(8), ClickOutcome::Applied);
}

#[test]
fn test_stale_timer_after_game_switch_is_harmless() {
    let mut session = Session::start(GameKind::MemoryCards, 42).unwrap();

    // Force a mismatch so a re-hide gets scheduled.
    let ActiveGame::MemoryCards(game) = session.game() else {
        unreachable!()
    };
    let first = 0;
    let second = (1..game.len())
        .find(|&c| game.symbol(c) != game.symbol(first))
        .unwrap();
    session.click(first);
    assert!(matches!(
        session.click(second),
        ClickOutcome::LockoutScheduled(_)
    ));

    // The user leaves for another game before the timer fires; the old
    // session is discarded and the shell's late callback lands on the new
    // one.
    let mut session = Session::start(GameKind::WaterSort, 42).unwrap();
    assert!(!session.timer_fired());

    let view = session.view();
    assert_eq!(view.kind, GameKind::WaterSort);
    assert_eq!(view.cells.len(), 24);
}

#[test]
fn test_fruit_merge_score_is_monotonic() {
    let mut session = Session::start(GameKind::FruitMerge, 7).unwrap();
    let mut last = session.view().score.unwrap();

    for click in [0, 5, 5, 10, 15, 15, 15, 3] {
        session.click(click);
        let score = session.view().score.unwrap();
        assert!(score >= last, "score regressed: {last} -> {score}");
        last = score;
    }
}

#[test]
fn test_path_reset_forfeits_score() {
    let mut session = Session::start(GameKind::NumberConnect, 3).unwrap();

    session.click(0);
    session.click(1);
    let connected_score = session.view().score.unwrap();
    assert!(connected_score >= 2); // two cells of value >= 1 each

    // A far-away click restarts the chain; only the new cell counts.
    session.click(35);
    let restart_score = session.view().score.unwrap();
    assert_eq!(restart_score, session.view().cells[35]);
    assert!(restart_score <= 9);
}

#[test]
fn test_memory_session_completion_flag() {
    let mut session = Session::start(GameKind::MemoryCards, 5).unwrap();
    assert!(!session.view().complete);

    let symbols: Vec<i64> = {
        let ActiveGame::MemoryCards(game) = session.game() else {
            unreachable!()
        };
        (0..game.len()).map(|c| i64::from(game.symbol(c))).collect()
    };

    for symbol in 0..6 {
        let cells: Vec<usize> = (0..symbols.len())
            .filter(|&c| symbols[c] == symbol)
            .collect();
        session.click(cells[0]);
        session.click(cells[1]);
    }

    assert!(session.view().complete);
    assert!(session.view().cells.iter().all(|&c| c >= 0));
}

#[test]
fn test_history_survives_cheap_clones() {
    let mut session = Session::start(GameKind::BlockFill, 42).unwrap();
    session.click(0);
    session.click(1);

    let snapshot = session.clone();
    session.click(2);

    assert_eq!(snapshot.history().len(), 2);
    assert_eq!(session.history().len(), 3);
}
