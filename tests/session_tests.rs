//! Session state machine through the public intent API.

use brickfall::core::GameSession;
use brickfall::types::{Intent, Phase};

#[test]
fn lifecycle_transitions() {
    let mut session = GameSession::new(1);
    assert_eq!(session.phase(), Phase::Idle);

    assert!(session.handle(Intent::Start));
    assert_eq!(session.phase(), Phase::Running);
    assert!(session.running());

    assert!(session.handle(Intent::TogglePause));
    assert_eq!(session.phase(), Phase::Paused);
    assert!(session.running(), "paused sessions are still started");

    assert!(session.handle(Intent::TogglePause));
    assert_eq!(session.phase(), Phase::Running);

    assert!(session.handle(Intent::Reset));
    assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn intents_outside_their_phase_are_silently_rejected() {
    let mut session = GameSession::new(1);

    // Idle: nothing but start/reset does anything.
    let before = session.snapshot();
    assert!(!session.handle(Intent::MoveLeft));
    assert!(!session.handle(Intent::MoveRight));
    assert!(!session.handle(Intent::SoftDrop));
    assert!(!session.handle(Intent::Rotate));
    assert!(!session.handle(Intent::Tick));
    assert!(!session.handle(Intent::TogglePause));
    assert_eq!(session.snapshot(), before);

    // Paused: movement is frozen too.
    session.handle(Intent::Start);
    session.handle(Intent::TogglePause);
    let paused = session.snapshot();
    assert!(!session.handle(Intent::Tick));
    assert!(!session.handle(Intent::MoveLeft));
    assert_eq!(session.snapshot(), paused);

    // Double start is a no-op.
    session.handle(Intent::TogglePause);
    assert!(!session.handle(Intent::Start));
}

#[test]
fn gravity_and_soft_drop_both_descend_one_row() {
    let mut a = GameSession::new(5);
    let mut b = GameSession::new(5);
    a.handle(Intent::Start);
    b.handle(Intent::Start);

    a.handle(Intent::Tick);
    b.handle(Intent::SoftDrop);

    assert_eq!(a.current().y, 1);
    assert_eq!(a.current().y, b.current().y);
}

#[test]
fn horizontal_moves_translate_the_piece() {
    let mut session = GameSession::new(5);
    session.handle(Intent::Start);
    let x = session.current().x;

    assert!(session.handle(Intent::MoveLeft));
    assert_eq!(session.current().x, x - 1);
    assert!(session.handle(Intent::MoveRight));
    assert_eq!(session.current().x, x);
}

#[test]
fn level_and_interval_invariants_hold_through_play() {
    let mut session = GameSession::new(77);
    session.handle(Intent::Start);

    for _ in 0..2000 {
        if session.over() {
            break;
        }
        session.handle(Intent::SoftDrop);

        assert_eq!(session.level(), session.lines() / 10 + 1);
        let expected = 1000u32.saturating_sub((session.level() - 1) * 50).max(100);
        assert_eq!(session.fall_interval_ms(), expected);
    }
}

#[test]
fn dropping_forever_ends_the_game() {
    let mut session = GameSession::new(9);
    session.handle(Intent::Start);

    // Pieces dropped straight down can only stack; the spawn columns fill
    // up and a replacement eventually has no legal position.
    for _ in 0..5000 {
        if session.over() {
            break;
        }
        session.handle(Intent::SoftDrop);
    }

    assert!(session.over());
    assert_eq!(session.phase(), Phase::GameOver);
    assert!(!session.running());

    // Terminal until reset.
    assert!(!session.handle(Intent::Start));
    assert!(!session.handle(Intent::Tick));
    assert!(session.handle(Intent::Reset));
    assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn reset_restores_defaults_from_every_phase() {
    let mut running = GameSession::new(3);
    running.handle(Intent::Start);
    running.handle(Intent::Tick);

    let mut paused = GameSession::new(3);
    paused.handle(Intent::Start);
    paused.handle(Intent::TogglePause);

    let mut over = GameSession::new(3);
    over.handle(Intent::Start);
    for _ in 0..5000 {
        if over.over() {
            break;
        }
        over.handle(Intent::SoftDrop);
    }
    assert!(over.over());

    for mut session in [running, paused, over] {
        assert!(session.handle(Intent::Reset));
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 1);
        assert_eq!(session.lines(), 0);
        assert_eq!(session.fall_interval_ms(), 1000);

        let snap = session.snapshot();
        assert!(snap.active.is_none());
        assert!(snap.board.iter().flatten().all(|&cell| cell == 0));
    }
}

#[test]
fn snapshot_exposes_the_look_ahead_piece() {
    let mut session = GameSession::new(11);
    session.handle(Intent::Start);

    let promised = session.next_piece().kind;
    // Drop the current piece all the way so the queue advances.
    let mut advanced = false;
    for _ in 0..25 {
        session.handle(Intent::SoftDrop);
        if session.current().kind == promised && session.current().y <= 1 {
            advanced = true;
            break;
        }
    }
    assert!(advanced, "the look-ahead piece should become current");
}
