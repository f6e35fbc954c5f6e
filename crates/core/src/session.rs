//! The game session: orchestrates board, pieces, scoring, and lifecycle.
//!
//! The session is a strictly serialized state machine. Callers submit
//! intents through [`GameSession::handle`] (or the named methods); an intent
//! arriving outside its valid phase is silently rejected, which is the
//! normal case for a game loop (rotate while paused, tick after game over).
//!
//! Lifecycle: Idle -> Running <-> Paused -> GameOver, with `reset` returning
//! to Idle from anywhere.

use brickfall_types::{Intent, Phase};

use crate::board::Board;
use crate::collision::collides;
use crate::piece::{Piece, PieceFactory};
use crate::scoring::{fall_interval_ms, level_for_lines, score_for_clear};
use crate::snapshot::SessionSnapshot;

/// Result of the most recent lock, consumed by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOutcome {
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// The replacement piece had no legal spawn position.
    pub game_over: bool,
}

/// Complete game state and the intent API consumed by the outside world.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    factory: PieceFactory,
    current: Piece,
    next: Piece,
    score: u32,
    level: u32,
    lines: u32,
    running: bool,
    paused: bool,
    over: bool,
    last_lock: Option<LockOutcome>,
}

impl GameSession {
    /// Create a fresh session in the Idle phase.
    pub fn new(seed: u32) -> Self {
        let mut factory = PieceFactory::new(seed);
        let current = factory.next_piece();
        let next = factory.next_piece();
        Self {
            board: Board::new(),
            factory,
            current,
            next,
            score: 0,
            level: 1,
            lines: 0,
            running: false,
            paused: false,
            over: false,
            last_lock: None,
        }
    }

    /// Dispatch an intent. Returns whether any observable state changed.
    pub fn handle(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Start => self.start(),
            Intent::TogglePause => self.toggle_pause(),
            Intent::Reset => self.reset(),
            Intent::MoveLeft => self.move_left(),
            Intent::MoveRight => self.move_right(),
            Intent::SoftDrop => self.soft_drop(),
            Intent::Rotate => self.rotate(),
            Intent::Tick => self.tick(),
        }
    }

    /// Begin play. Valid only from Idle.
    pub fn start(&mut self) -> bool {
        if self.running || self.over {
            return false;
        }
        self.running = true;
        self.paused = false;
        true
    }

    /// Toggle Running <-> Paused. No-op in Idle and GameOver.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Reinitialize everything and return to Idle. Valid from any phase.
    ///
    /// The factory is reseeded from its live RNG state so consecutive games
    /// see different sequences while fixed-seed tests stay deterministic.
    pub fn reset(&mut self) -> bool {
        *self = Self::new(self.factory.state());
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Player-issued single-row descent.
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Timer-issued gravity descent.
    pub fn tick(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Rotate the current piece 90° clockwise, if the rotated matrix fits at
    /// the unchanged origin. No kick offsets are attempted: a piece against
    /// a wall may simply fail to rotate.
    pub fn rotate(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        let rotated = self.current.shape().rotated();
        if collides(&self.board, &self.current, 0, 0, Some(&rotated)) {
            return false;
        }
        self.current.set_shape(rotated);
        true
    }

    /// Attempt to translate the current piece.
    ///
    /// A downward move that lands on support locks immediately: either the
    /// move itself is blocked (piece already resting), or the move succeeds
    /// and the cell below is now blocked (piece just touched down). The
    /// piece never waits an extra tick once it is down.
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.playable() {
            return false;
        }
        if !collides(&self.board, &self.current, dx, dy, None) {
            self.current.translate(dx, dy);
            if dy > 0 && collides(&self.board, &self.current, 0, 1, None) {
                self.lock_and_advance();
            }
            true
        } else if dy > 0 {
            self.lock_and_advance();
            true
        } else {
            false
        }
    }

    /// Lock the current piece, clear lines, apply scoring, and bring in the
    /// next piece. A replacement that spawns into a collision ends the game.
    fn lock_and_advance(&mut self) {
        self.board.lock(&self.current);

        let cleared = self.board.clear_full_rows().len();
        let mut score_delta = 0;
        if cleared > 0 {
            score_delta = score_for_clear(cleared, self.level);
            self.score += score_delta;
            self.lines += cleared as u32;
            self.level = level_for_lines(self.lines);
        }

        self.current = std::mem::replace(&mut self.next, self.factory.next_piece());

        let game_over = collides(&self.board, &self.current, 0, 0, None);
        if game_over {
            self.over = true;
            self.running = false;
        }

        self.last_lock = Some(LockOutcome {
            lines_cleared: cleared as u32,
            score_delta,
            game_over,
        });
    }

    fn playable(&self) -> bool {
        self.running && !self.paused && !self.over
    }

    /// Take the outcome of the most recent lock, if any.
    pub fn take_last_lock(&mut self) -> Option<LockOutcome> {
        self.last_lock.take()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn over(&self) -> bool {
        self.over
    }

    pub fn phase(&self) -> Phase {
        if self.over {
            Phase::GameOver
        } else if !self.running {
            Phase::Idle
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Running
        }
    }

    /// Gravity interval for the current level.
    pub fn fall_interval_ms(&self) -> u32 {
        fall_interval_ms(self.level)
    }

    /// Copy out the read model for observers.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }
}
