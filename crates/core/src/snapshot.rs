//! Copyable read model handed to observers.
//!
//! The UI never borrows engine internals: after each mutation it takes a
//! snapshot and renders from that, which keeps the presentation layer a
//! stateless observer of the session.

use brickfall_types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::piece::Piece;
use crate::session::GameSession;

/// The active piece, reduced to its four filled blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    /// Filled cells as offsets from the origin.
    pub blocks: [(i8, i8); 4],
}

impl From<&Piece> for PieceSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind,
            x: piece.x,
            y: piece.y,
            blocks: piece.shape().blocks(),
        }
    }
}

/// The look-ahead piece, positioned for preview drawing rather than play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewSnapshot {
    pub kind: PieceKind,
    pub width: u8,
    pub height: u8,
    pub blocks: [(i8, i8); 4],
}

impl From<&Piece> for PreviewSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind,
            width: piece.shape().width() as u8,
            height: piece.shape().height() as u8,
            blocks: piece.shape().blocks(),
        }
    }
}

/// Full observable session state at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Locked cells as piece-kind codes (0 = empty).
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// Present only while a game is in progress.
    pub active: Option<PieceSnapshot>,
    pub next: PreviewSnapshot,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub running: bool,
    pub paused: bool,
    pub over: bool,
}

impl SessionSnapshot {
    pub(crate) fn capture(session: &GameSession) -> Self {
        let mut board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        session.board().write_u8_grid(&mut board);

        let active = if session.running() && !session.over() {
            Some(PieceSnapshot::from(session.current()))
        } else {
            None
        };

        Self {
            board,
            active,
            next: PreviewSnapshot::from(session.next_piece()),
            score: session.score(),
            level: session.level(),
            lines: session.lines(),
            running: session.running(),
            paused: session.paused(),
            over: session.over(),
        }
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
}
