//! Shared types and constants for the brickfall workspace.
//!
//! Everything here is pure data with no external dependencies, usable from
//! the engine core, the runtime driver, and the terminal front end alike.

/// Board dimensions in cells.
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity pacing (milliseconds).
pub const BASE_FALL_MS: u32 = 1000;
pub const FALL_STEP_MS: u32 = 50;
pub const FALL_FLOOR_MS: u32 = 100;

/// Lines required to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Points awarded per simultaneous clear, indexed by line count (0..=4).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Maximum number of ranked results kept by the high-score store.
pub const HIGH_SCORE_CAP: usize = 10;

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in canonical order. Used for uniform random selection.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Compact cell code (1..=7). Zero is reserved for empty cells.
    pub fn code(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`code`](Self::code).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Cell on the board (None = empty, Some = locked piece kind).
pub type Cell = Option<PieceKind>;

/// An intent submitted to the game session, by the player or the gravity
/// timer. Intents outside their valid phase are silently rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start,
    TogglePause,
    Reset,
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    /// Timer-driven forced one-row descent. Equivalent to a soft drop but
    /// originating from the gravity path.
    Tick,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Start => "start",
            Intent::TogglePause => "togglePause",
            Intent::Reset => "reset",
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::Rotate => "rotate",
            Intent::Tick => "tick",
        }
    }
}

/// Session lifecycle phase, derived from the running/paused/over flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "gameOver",
        }
    }
}
