//! Deterministic game engine core.
//!
//! This crate contains the complete rules of the game: the shape table,
//! rotation, collision, the board with line clearing, scoring, and the
//! session state machine that ties them together. It performs no I/O and
//! spawns no threads, so the same seed always produces the same game.
//!
//! # Module structure
//!
//! - [`shape`]: canonical orientation matrices and the 90° rotation
//! - [`piece`]: the falling piece and the uniform-random piece factory
//! - [`rng`]: seedable LCG backing the factory
//! - [`board`]: 10x20 cell grid, piece locking, full-row clearing
//! - [`collision`]: the pure overlap check used by moves, rotation, spawning
//! - [`scoring`]: line scores, level progression, fall interval
//! - [`session`]: the intent-driven orchestrator and its lifecycle flags
//! - [`snapshot`]: copyable read model handed to observers
//!
//! # Example
//!
//! ```
//! use brickfall_core::GameSession;
//! use brickfall_types::Intent;
//!
//! let mut session = GameSession::new(12345);
//! session.handle(Intent::Start);
//! session.handle(Intent::MoveLeft);
//! session.handle(Intent::Tick);
//!
//! assert!(session.running());
//! assert_eq!(session.level(), 1);
//! ```

pub mod board;
pub mod collision;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use board::Board;
pub use collision::collides;
pub use piece::{Piece, PieceFactory};
pub use rng::SimpleRng;
pub use session::{GameSession, LockOutcome};
pub use shape::Shape;
pub use snapshot::{PieceSnapshot, PreviewSnapshot, SessionSnapshot};
