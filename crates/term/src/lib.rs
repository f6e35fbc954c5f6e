//! Terminal presentation collaborator.
//!
//! Thin glue: maps keys to intents and renders session snapshots. Holds no
//! game state of its own and re-renders only when the runtime reports a
//! change.

pub mod input;
pub mod view;

pub use input::{map_key, should_quit};
pub use view::TermUi;
