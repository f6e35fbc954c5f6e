//! Brickfall (workspace facade crate).
//!
//! This package keeps a single `brickfall::{core,runtime,store,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use brickfall_core as core;
pub use brickfall_runtime as runtime;
pub use brickfall_store as store;
pub use brickfall_term as term;
pub use brickfall_types as types;
