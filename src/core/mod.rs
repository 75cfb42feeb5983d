//! Domain and table primitives.
//!
//! This module holds the passive data the engine is built from:
//! - Symbol domains via the `Symbol` trait
//! - The dense transition table
//! - Accepting-state sets
//!
//! Nothing here has behavior beyond storage and lookup; the lifecycle rules
//! (freezing, hooks, reset) live in [`crate::engine`].

mod accept;
mod symbol;
mod table;

pub use accept::AcceptSet;
pub use symbol::Symbol;
pub use table::TransitionTable;
