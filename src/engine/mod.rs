//! The transition engine and its lifecycle.
//!
//! A [`Machine`] owns a transition table, an accepting set, a start and a
//! current state, and up to three hooks. It moves through two phases:
//!
//! - **Unstarted**: edges and hooks may be added or replaced.
//! - **Started**: entered on the first processed input and never left.
//!   The table and hooks are frozen; inputs, resets and queries still work.
//!
//! Running several machines over one table is done by sharing the table
//! (see [`Machine::shared_table`]) and giving each driver its own machine.

mod error;
mod hooks;
mod machine;

pub use error::{ConfigError, Error, InvalidInput};
pub use hooks::{StateCallback, TransitionCallback};
pub use machine::Machine;
