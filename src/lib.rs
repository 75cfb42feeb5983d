//! Tabula: a table-driven deterministic finite state machine engine.
//!
//! A machine is defined by two closed domains, the states and the inputs,
//! and a dense table mapping each (state, input) pair to an optional next
//! state. Inputs are fed one at a time; each one either follows its edge or
//! is rejected, leaving the machine untouched.
//!
//! # Core Concepts
//!
//! - **Symbol**: closed, densely indexed domains via the `Symbol` trait
//! - **Transition table**: dense `|S| × |I|` lookup, frozen once running
//! - **Hooks**: optional exit, transition and entry callbacks, fired in that
//!   order on every transition
//! - **Acceptance**: a subset of states reported by `is_accepting`
//!
//! # Example
//!
//! A recognizer for binary numbers divisible by three:
//!
//! ```rust
//! use tabula::{symbol_enum, MachineBuilder};
//!
//! symbol_enum! {
//!     enum Rem { A, B, C }
//! }
//! symbol_enum! {
//!     enum Bit { Zero, One }
//! }
//!
//! let mut machine = MachineBuilder::new()
//!     .start(Rem::A)
//!     .accept(Rem::A)
//!     .edge(Rem::A, Bit::Zero, Rem::A)
//!     .edge(Rem::A, Bit::One, Rem::B)
//!     .edge(Rem::B, Bit::Zero, Rem::C)
//!     .edge(Rem::B, Bit::One, Rem::A)
//!     .edge(Rem::C, Bit::Zero, Rem::B)
//!     .edge(Rem::C, Bit::One, Rem::C)
//!     .build()?;
//!
//! // 6 = 0b110
//! machine.process_all([Bit::One, Bit::One, Bit::Zero])?;
//! assert!(machine.is_accepting());
//!
//! // 5 = 0b101
//! machine.reset();
//! machine.process_all([Bit::One, Bit::Zero, Bit::One])?;
//! assert_eq!(machine.current_state(), Rem::C);
//! assert!(!machine.is_accepting());
//! # Ok::<(), tabula::Error>(())
//! ```

pub mod builder;
pub mod core;
pub mod definition;
pub mod engine;

// Re-export commonly used types
pub use builder::MachineBuilder;
pub use crate::core::{AcceptSet, Symbol, TransitionTable};
pub use definition::{DefinitionError, MachineDefinition};
pub use engine::{ConfigError, Error, InvalidInput, Machine};
