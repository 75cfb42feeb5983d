//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder and a declaration macro for
//! creating machines with minimal boilerplate while keeping the domains
//! closed and type checked.

pub mod machine;
pub mod macros;

pub use machine::MachineBuilder;

use crate::core::Symbol;
use crate::engine::{ConfigError, Machine};

/// Build a machine from an edge list, starting in `start` and accepting
/// the states in `accepting`.
///
/// # Example
///
/// ```
/// use tabula::builder::from_edges;
/// use tabula::symbol_enum;
///
/// symbol_enum! {
///     enum Parity { Even, Odd }
/// }
/// symbol_enum! {
///     enum Bit { Zero, One }
/// }
///
/// let mut machine = from_edges(
///     Parity::Even,
///     [Parity::Even],
///     [
///         (Parity::Even, Bit::Zero, Parity::Even),
///         (Parity::Even, Bit::One, Parity::Odd),
///         (Parity::Odd, Bit::Zero, Parity::Odd),
///         (Parity::Odd, Bit::One, Parity::Even),
///     ],
/// )
/// .unwrap();
///
/// machine.process_all([Bit::One, Bit::One]).unwrap();
/// assert!(machine.is_accepting());
/// ```
pub fn from_edges<S, I>(
    start: S,
    accepting: impl IntoIterator<Item = S>,
    edges: impl IntoIterator<Item = (S, I, S)>,
) -> Result<Machine<S, I>, ConfigError>
where
    S: Symbol,
    I: Symbol,
{
    let mut machine = Machine::new(start, accepting)?;
    for (from, on, to) in edges {
        machine.add_edge(from, on, to)?;
    }
    Ok(machine)
}
