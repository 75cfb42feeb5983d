//! Declarative machine definitions.
//!
//! A [`MachineDefinition`] describes a machine's table by symbol name so it
//! can live in a configuration file instead of code:
//!
//! ```json
//! {
//!   "start": "A",
//!   "accepting": ["A"],
//!   "edges": [
//!     { "from": "A", "input": "Zero", "to": "A" },
//!     { "from": "A", "input": "One",  "to": "B" }
//!   ],
//!   "traps": ["C"]
//! }
//! ```
//!
//! Only the table is described. A running machine's current state is never
//! written out.

use crate::core::Symbol;
use crate::engine::Machine;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::DefinitionError;

/// One edge, by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub from: String,
    pub input: String,
    pub to: String,
}

/// Name-based description of a machine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineDefinition {
    /// Start state. Defaults to the first declared state.
    #[serde(default)]
    pub start: Option<String>,

    #[serde(default)]
    pub accepting: Vec<String>,

    /// Applied in order; a later edge for the same cell wins.
    #[serde(default)]
    pub edges: Vec<EdgeDefinition>,

    /// States made absorbing, applied after `edges`.
    #[serde(default)]
    pub traps: Vec<String>,
}

fn resolve<T: Symbol>(domain: &'static str, name: &str) -> Result<T, DefinitionError> {
    T::from_name(name).ok_or_else(|| DefinitionError::UnknownSymbol {
        domain,
        name: name.to_string(),
    })
}

impl MachineDefinition {
    /// Parse a definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render this definition as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DefinitionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Describe the table of an existing machine.
    pub fn from_machine<S: Symbol, I: Symbol>(machine: &Machine<S, I>) -> Self {
        Self {
            start: Some(machine.start_state().name().to_string()),
            accepting: machine
                .accept_set()
                .iter()
                .map(|s| s.name().to_string())
                .collect(),
            edges: machine
                .table()
                .edges()
                .map(|(from, input, to)| EdgeDefinition {
                    from: from.name().to_string(),
                    input: input.name().to_string(),
                    to: to.name().to_string(),
                })
                .collect(),
            traps: Vec::new(),
        }
    }

    /// Build an unstarted machine over the domains `S` and `I`.
    ///
    /// Every name is resolved before the machine is created, so an unknown
    /// name never yields a partially configured machine.
    pub fn build<S: Symbol, I: Symbol>(&self) -> Result<Machine<S, I>, DefinitionError> {
        let start = self
            .start
            .as_deref()
            .map(|name| resolve::<S>("state", name))
            .transpose()?;
        let accepting = self
            .accepting
            .iter()
            .map(|name| resolve::<S>("state", name))
            .collect::<Result<Vec<_>, _>>()?;
        let edges = self
            .edges
            .iter()
            .map(|edge| -> Result<(S, I, S), DefinitionError> {
                Ok((
                    resolve::<S>("state", &edge.from)?,
                    resolve::<I>("input", &edge.input)?,
                    resolve::<S>("state", &edge.to)?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let traps = self
            .traps
            .iter()
            .map(|name| resolve::<S>("state", name))
            .collect::<Result<Vec<_>, _>>()?;

        let mut machine = match start {
            Some(start) => Machine::new(start, accepting)?,
            None => Machine::with_accepting(accepting)?,
        };
        for (from, on, to) in edges {
            machine.add_edge(from, on, to)?;
        }
        for state in traps {
            machine.add_trap_transitions(state)?;
        }

        Ok(machine)
    }
}
