//! Builder for constructing machines.

use crate::core::Symbol;
use crate::engine::{ConfigError, Machine, StateCallback, TransitionCallback};

enum TableOp<S, I> {
    Edge(S, I, S),
    Trap(S),
}

/// Builder for constructing machines with a fluent API.
///
/// Table operations are applied in the order they were added, so a later
/// `edge` or `trap` overwrites an earlier one for the same cell. The built
/// machine is unstarted and may still be edited directly.
pub struct MachineBuilder<S: Symbol, I: Symbol> {
    start: Option<S>,
    accepting: Vec<S>,
    ops: Vec<TableOp<S, I>>,
    on_entry: Option<StateCallback<S>>,
    on_exit: Option<StateCallback<S>>,
    on_transition: Option<TransitionCallback<S, I>>,
}

impl<S: Symbol, I: Symbol> MachineBuilder<S, I> {
    pub fn new() -> Self {
        Self {
            start: None,
            accepting: Vec::new(),
            ops: Vec::new(),
            on_entry: None,
            on_exit: None,
            on_transition: None,
        }
    }

    /// Set the start state. Defaults to the first declared state.
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Mark one state as accepting.
    pub fn accept(mut self, state: S) -> Self {
        self.accepting.push(state);
        self
    }

    /// Mark several states as accepting.
    pub fn accepting(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.accepting.extend(states);
        self
    }

    pub fn edge(mut self, from: S, on: I, to: S) -> Self {
        self.ops.push(TableOp::Edge(from, on, to));
        self
    }

    /// Make `state` absorbing for every input.
    pub fn trap(mut self, state: S) -> Self {
        self.ops.push(TableOp::Trap(state));
        self
    }

    pub fn on_entry<F>(mut self, callback: F) -> Self
    where
        F: FnMut(S) + Send + 'static,
    {
        self.on_entry = Some(Box::new(callback));
        self
    }

    pub fn on_exit<F>(mut self, callback: F) -> Self
    where
        F: FnMut(S) + Send + 'static,
    {
        self.on_exit = Some(Box::new(callback));
        self
    }

    pub fn on_transition<F>(mut self, callback: F) -> Self
    where
        F: FnMut(S, I, S) + Send + 'static,
    {
        self.on_transition = Some(Box::new(callback));
        self
    }

    /// Build the machine.
    /// Returns an error if either domain is empty.
    pub fn build(self) -> Result<Machine<S, I>, ConfigError> {
        let mut machine = match self.start {
            Some(start) => Machine::new(start, self.accepting)?,
            None => Machine::with_accepting(self.accepting)?,
        };

        for op in self.ops {
            match op {
                TableOp::Edge(from, on, to) => machine.add_edge(from, on, to)?,
                TableOp::Trap(state) => machine.add_trap_transitions(state)?,
            }
        }

        if let Some(callback) = self.on_entry {
            machine.set_entry_callback(callback)?;
        }
        if let Some(callback) = self.on_exit {
            machine.set_exit_callback(callback)?;
        }
        if let Some(callback) = self.on_transition {
            machine.set_transition_callback(callback)?;
        }

        Ok(machine)
    }
}

impl<S: Symbol, I: Symbol> Default for MachineBuilder<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol_enum;
    use std::sync::{Arc, Mutex};

    symbol_enum! {
        enum Door { Closed, Open, Locked }
    }

    symbol_enum! {
        enum Action { Open, Close, Lock, Unlock }
    }

    symbol_enum! {
        enum NoActions {}
    }

    #[test]
    fn builder_rejects_empty_input_domain() {
        let result = MachineBuilder::<Door, NoActions>::new().build();

        assert!(matches!(result, Err(ConfigError::EmptyInputDomain)));
    }

    #[test]
    fn builder_defaults_start_to_first_state() {
        let machine = MachineBuilder::<Door, Action>::new().build().unwrap();

        assert_eq!(machine.current_state(), Door::Closed);
        assert!(!machine.is_accepting());
    }

    #[test]
    fn fluent_api_builds_machine() {
        let mut machine = MachineBuilder::new()
            .start(Door::Locked)
            .accept(Door::Open)
            .edge(Door::Locked, Action::Unlock, Door::Closed)
            .edge(Door::Closed, Action::Open, Door::Open)
            .edge(Door::Open, Action::Close, Door::Closed)
            .edge(Door::Closed, Action::Lock, Door::Locked)
            .build()
            .unwrap();

        machine
            .process_all([Action::Unlock, Action::Open])
            .unwrap();
        assert_eq!(machine.current_state(), Door::Open);
        assert!(machine.is_accepting());
    }

    #[test]
    fn table_ops_apply_in_order() {
        let machine = MachineBuilder::new()
            .edge(Door::Open, Action::Close, Door::Closed)
            .trap(Door::Open)
            .edge(Door::Open, Action::Lock, Door::Locked)
            .build()
            .unwrap();

        assert_eq!(
            machine.next_state(Door::Open, Action::Close),
            Some(Door::Open)
        );
        assert_eq!(
            machine.next_state(Door::Open, Action::Lock),
            Some(Door::Locked)
        );
    }

    #[test]
    fn hooks_are_installed() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let entries = Arc::clone(&seen);

        let mut machine = MachineBuilder::new()
            .edge(Door::Closed, Action::Open, Door::Open)
            .on_entry(move |state: Door| entries.lock().unwrap().push(state))
            .build()
            .unwrap();

        machine.process_input(Action::Open).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![Door::Open]);
    }
}
