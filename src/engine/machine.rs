//! The transition engine.

use crate::core::{AcceptSet, Symbol, TransitionTable};
use crate::engine::error::{ConfigError, InvalidInput};
use crate::engine::hooks::Hooks;
use std::sync::Arc;
use tracing::{debug, trace};

/// Deterministic finite state machine driven by a dense transition table.
///
/// A machine starts out *unstarted*: edges and hooks may be added freely,
/// and the current state may be queried or reset. The first call to
/// [`process_input`](Machine::process_input) latches the machine *started*,
/// whether or not that input had an edge. From then on the table and hooks
/// are frozen and every mutator returns [`ConfigError::AlreadyStarted`].
///
/// # Example
///
/// ```rust
/// use tabula::engine::Machine;
/// use tabula::symbol_enum;
///
/// symbol_enum! {
///     enum Turnstile { Locked, Unlocked }
/// }
/// symbol_enum! {
///     enum Action { Coin, Push }
/// }
///
/// let mut machine = Machine::<Turnstile, Action>::with_start(Turnstile::Locked)?;
/// machine.add_edge(Turnstile::Locked, Action::Coin, Turnstile::Unlocked)?;
/// machine.add_edge(Turnstile::Unlocked, Action::Push, Turnstile::Locked)?;
///
/// machine.process_input(Action::Coin)?;
/// assert_eq!(machine.current_state(), Turnstile::Unlocked);
///
/// assert!(machine.process_input(Action::Coin).is_err());
/// assert_eq!(machine.current_state(), Turnstile::Unlocked);
/// # Ok::<(), tabula::engine::Error>(())
/// ```
#[derive(Debug)]
pub struct Machine<S: Symbol, I: Symbol> {
    table: Arc<TransitionTable<S, I>>,
    hooks: Hooks<S, I>,
    accepting: AcceptSet<S>,
    start: S,
    current: S,
    started: bool,
}

impl<S: Symbol, I: Symbol> Machine<S, I> {
    /// Create a machine with an empty table.
    ///
    /// Fails if either domain has no members.
    pub fn new(start: S, accepting: impl IntoIterator<Item = S>) -> Result<Self, ConfigError> {
        Self::from_shared_table(Arc::new(TransitionTable::new()), start, accepting)
    }

    /// Start in the first declared state; accept nothing.
    pub fn from_domains() -> Result<Self, ConfigError> {
        let start = S::first().ok_or(ConfigError::EmptyStateDomain)?;
        Self::new(start, std::iter::empty())
    }

    /// Start in `start`; accept nothing.
    pub fn with_start(start: S) -> Result<Self, ConfigError> {
        Self::new(start, std::iter::empty())
    }

    /// Start in the first declared state.
    pub fn with_accepting(accepting: impl IntoIterator<Item = S>) -> Result<Self, ConfigError> {
        let start = S::first().ok_or(ConfigError::EmptyStateDomain)?;
        Self::new(start, accepting)
    }

    /// Create a machine over an existing table.
    ///
    /// The table is shared, not copied. If this machine later adds edges
    /// before it has started, it takes a private copy first, so other
    /// machines holding the same table never observe the change.
    pub fn from_shared_table(
        table: Arc<TransitionTable<S, I>>,
        start: S,
        accepting: impl IntoIterator<Item = S>,
    ) -> Result<Self, ConfigError> {
        if S::count() == 0 {
            return Err(ConfigError::EmptyStateDomain);
        }
        if I::count() == 0 {
            return Err(ConfigError::EmptyInputDomain);
        }

        Ok(Self {
            table,
            hooks: Hooks::new(),
            accepting: accepting.into_iter().collect(),
            start,
            current: start,
            started: false,
        })
    }

    fn ensure_unstarted(&self, operation: &'static str) -> Result<(), ConfigError> {
        if self.started {
            return Err(ConfigError::AlreadyStarted { operation });
        }
        Ok(())
    }

    /// Define the edge `from --on--> to`, replacing any existing edge for
    /// `(from, on)`.
    pub fn add_edge(&mut self, from: S, on: I, to: S) -> Result<(), ConfigError> {
        self.ensure_unstarted("add a transition")?;
        Arc::make_mut(&mut self.table).set(from, on, to);
        Ok(())
    }

    /// Make `state` absorbing: every input loops back to it.
    pub fn add_trap_transitions(&mut self, state: S) -> Result<(), ConfigError> {
        self.ensure_unstarted("add a transition")?;
        let table = Arc::make_mut(&mut self.table);
        for &input in I::ALL {
            table.set(state, input, state);
        }
        Ok(())
    }

    pub fn set_entry_callback<F>(&mut self, callback: F) -> Result<(), ConfigError>
    where
        F: FnMut(S) + Send + 'static,
    {
        self.ensure_unstarted("set a callback")?;
        self.hooks.on_entry = Some(Box::new(callback));
        Ok(())
    }

    pub fn set_exit_callback<F>(&mut self, callback: F) -> Result<(), ConfigError>
    where
        F: FnMut(S) + Send + 'static,
    {
        self.ensure_unstarted("set a callback")?;
        self.hooks.on_exit = Some(Box::new(callback));
        Ok(())
    }

    pub fn set_transition_callback<F>(&mut self, callback: F) -> Result<(), ConfigError>
    where
        F: FnMut(S, I, S) + Send + 'static,
    {
        self.ensure_unstarted("set a callback")?;
        self.hooks.on_transition = Some(Box::new(callback));
        Ok(())
    }

    /// Consume one input.
    ///
    /// Hooks fire as exit(from), transition(from, input, to), then the
    /// current state moves, then entry(to). When no edge exists nothing
    /// fires and the current state is unchanged.
    pub fn process_input(&mut self, input: I) -> Result<(), InvalidInput> {
        if !self.started {
            self.started = true;
            debug!(edges = self.table.edge_count(), "state machine started");
        }

        let from = self.current;
        let Some(to) = self.table.get(from, input) else {
            debug!(
                state = from.name(),
                input = input.name(),
                "no transition for input"
            );
            return Err(InvalidInput {
                state: from.name().to_string(),
                input: input.name().to_string(),
            });
        };

        trace!(
            from = from.name(),
            input = input.name(),
            to = to.name(),
            "transition"
        );
        self.hooks.leave(from, input, to);
        self.current = to;
        self.hooks.enter(to);
        Ok(())
    }

    /// Consume inputs in order, stopping at the first one without an edge.
    ///
    /// Inputs consumed before the failure stay applied.
    pub fn process_all<It>(&mut self, inputs: It) -> Result<(), InvalidInput>
    where
        It: IntoIterator<Item = I>,
    {
        for input in inputs {
            self.process_input(input)?;
        }
        Ok(())
    }

    /// Return to the start state without firing hooks.
    ///
    /// A started machine stays started.
    pub fn reset(&mut self) {
        debug!(from = self.current.name(), to = self.start.name(), "reset");
        self.current = self.start;
    }

    pub fn current_state(&self) -> S {
        self.current
    }

    pub fn start_state(&self) -> S {
        self.start
    }

    /// Whether the current state is in the accepting set.
    pub fn is_accepting(&self) -> bool {
        self.accepting.contains(self.current)
    }

    pub fn accept_set(&self) -> &AcceptSet<S> {
        &self.accepting
    }

    /// Whether an input has been processed, freezing the table and hooks.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Target of the edge leaving `from` on `on`, if defined.
    pub fn next_state(&self, from: S, on: I) -> Option<S> {
        self.table.get(from, on)
    }

    pub fn table(&self) -> &TransitionTable<S, I> {
        &self.table
    }

    /// Handle to the table for building further machines over it.
    pub fn shared_table(&self) -> Arc<TransitionTable<S, I>> {
        Arc::clone(&self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol_enum;

    symbol_enum! {
        enum Phase { Idle, Running, Done }
    }

    symbol_enum! {
        enum Signal { Go, Finish, Abort }
    }

    fn pipeline() -> Machine<Phase, Signal> {
        let mut machine = Machine::new(Phase::Idle, [Phase::Done]).unwrap();
        machine
            .add_edge(Phase::Idle, Signal::Go, Phase::Running)
            .unwrap();
        machine
            .add_edge(Phase::Running, Signal::Finish, Phase::Done)
            .unwrap();
        machine
            .add_edge(Phase::Running, Signal::Abort, Phase::Idle)
            .unwrap();
        machine
    }

    #[test]
    fn new_machine_is_unstarted_at_start() {
        let machine = pipeline();

        assert_eq!(machine.current_state(), Phase::Idle);
        assert_eq!(machine.start_state(), Phase::Idle);
        assert!(!machine.is_started());
        assert!(!machine.is_accepting());
    }

    #[test]
    fn from_domains_defaults_to_first_state() {
        let machine = Machine::<Phase, Signal>::from_domains().unwrap();

        assert_eq!(machine.current_state(), Phase::Idle);
        assert!(machine.accept_set().is_empty());
        assert_eq!(machine.table().edge_count(), 0);
    }

    #[test]
    fn with_accepting_defaults_start() {
        let machine = Machine::<Phase, Signal>::with_accepting([Phase::Idle]).unwrap();

        assert_eq!(machine.current_state(), Phase::Idle);
        assert!(machine.is_accepting());
    }

    #[test]
    fn processes_inputs_along_edges() {
        let mut machine = pipeline();

        machine.process_input(Signal::Go).unwrap();
        assert_eq!(machine.current_state(), Phase::Running);
        machine.process_input(Signal::Finish).unwrap();
        assert_eq!(machine.current_state(), Phase::Done);
        assert!(machine.is_accepting());
    }

    #[test]
    fn missing_edge_reports_state_and_input() {
        let mut machine = pipeline();

        let err = machine.process_input(Signal::Finish).unwrap_err();
        assert_eq!(err.state, "Idle");
        assert_eq!(err.input, "Finish");
        assert_eq!(machine.current_state(), Phase::Idle);
    }

    #[test]
    fn first_input_latches_started_even_on_failure() {
        let mut machine = pipeline();

        assert!(machine.process_input(Signal::Abort).is_err());
        assert!(machine.is_started());
        assert_eq!(
            machine.add_edge(Phase::Idle, Signal::Abort, Phase::Idle),
            Err(ConfigError::AlreadyStarted {
                operation: "add a transition"
            })
        );
    }

    #[test]
    fn edits_allowed_after_queries_and_reset() {
        let mut machine = pipeline();

        let _ = machine.current_state();
        let _ = machine.is_accepting();
        machine.reset();

        assert!(machine
            .add_edge(Phase::Done, Signal::Go, Phase::Running)
            .is_ok());
        assert!(machine.set_entry_callback(|_| {}).is_ok());
    }

    #[test]
    fn add_edge_last_write_wins() {
        let mut machine = pipeline();
        machine
            .add_edge(Phase::Idle, Signal::Go, Phase::Done)
            .unwrap();

        machine.process_input(Signal::Go).unwrap();
        assert_eq!(machine.current_state(), Phase::Done);
    }

    #[test]
    fn process_all_stops_at_first_failure() {
        let mut machine = pipeline();

        let err = machine
            .process_all([Signal::Go, Signal::Abort, Signal::Finish])
            .unwrap_err();

        assert_eq!(err.state, "Idle");
        assert_eq!(err.input, "Finish");
        assert_eq!(machine.current_state(), Phase::Idle);
    }

    #[test]
    fn shared_table_is_copied_on_write() {
        let original = pipeline();
        let mut sibling =
            Machine::from_shared_table(original.shared_table(), Phase::Idle, [Phase::Done]).unwrap();

        sibling
            .add_edge(Phase::Done, Signal::Go, Phase::Running)
            .unwrap();

        assert_eq!(
            sibling.next_state(Phase::Done, Signal::Go),
            Some(Phase::Running)
        );
        assert_eq!(original.next_state(Phase::Done, Signal::Go), None);
    }
}
