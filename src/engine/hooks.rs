//! Lifecycle hooks fired around each transition.

use crate::core::Symbol;
use std::fmt;

/// Called with a state being entered or exited.
pub type StateCallback<S> = Box<dyn FnMut(S) + Send>;

/// Called with `(from, input, to)` for each transition.
pub type TransitionCallback<S, I> = Box<dyn FnMut(S, I, S) + Send>;

/// One slot per hook kind. Setting a slot replaces its previous occupant.
pub(crate) struct Hooks<S: Symbol, I: Symbol> {
    pub(crate) on_entry: Option<StateCallback<S>>,
    pub(crate) on_exit: Option<StateCallback<S>>,
    pub(crate) on_transition: Option<TransitionCallback<S, I>>,
}

impl<S: Symbol, I: Symbol> Hooks<S, I> {
    pub(crate) fn new() -> Self {
        Self {
            on_entry: None,
            on_exit: None,
            on_transition: None,
        }
    }

    /// Run the hooks for `from --input--> to` in exit, transition order.
    /// Entry is fired separately once the current state has moved.
    pub(crate) fn leave(&mut self, from: S, input: I, to: S) {
        if let Some(on_exit) = self.on_exit.as_mut() {
            on_exit(from);
        }
        if let Some(on_transition) = self.on_transition.as_mut() {
            on_transition(from, input, to);
        }
    }

    pub(crate) fn enter(&mut self, state: S) {
        if let Some(on_entry) = self.on_entry.as_mut() {
            on_entry(state);
        }
    }
}

impl<S: Symbol, I: Symbol> fmt::Debug for Hooks<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_entry", &self.on_entry.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .field("on_transition", &self.on_transition.is_some())
            .finish()
    }
}
