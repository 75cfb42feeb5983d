//! Engine errors.

use thiserror::Error;

/// Invalid machine setup. Always a programming error on the caller's side.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("can't create state machine with empty state domain")]
    EmptyStateDomain,

    #[error("can't create state machine with empty input domain")]
    EmptyInputDomain,

    #[error("can't {operation} after the state machine has been started")]
    AlreadyStarted { operation: &'static str },
}

/// The current state has no edge for the given input.
///
/// The machine is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no transition in state '{state}' for input '{input}'")]
pub struct InvalidInput {
    pub state: String,
    pub input: String,
}

/// Any error the engine can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
}
