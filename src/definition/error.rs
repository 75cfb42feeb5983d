//! Definition loading errors.

use crate::engine::ConfigError;
use thiserror::Error;

/// Errors that can occur when turning a definition into a machine
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The document is not valid definition JSON
    #[error("invalid machine definition: {0}")]
    Json(#[from] serde_json::Error),

    /// A name does not match any member of its domain
    #[error("unknown {domain} '{name}'")]
    UnknownSymbol { domain: &'static str, name: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
