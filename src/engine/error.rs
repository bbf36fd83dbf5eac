//! Engine error types.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors returned by `initialize`, `reset` and `process_event`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// A required reference is absent, e.g. the instance was never
    /// initialized with a configuration.
    #[error("required argument is absent: {0}")]
    NullArgument(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("sub-machine nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },

    /// The machine is already borrowed by a dispatch in progress, e.g. an
    /// action dispatching into one of its ancestors. Callbacks that fired
    /// earlier in the same dispatch are not undone.
    #[error("machine is already processing an event")]
    Reentrant,
}

pub type FsmResult<T> = Result<T, FsmError>;
