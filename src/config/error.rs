//! Configuration error types.

use thiserror::Error;

/// Structural problems found in a machine configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("configuration has no states")]
    NoStates,

    #[error("initial state '{initial}' is not among the configured states")]
    InitialStateMissing { initial: String },

    #[error("state '{state}' has no transitions")]
    NoTransitions { state: String },

    #[error("state '{state}' is configured more than once")]
    DuplicateState { state: String },

    /// A current or target state is missing at dispatch time.
    #[error("state '{state}' is not among the configured states")]
    UnknownState { state: String },

    /// Following sub-machines from this configuration leads back to a
    /// machine already on the path.
    #[error("machine '{machine}' nests a sub-machine chain that loops back on itself")]
    CyclicSubMachine { machine: String },
}
