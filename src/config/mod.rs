//! Machine configuration.
//!
//! Configurations are plain data: a table of states, each with its actions
//! and an ordered transition table. They are built once, validated when an
//! instance is initialized, and never modified afterwards.

pub mod error;
pub mod options;
mod table;

pub use error::ConfigError;
pub use options::{EngineOptions, DEFAULT_MAX_DEPTH};
pub use table::{MachineConfig, StateConfig, TransitionConfig, DEFAULT_MACHINE_NAME};
