//! The dispatch engine.
//!
//! A [`Machine`] interprets a [`crate::config::MachineConfig`]: it tracks the
//! current state and, for every event, fires the lifecycle actions in a fixed
//! order and forwards the event into the active state's sub-machine.
//!
//! Everything here is single-threaded and synchronous. An event, including
//! all nested dispatches it causes, is fully processed before
//! [`Machine::process_event`] returns.

mod error;
mod handle;
mod machine;

pub use error::{FsmError, FsmResult};
pub use handle::{Dispatch, MachineHandle, SubMachine};
pub use machine::Machine;
