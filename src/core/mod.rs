//! Core building blocks of the engine.
//!
//! - Identifier traits for states and events
//! - Action and guard callbacks
//! - Transition history
//!
//! Nothing in this module dispatches events; see [`crate::engine`].

mod action;
mod guard;
mod history;
mod state;

pub use action::Action;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{Event, State};
