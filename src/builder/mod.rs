//! Builder API for ergonomic configuration construction.
//!
//! This module provides fluent builders and macros for assembling state and
//! transition tables with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod state;
pub mod transition;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use state::StateBuilder;
pub use transition::TransitionBuilder;

use crate::config::TransitionConfig;
use crate::core::{Action, Event, State};

/// Create an unguarded transition that logs `message` when it fires.
///
/// # Example
///
/// ```
/// use nestfsm::builder::logged_transition;
/// use nestfsm::{event_enum, state_enum};
///
/// state_enum! {
///     enum Lamp { Off, On }
/// }
///
/// event_enum! {
///     enum Button { Press }
/// }
///
/// let transition = logged_transition(Button::Press, Lamp::On, "LAMP: OFF: PRESS");
/// assert_eq!(transition.target, Lamp::On);
/// ```
pub fn logged_transition<S, E>(event: E, target: S, message: &'static str) -> TransitionConfig<S, E>
where
    S: State,
    E: Event,
{
    TransitionConfig {
        action: Action::log(message),
        ..TransitionConfig::new(event, target)
    }
}

/// Create a transition with a guard predicate.
///
/// # Example
///
/// ```
/// use nestfsm::builder::guarded_transition;
/// use nestfsm::{event_enum, state_enum};
///
/// state_enum! {
///     enum Lamp { Off, On }
/// }
///
/// event_enum! {
///     enum Button { Press }
/// }
///
/// let transition = guarded_transition(Button::Press, Lamp::On, || false);
/// assert!(!transition.guard.check());
/// ```
pub fn guarded_transition<S, E, F>(event: E, target: S, guard: F) -> TransitionConfig<S, E>
where
    S: State,
    E: Event,
    F: Fn() -> bool + 'static,
{
    TransitionConfig {
        guard: crate::core::Guard::new(guard),
        ..TransitionConfig::new(event, target)
    }
}
