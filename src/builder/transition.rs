//! Builder for transition table rows.

use crate::builder::error::BuildError;
use crate::config::TransitionConfig;
use crate::core::{Action, Event, Guard, State};

/// Builder for a single transition with a fluent API.
pub struct TransitionBuilder<S: State, E: Event> {
    event: E,
    target: Option<S>,
    guard: Guard,
    action: Action,
}

impl<S: State, E: Event> TransitionBuilder<S, E> {
    /// Start a transition triggered by `event`.
    pub fn on(event: E) -> Self {
        Self {
            event,
            target: None,
            guard: Guard::none(),
            action: Action::none(),
        }
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.target = Some(state);
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        self.guard = Guard::new(predicate);
        self
    }

    /// Set the transition action (optional).
    pub fn action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<TransitionConfig<S, E>, BuildError> {
        let target = self.target.ok_or(BuildError::MissingTarget)?;

        Ok(TransitionConfig {
            event: self.event,
            target,
            guard: self.guard,
            action: self.action,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event_enum, state_enum};

    state_enum! {
        enum Valve {
            Shut,
            Open,
        }
    }

    event_enum! {
        enum Command {
            Turn,
        }
    }

    #[test]
    fn builder_requires_target() {
        let result = TransitionBuilder::<Valve, Command>::on(Command::Turn).build();
        assert_eq!(result.err(), Some(BuildError::MissingTarget));
    }

    #[test]
    fn defaults_to_unguarded_without_action() {
        let transition = TransitionBuilder::on(Command::Turn).to(Valve::Open).build().unwrap();

        assert_eq!(transition.event, Command::Turn);
        assert_eq!(transition.target, Valve::Open);
        assert!(!transition.guard.is_set());
        assert!(!transition.action.is_set());
    }

    #[test]
    fn guard_and_action_are_attached() {
        let transition = TransitionBuilder::on(Command::Turn)
            .to(Valve::Shut)
            .when(|| false)
            .action(Action::log("turning"))
            .build()
            .unwrap();

        assert!(!transition.guard.check());
        assert!(transition.action.is_set());
    }
}
