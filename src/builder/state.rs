//! Builder for state configurations.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::config::{StateConfig, TransitionConfig};
use crate::core::{Action, Event, State};
use crate::engine::SubMachine;

/// Builder for one state and its transition table.
pub struct StateBuilder<S: State, E: Event> {
    config: StateConfig<S, E>,
}

impl<S: State, E: Event> StateBuilder<S, E> {
    pub fn new(state: S) -> Self {
        Self {
            config: StateConfig::new(state, Vec::new()),
        }
    }

    /// Action fired when the state is entered.
    pub fn entry(mut self, action: Action) -> Self {
        self.config.entry = action;
        self
    }

    /// Action fired for every event processed while the state is current.
    pub fn during(mut self, action: Action) -> Self {
        self.config.do_action = action;
        self
    }

    /// Action fired when the state is left.
    pub fn exit(mut self, action: Action) -> Self {
        self.config.exit = action;
        self
    }

    /// Nest a machine inside this state.
    pub fn sub_machine(mut self, machine: impl Into<SubMachine<E>>) -> Self {
        self.config.sub_machine = Some(machine.into());
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, E>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.config.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: TransitionConfig<S, E>) -> Self {
        self.config.transitions.push(transition);
        self
    }

    /// Add an unguarded transition without an action.
    pub fn on(self, event: E, target: S) -> Self {
        self.add_transition(TransitionConfig::new(event, target))
    }

    pub fn build(self) -> StateConfig<S, E> {
        self.config
    }
}
