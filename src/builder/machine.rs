//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::config::{MachineConfig, StateConfig, DEFAULT_MACHINE_NAME};
use crate::core::{Event, State};

/// Builder for constructing machine configurations with a fluent API.
///
/// The builder only assembles the tables. Structural validation happens when
/// the configuration is attached to an instance with
/// [`crate::engine::Machine::initialize`].
pub struct MachineBuilder<S: State, E: Event> {
    name: String,
    initial: Option<S>,
    states: Vec<StateConfig<S, E>>,
}

impl<S: State, E: Event> MachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            name: DEFAULT_MACHINE_NAME.to_string(),
            initial: None,
            states: Vec::new(),
        }
    }

    /// Label used in log fields.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a state configuration.
    pub fn state(mut self, state: StateConfig<S, E>) -> Self {
        self.states.push(state);
        self
    }

    /// Add a state from its builder.
    pub fn with_state(self, builder: StateBuilder<S, E>) -> Self {
        self.state(builder.build())
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: Vec<StateConfig<S, E>>) -> Self {
        self.states.extend(states);
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<MachineConfig<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        Ok(MachineConfig {
            name: self.name,
            initial_state: initial,
            states: self.states,
        })
    }
}

impl<S: State, E: Event> Default for MachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::{event_enum, state_enum};

    state_enum! {
        enum Stage {
            Draft,
            Review,
        }
    }

    event_enum! {
        enum Step {
            Submit,
            Reject,
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = MachineBuilder::<Stage, Step>::new().build();
        assert_eq!(result.err(), Some(BuildError::MissingInitialState));
    }

    #[test]
    fn fluent_api_builds_config() {
        let config = MachineBuilder::new()
            .name("review")
            .initial(Stage::Draft)
            .with_state(StateBuilder::new(Stage::Draft).on(Step::Submit, Stage::Review))
            .state(StateBuilder::new(Stage::Review).on(Step::Reject, Stage::Draft).build())
            .build()
            .unwrap();

        assert_eq!(config.name, "review");
        assert_eq!(config.initial_state, Stage::Draft);
        assert_eq!(config.states.len(), 2);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn built_config_is_still_validated_at_initialize() {
        let config = MachineBuilder::<Stage, Step>::new()
            .initial(Stage::Review)
            .states(vec![StateBuilder::new(Stage::Draft).on(Step::Submit, Stage::Review).build()])
            .build()
            .unwrap();

        assert_eq!(
            config.validate(),
            Err(ConfigError::InitialStateMissing {
                initial: "Review".to_string()
            })
        );
    }
}
