//! Static state and transition tables.

use crate::config::error::ConfigError;
use crate::core::{Action, Event, Guard, State};
use crate::engine::SubMachine;

/// Name used in logs when a configuration is not given one.
pub const DEFAULT_MACHINE_NAME: &str = "fsm";

/// One row of a state's transition table.
#[derive(Clone, Debug)]
pub struct TransitionConfig<S: State, E: Event> {
    pub event: E,
    pub target: S,
    pub guard: Guard,
    pub action: Action,
}

impl<S: State, E: Event> TransitionConfig<S, E> {
    /// Unguarded transition without an action.
    pub fn new(event: E, target: S) -> Self {
        Self {
            event,
            target,
            guard: Guard::none(),
            action: Action::none(),
        }
    }
}

/// Configuration of a single state.
#[derive(Clone, Debug)]
pub struct StateConfig<S: State, E: Event> {
    pub state: S,
    /// Nested machine that receives every event dispatched while this state
    /// is active, including the event that entered it.
    pub sub_machine: Option<SubMachine<E>>,
    pub entry: Action,
    pub do_action: Action,
    pub exit: Action,
    /// Ordered table; the first row matching an event wins.
    pub transitions: Vec<TransitionConfig<S, E>>,
}

impl<S: State, E: Event> StateConfig<S, E> {
    /// State with no actions, no sub-machine and the given transitions.
    pub fn new(state: S, transitions: Vec<TransitionConfig<S, E>>) -> Self {
        Self {
            state,
            sub_machine: None,
            entry: Action::none(),
            do_action: Action::none(),
            exit: Action::none(),
            transitions,
        }
    }

    pub fn find_transition(&self, event: &E) -> Option<&TransitionConfig<S, E>> {
        self.transitions.iter().find(|t| t.event == *event)
    }
}

/// Immutable description of a machine, shared by every instance of it.
#[derive(Clone, Debug)]
pub struct MachineConfig<S: State, E: Event> {
    /// Label used in log fields.
    pub name: String,
    pub initial_state: S,
    pub states: Vec<StateConfig<S, E>>,
}

impl<S: State, E: Event> MachineConfig<S, E> {
    pub fn new(initial_state: S, states: Vec<StateConfig<S, E>>) -> Self {
        Self {
            name: DEFAULT_MACHINE_NAME.to_string(),
            initial_state,
            states,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Look up a state's configuration.
    pub fn find_state(&self, state: &S) -> Option<&StateConfig<S, E>> {
        self.states.iter().find(|s| s.state == *state)
    }

    /// Check the configuration before it is attached to an instance.
    ///
    /// Rejects an empty state list, states without transitions, repeated
    /// state identifiers and an initial state that is not configured.
    /// Transition targets are not checked here; a dangling target is reported
    /// when it is first dispatched to.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.states.is_empty() {
            return Err(ConfigError::NoStates);
        }

        let mut initial_found = false;
        for (index, state) in self.states.iter().enumerate() {
            if state.state == self.initial_state {
                initial_found = true;
            }
            if state.transitions.is_empty() {
                return Err(ConfigError::NoTransitions {
                    state: state.state.name().to_string(),
                });
            }
            if self.states[..index].iter().any(|s| s.state == state.state) {
                return Err(ConfigError::DuplicateState {
                    state: state.state.name().to_string(),
                });
            }
        }

        if !initial_found {
            return Err(ConfigError::InitialStateMissing {
                initial: self.initial_state.name().to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{event_enum, state_enum};

    state_enum! {
        enum Light {
            Red,
            Green,
            Amber,
        }
    }

    event_enum! {
        enum Signal {
            Next,
            Halt,
        }
    }

    fn cycle() -> MachineConfig<Light, Signal> {
        MachineConfig::new(
            Light::Red,
            vec![
                StateConfig::new(Light::Red, vec![TransitionConfig::new(Signal::Next, Light::Green)]),
                StateConfig::new(Light::Green, vec![TransitionConfig::new(Signal::Next, Light::Amber)]),
                StateConfig::new(
                    Light::Amber,
                    vec![
                        TransitionConfig::new(Signal::Next, Light::Red),
                        TransitionConfig::new(Signal::Halt, Light::Red),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn valid_configuration_passes() {
        assert_eq!(cycle().validate(), Ok(()));
    }

    #[test]
    fn empty_state_list_is_rejected() {
        let config: MachineConfig<Light, Signal> = MachineConfig::new(Light::Red, vec![]);
        assert_eq!(config.validate(), Err(ConfigError::NoStates));
    }

    #[test]
    fn missing_initial_state_is_rejected() {
        let mut config = cycle();
        config.states.retain(|s| s.state != Light::Red);

        assert_eq!(
            config.validate(),
            Err(ConfigError::InitialStateMissing {
                initial: "Red".to_string()
            })
        );
    }

    #[test]
    fn state_without_transitions_is_rejected() {
        let mut config = cycle();
        config.states[1].transitions.clear();

        assert_eq!(
            config.validate(),
            Err(ConfigError::NoTransitions {
                state: "Green".to_string()
            })
        );
    }

    #[test]
    fn duplicate_state_is_rejected() {
        let mut config = cycle();
        config
            .states
            .push(StateConfig::new(Light::Green, vec![TransitionConfig::new(Signal::Halt, Light::Red)]));

        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateState {
                state: "Green".to_string()
            })
        );
    }

    #[test]
    fn dangling_target_is_not_checked() {
        let mut config = cycle();
        config.states.retain(|s| s.state != Light::Amber);

        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn find_state_scans_configured_states() {
        let config = cycle();
        assert_eq!(config.find_state(&Light::Green).map(|s| s.state), Some(Light::Green));

        let mut partial = cycle();
        partial.states.pop();
        assert!(partial.find_state(&Light::Amber).is_none());
    }

    #[test]
    fn first_matching_transition_wins() {
        let state = StateConfig::new(
            Light::Red,
            vec![
                TransitionConfig::new(Signal::Next, Light::Green),
                TransitionConfig::new(Signal::Next, Light::Amber),
            ],
        );

        assert_eq!(state.find_transition(&Signal::Next).map(|t| t.target), Some(Light::Green));
        assert!(state.find_transition(&Signal::Halt).is_none());
    }

    #[test]
    fn default_name_is_applied() {
        assert_eq!(cycle().name, DEFAULT_MACHINE_NAME);
        assert_eq!(cycle().named("traffic").name, "traffic");
    }
}
