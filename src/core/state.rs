//! Identifier traits for states and events.
//!
//! The engine never inspects identifiers beyond equality and their display
//! name, so both traits are deliberately small.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait for state identifiers.
///
/// A state identifier names one entry of a machine configuration. It must be
/// unique within that configuration.
///
/// # Example
///
/// ```rust
/// use nestfsm::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Closed.name(), "Closed");
/// ```
pub trait State: Clone + PartialEq + Debug + Serialize + DeserializeOwned + 'static {
    /// Get the state's name for logging and diagnostics.
    fn name(&self) -> &str;
}

/// Trait for event identifiers.
///
/// Events are matched against a state's transition table by equality.
pub trait Event: Clone + PartialEq + Debug + Serialize + DeserializeOwned + 'static {
    /// Get the event's name for logging and diagnostics.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Running,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Start,
        Stop,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Stop => "Stop",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Running.name(), "Running");
    }

    #[test]
    fn event_name_returns_correct_value() {
        assert_eq!(TestEvent::Start.name(), "Start");
        assert_eq!(TestEvent::Stop.name(), "Stop");
    }

    #[test]
    fn identifiers_serialize_correctly() {
        let json = serde_json::to_string(&TestState::Running).unwrap();
        let state: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, TestState::Running);

        let json = serde_json::to_string(&TestEvent::Stop).unwrap();
        let event: TestEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, TestEvent::Stop);
    }
}
