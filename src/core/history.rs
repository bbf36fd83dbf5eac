//! State transition history tracking.
//!
//! A machine with history enabled appends one record per committed state
//! change. The history is diagnostic only; it is never used to restore a
//! machine.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed state change.
///
/// # Example
///
/// ```rust
/// use nestfsm::core::{Event, State, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp { Off, On }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
/// }
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Switch { Toggle }
///
/// impl Event for Switch {
///     fn name(&self) -> &str { "Toggle" }
/// }
///
/// let transition = StateTransition {
///     from: Lamp::Off,
///     to: Lamp::On,
///     event: Switch::Toggle,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, Lamp::On);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, E: Event> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// The event that caused the change
    pub event: E,
    /// When the change was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of committed state changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, E: Event> {
    transitions: Vec<StateTransition<S, E>>,
}

impl<S: State, E: Event> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> StateHistory<S, E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition.
    pub fn record(&mut self, transition: StateTransition<S, E>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first record followed by the `to`
    /// state of every record. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Time between the first and the last record.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.first()?;
        let last = self.transitions.last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All records in order.
    pub fn transitions(&self) -> &[StateTransition<S, E>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Drop all records.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    /// Drop the oldest records until at most `limit` remain.
    pub fn retain_latest(&mut self, limit: usize) {
        let excess = self.transitions.len().saturating_sub(limit);
        if excess > 0 {
            self.transitions.drain(..excess);
        }
    }

    /// Render the history as JSON for diagnostics dumps.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Busy,
        Done,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Busy => "Busy",
                Self::Done => "Done",
            }
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Go,
        Finish,
    }

    impl Event for TestEvent {
        fn name(&self) -> &str {
            match self {
                Self::Go => "Go",
                Self::Finish => "Finish",
            }
        }
    }

    fn transition(from: TestState, to: TestState, event: TestEvent) -> StateTransition<TestState, TestEvent> {
        StateTransition {
            from,
            to,
            event,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState, TestEvent> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_appends_in_order() {
        let mut history = StateHistory::new();
        history.record(transition(TestState::Idle, TestState::Busy, TestEvent::Go));
        history.record(transition(TestState::Busy, TestState::Done, TestEvent::Finish));

        assert_eq!(history.len(), 2);
        assert_eq!(history.transitions()[0].event, TestEvent::Go);
        assert_eq!(history.transitions()[1].event, TestEvent::Finish);
    }

    #[test]
    fn get_path_includes_starting_state() {
        let mut history = StateHistory::new();
        history.record(transition(TestState::Idle, TestState::Busy, TestEvent::Go));
        history.record(transition(TestState::Busy, TestState::Done, TestEvent::Finish));

        let path = history.get_path();
        assert_eq!(path, vec![&TestState::Idle, &TestState::Busy, &TestState::Done]);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let mut history = StateHistory::new();
        history.record(StateTransition {
            from: TestState::Idle,
            to: TestState::Busy,
            event: TestEvent::Go,
            timestamp: start,
        });
        history.record(StateTransition {
            from: TestState::Busy,
            to: TestState::Done,
            event: TestEvent::Finish,
            timestamp: start + chrono::Duration::seconds(3),
        });

        assert_eq!(history.duration(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn clear_removes_records() {
        let mut history = StateHistory::new();
        history.record(transition(TestState::Idle, TestState::Busy, TestEvent::Go));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn retain_latest_drops_oldest_records() {
        let mut history = StateHistory::new();
        history.record(transition(TestState::Idle, TestState::Busy, TestEvent::Go));
        history.record(transition(TestState::Busy, TestState::Done, TestEvent::Finish));
        history.record(transition(TestState::Done, TestState::Idle, TestEvent::Go));

        history.retain_latest(5);
        assert_eq!(history.len(), 3);

        history.retain_latest(2);
        assert_eq!(history.get_path(), vec![&TestState::Busy, &TestState::Done, &TestState::Idle]);

        history.retain_latest(0);
        assert!(history.is_empty());
    }

    #[test]
    fn history_serializes_to_json() {
        let mut history = StateHistory::new();
        history.record(transition(TestState::Idle, TestState::Busy, TestEvent::Go));

        let json = history.to_json().unwrap();
        let restored: StateHistory<TestState, TestEvent> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 1);
        assert_eq!(restored.transitions()[0].to, TestState::Busy);
    }
}
