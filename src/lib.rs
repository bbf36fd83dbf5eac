//! Nestfsm: a table-driven hierarchical state machine engine
//!
//! A machine is described once, as plain data: a list of states, each with
//! optional entry/do/exit actions, an ordered transition table and optionally
//! a nested sub-machine. A runtime instance interprets that description,
//! dispatching one event at a time.
//!
//! # Core Concepts
//!
//! - **Configuration**: Immutable state and transition tables ([`config`])
//! - **Actions and guards**: Optional callbacks bound to their argument ([`core`])
//! - **Engine**: `initialize`, `reset` and `process_event` ([`engine`])
//! - **Composite states**: A state's sub-machine receives every event
//!   dispatched while the state is active
//!
//! # Dispatch order
//!
//! For one event, with `current` the active state:
//!
//! 1. If this is the first event since init/reset, `current`'s entry action.
//! 2. Without a state change: `current`'s do action, then the matched
//!    transition's action.
//! 3. With a state change: `current`'s do and exit actions, the transition's
//!    action, then the next state's entry and do actions.
//! 4. The event is forwarded into the resulting state's sub-machine.
//!
//! A guard that evaluates to `false` only suppresses the state change; the
//! matched transition's action still fires.
//!
//! # Example
//!
//! ```rust
//! use nestfsm::builder::{MachineBuilder, StateBuilder};
//! use nestfsm::core::Action;
//! use nestfsm::engine::Machine;
//! use nestfsm::{event_enum, state_enum};
//! use std::rc::Rc;
//!
//! state_enum! {
//!     enum Door { Closed, Open }
//! }
//!
//! event_enum! {
//!     enum Knob { Turn, Push }
//! }
//!
//! let config = MachineBuilder::new()
//!     .name("door")
//!     .initial(Door::Closed)
//!     .with_state(
//!         StateBuilder::new(Door::Closed)
//!             .entry(Action::log("DOOR: CLOSED: ENTRY"))
//!             .on(Knob::Turn, Door::Open),
//!     )
//!     .with_state(StateBuilder::new(Door::Open).on(Knob::Push, Door::Closed))
//!     .build()
//!     .unwrap();
//!
//! let mut door = Machine::new();
//! door.initialize(Rc::new(config)).unwrap();
//!
//! door.process_event(&Knob::Push).unwrap(); // unhandled, stays closed
//! door.process_event(&Knob::Turn).unwrap();
//! assert_eq!(door.current_state(), Some(&Door::Open));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::config::{ConfigError, EngineOptions, MachineConfig, StateConfig, TransitionConfig};
pub use crate::core::{Action, Event, Guard, State, StateHistory, StateTransition};
pub use crate::engine::{FsmError, FsmResult, Machine, MachineHandle, SubMachine};
