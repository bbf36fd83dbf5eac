//! Two-Level State Machine
//!
//! This example drives a main machine whose third state nests a sub-machine.
//!
//! Key concepts:
//! - Entry/do/exit actions that log through `tracing`
//! - A composite state whose entry action resets its sub-machine
//! - Events forwarded into the sub-machine while the composite state is active
//!
//! Run with: RUST_LOG=info cargo run --example two_level

use nestfsm::builder::{logged_transition, MachineBuilder, StateBuilder};
use nestfsm::core::{Action, Event};
use nestfsm::engine::MachineHandle;
use nestfsm::{event_enum, state_enum, EngineOptions};
use std::error::Error;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum FsmState {
        Main1,
        Main2,
        MainSub,
        Sub1,
        Sub2,
    }
}

event_enum! {
    enum FsmEvent {
        Event1,
        Event2,
        Event3,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run() {
        tracing::error!(error = %err, "example failed");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    tracing::info!("main: started");

    let options = EngineOptions::default().with_history(true);
    let main_fsm = MachineHandle::with_options(options.clone());
    let sub_fsm = MachineHandle::with_options(options);
    let sub = sub_fsm.sub_machine();

    let main_config = MachineBuilder::new()
        .name("main")
        .initial(FsmState::Main1)
        .with_state(
            StateBuilder::new(FsmState::Main1)
                .entry(Action::log("MAIN: STATE1: ENTRY"))
                .during(Action::log("MAIN: STATE1: DO"))
                .exit(Action::log("MAIN: STATE1: EXIT"))
                .add_transition(logged_transition(FsmEvent::Event2, FsmState::Main2, "MAIN: STATE1: EVENT2")),
        )
        .with_state(
            StateBuilder::new(FsmState::Main2)
                .entry(Action::log("MAIN: STATE2: ENTRY"))
                .during(Action::log("MAIN: STATE2: DO"))
                .exit(Action::log("MAIN: STATE2: EXIT"))
                .add_transition(logged_transition(FsmEvent::Event1, FsmState::Main1, "MAIN: STATE2: EVENT1"))
                .add_transition(logged_transition(FsmEvent::Event2, FsmState::Main2, "MAIN: STATE2: EVENT2"))
                .add_transition(logged_transition(FsmEvent::Event3, FsmState::MainSub, "MAIN: STATE2: EVENT3")),
        )
        .with_state(
            StateBuilder::new(FsmState::MainSub)
                .entry(Action::reset_machine(&sub))
                .sub_machine(sub)
                .add_transition(logged_transition(FsmEvent::Event3, FsmState::Main2, "MAIN: STATE SUB: EVENT3")),
        )
        .build()?;

    let sub_config = MachineBuilder::new()
        .name("sub")
        .initial(FsmState::Sub1)
        .with_state(
            StateBuilder::new(FsmState::Sub1)
                .entry(Action::log("SUB: STATE1: ENTRY"))
                .during(Action::log("SUB: STATE1: DO"))
                .exit(Action::log("SUB: STATE1: EXIT"))
                .add_transition(logged_transition(FsmEvent::Event1, FsmState::Sub1, "SUB: STATE1: EVENT1"))
                .add_transition(logged_transition(FsmEvent::Event2, FsmState::Sub2, "SUB: STATE1: EVENT2")),
        )
        .with_state(
            StateBuilder::new(FsmState::Sub2)
                .entry(Action::log("SUB: STATE2: ENTRY"))
                .during(Action::log("SUB: STATE2: DO"))
                .exit(Action::log("SUB: STATE2: EXIT"))
                .add_transition(logged_transition(FsmEvent::Event1, FsmState::Sub1, "SUB: STATE2: EVENT1")),
        )
        .build()?;

    main_fsm.initialize(Rc::new(main_config))?;
    tracing::info!("main: main fsm initialized");
    sub_fsm.initialize(Rc::new(sub_config))?;
    tracing::info!("main: sub fsm initialized");

    tracing::info!("main: simulating events");
    use FsmEvent::*;
    let events = [
        Event1, // stay in main state 1
        Event3, // not handled in main state 1
        Event2, // go to main state 2
        Event2, // stay in main state 2
        Event1, // back to main state 1
        Event3, // not handled in main state 1
        Event2, // go to main state 2
        Event3, // enter the composite state
        Event1, // sub: stay in state 1
        Event2, // sub: go to state 2
        Event2, // sub: not handled in state 2
        Event1, // sub: back to state 1
        Event3, // leave the composite state
        Event3, // enter it again, sub-machine starts over
        Event1, // sub: stay in state 1
    ];
    for event in events {
        tracing::info!(event = event.name(), "firing event");
        if let Err(err) = main_fsm.process_event(&event) {
            tracing::error!(event = event.name(), error = %err, "error firing event in main fsm");
        }
    }
    tracing::info!("main: simulating done");

    let path: Vec<String> = main_fsm
        .history()?
        .get_path()
        .iter()
        .map(|state| format!("{state:?}"))
        .collect();
    tracing::info!(path = ?path, "main: state path");

    Ok(())
}
