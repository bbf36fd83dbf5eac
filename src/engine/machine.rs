//! Runtime instance of a configured machine and its dispatch algorithm.

use crate::config::{ConfigError, EngineOptions, MachineConfig, StateConfig, DEFAULT_MACHINE_NAME};
use crate::core::{Action, Event, State, StateHistory, StateTransition};
use crate::engine::error::{FsmError, FsmResult};
use crate::engine::handle::{has_cycle, Dispatch, SubMachine};
use chrono::Utc;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// Mutable runtime state of one machine.
///
/// An instance starts out empty and becomes usable once [`Machine::initialize`]
/// succeeds. Each nesting level has its own instance; sub-machine instances
/// are shared through [`crate::engine::MachineHandle`].
pub struct Machine<S: State, E: Event> {
    config: Option<Rc<MachineConfig<S, E>>>,
    current: Option<S>,
    first_run: bool,
    options: EngineOptions,
    history: StateHistory<S, E>,
}

impl<S: State, E: Event> Default for Machine<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> Machine<S, E> {
    /// Create an uninitialized instance with default options.
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    /// Create an uninitialized instance.
    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            config: None,
            current: None,
            first_run: false,
            options,
            history: StateHistory::new(),
        }
    }

    /// Validate `config`, attach it and reset to its initial state.
    ///
    /// On failure the instance is left exactly as it was.
    pub fn initialize(&mut self, config: Rc<MachineConfig<S, E>>) -> FsmResult<()> {
        self.initialize_nested(config, None)
    }

    /// `initialize` for a machine reachable as `origin`; a configuration that
    /// leads back to `origin` through its sub-machines is rejected.
    pub(crate) fn initialize_nested(
        &mut self,
        config: Rc<MachineConfig<S, E>>,
        origin: Option<&SubMachine<E>>,
    ) -> FsmResult<()> {
        if let Err(err) = config.validate().and_then(|()| check_nesting(&config, origin)) {
            warn!(machine = %config.name, error = %err, "rejected machine configuration");
            return Err(err.into());
        }

        debug!(
            machine = %config.name,
            initial = config.initial_state.name(),
            states = config.states.len(),
            "machine initialized"
        );
        self.config = Some(config);
        self.history.clear();
        self.reset()
    }

    /// Return to the initial state and re-arm the first-run entry action.
    ///
    /// No actions fire here; the initial state's entry action runs on the
    /// next dispatched event.
    pub fn reset(&mut self) -> FsmResult<()> {
        let config = self
            .config
            .as_ref()
            .ok_or(FsmError::NullArgument("configuration"))?;

        trace!(machine = %config.name, state = config.initial_state.name(), "machine reset");
        self.current = Some(config.initial_state.clone());
        self.first_run = true;
        Ok(())
    }

    /// Dispatch one event.
    ///
    /// At most one transition is taken. If the resulting state owns a
    /// sub-machine, the same event is forwarded into it. An event without a
    /// matching transition is not an error.
    pub fn process_event(&mut self, event: &E) -> FsmResult<()> {
        self.dispatch_at(event, 0, self.options.max_depth)
    }

    pub fn current_state(&self) -> Option<&S> {
        self.current.as_ref()
    }

    /// True between init/reset and the next dispatched event.
    pub fn is_first_run(&self) -> bool {
        self.first_run
    }

    pub fn is_initialized(&self) -> bool {
        self.config.is_some()
    }

    pub fn config(&self) -> Option<&Rc<MachineConfig<S, E>>> {
        self.config.as_ref()
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Committed state changes, if `record_history` is enabled.
    pub fn history(&self) -> &StateHistory<S, E> {
        &self.history
    }

    pub fn name(&self) -> &str {
        self.config
            .as_ref()
            .map_or(DEFAULT_MACHINE_NAME, |config| config.name.as_str())
    }

    fn dispatch_at(&mut self, event: &E, depth: usize, limit: usize) -> FsmResult<()> {
        let config = Rc::clone(
            self.config
                .as_ref()
                .ok_or(FsmError::NullArgument("configuration"))?,
        );
        let limit = limit.min(self.options.max_depth);
        if depth > limit {
            return Err(too_deep(&config.name, depth, limit));
        }

        let current = self
            .current
            .as_ref()
            .ok_or(FsmError::NullArgument("current state"))?;
        let current_cfg = lookup(&config, current)?;

        let transition = current_cfg.find_transition(event);
        let next_cfg = match transition {
            Some(t) if t.guard.check() => lookup(&config, &t.target)?,
            Some(t) => {
                debug!(
                    machine = %config.name,
                    state = current_cfg.state.name(),
                    event = event.name(),
                    target = t.target.name(),
                    "guard rejected transition"
                );
                current_cfg
            }
            None => {
                trace!(
                    machine = %config.name,
                    state = current_cfg.state.name(),
                    event = event.name(),
                    "unhandled event"
                );
                current_cfg
            }
        };
        // Checked before any callback so an over-deep forward has no effects.
        if next_cfg.sub_machine.is_some() && depth + 1 > limit {
            return Err(too_deep(&config.name, depth + 1, limit));
        }

        // A rejected guard only suppresses the state change; the matched
        // row's action still fires.
        let action = transition.map(|t| &t.action);

        if self.first_run {
            current_cfg.entry.invoke();
            self.first_run = false;
        }

        let changed = next_cfg.state != current_cfg.state;
        current_cfg.do_action.invoke();
        if changed {
            current_cfg.exit.invoke();
            perform(action);
            next_cfg.entry.invoke();
            next_cfg.do_action.invoke();
        } else {
            perform(action);
        }

        if let Some(sub) = &next_cfg.sub_machine {
            sub.dispatch(event, depth + 1, limit)?;
        }

        if changed {
            debug!(
                machine = %config.name,
                from = current_cfg.state.name(),
                to = next_cfg.state.name(),
                event = event.name(),
                "state change"
            );
            if self.options.record_history {
                self.history.record(StateTransition {
                    from: current_cfg.state.clone(),
                    to: next_cfg.state.clone(),
                    event: event.clone(),
                    timestamp: Utc::now(),
                });
                if let Some(max) = self.options.history_limit {
                    self.history.retain_latest(max);
                }
            }
        }
        self.current = Some(next_cfg.state.clone());
        Ok(())
    }
}

fn too_deep(machine: &str, depth: usize, limit: usize) -> FsmError {
    warn!(machine, depth, limit, "sub-machine nesting limit exceeded");
    FsmError::NestingTooDeep { limit }
}

fn check_nesting<S: State, E: Event>(
    config: &MachineConfig<S, E>,
    origin: Option<&SubMachine<E>>,
) -> Result<(), ConfigError> {
    let roots: Vec<SubMachine<E>> = config
        .states
        .iter()
        .filter_map(|state| state.sub_machine.clone())
        .collect();
    if has_cycle(&roots, origin) {
        return Err(ConfigError::CyclicSubMachine {
            machine: config.name.clone(),
        });
    }
    Ok(())
}

fn perform(action: Option<&Action>) {
    if let Some(action) = action {
        action.invoke();
    }
}

fn lookup<'a, S: State, E: Event>(
    config: &'a MachineConfig<S, E>,
    state: &S,
) -> FsmResult<&'a StateConfig<S, E>> {
    config.find_state(state).ok_or_else(|| {
        warn!(machine = %config.name, state = state.name(), "state is not configured");
        FsmError::InvalidConfig(ConfigError::UnknownState {
            state: state.name().to_string(),
        })
    })
}

impl<S: State, E: Event> Dispatch<E> for Machine<S, E> {
    fn dispatch(&mut self, event: &E, depth: usize, limit: usize) -> FsmResult<()> {
        self.dispatch_at(event, depth, limit)
    }

    fn reset(&mut self) -> FsmResult<()> {
        Machine::reset(self)
    }

    fn name(&self) -> &str {
        Machine::name(self)
    }

    fn sub_machines(&self) -> Vec<SubMachine<E>> {
        self.config
            .iter()
            .flat_map(|config| config.states.iter())
            .filter_map(|state| state.sub_machine.clone())
            .collect()
    }
}
