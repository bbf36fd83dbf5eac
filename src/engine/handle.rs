//! Shared handles for machines that are nested inside a state.

use crate::config::{EngineOptions, MachineConfig};
use crate::core::{Event, State, StateHistory};
use crate::engine::error::{FsmError, FsmResult};
use crate::engine::machine::Machine;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

/// The seam through which a parent forwards events into a sub-machine.
///
/// Only the event type has to agree; a sub-machine may use its own state type.
pub trait Dispatch<E: Event> {
    /// Process `event` at nesting level `depth` (the top-level machine is 0).
    ///
    /// `limit` is the deepest level the forwarding chain above allows; an
    /// implementation applies the smaller of it and its own limit.
    fn dispatch(&mut self, event: &E, depth: usize, limit: usize) -> FsmResult<()>;

    fn reset(&mut self) -> FsmResult<()>;

    fn name(&self) -> &str;

    /// Machines nested in any state of the current configuration.
    fn sub_machines(&self) -> Vec<SubMachine<E>>;
}

/// Reference from a state configuration to the machine nested in it.
pub struct SubMachine<E: Event> {
    inner: Rc<RefCell<dyn Dispatch<E>>>,
}

impl<E: Event> SubMachine<E> {
    pub fn new<D>(machine: Rc<RefCell<D>>) -> Self
    where
        D: Dispatch<E> + 'static,
    {
        Self { inner: machine }
    }

    /// Forward an event. A machine already busy higher up the dispatch chain
    /// yields [`FsmError::Reentrant`].
    pub fn dispatch(&self, event: &E, depth: usize, limit: usize) -> FsmResult<()> {
        self.inner
            .try_borrow_mut()
            .map_err(|_| FsmError::Reentrant)?
            .dispatch(event, depth, limit)
    }

    pub fn reset(&self) -> FsmResult<()> {
        self.inner
            .try_borrow_mut()
            .map_err(|_| FsmError::Reentrant)?
            .reset()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn downgrade(&self) -> WeakSubMachine<E> {
        WeakSubMachine {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl<E: Event> Clone for SubMachine<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: Event> fmt::Debug for SubMachine<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(machine) => f.debug_tuple("SubMachine").field(&machine.name()).finish(),
            Err(_) => f.write_str("SubMachine(<busy>)"),
        }
    }
}

/// Whether following sub-machines from `roots` reaches `origin` or a machine
/// already on the current path.
///
/// Machines that are busy (borrowed by a dispatch in progress) cannot be
/// inspected and are treated as leaves.
pub(crate) fn has_cycle<E: Event>(roots: &[SubMachine<E>], origin: Option<&SubMachine<E>>) -> bool {
    let mut path = Vec::new();
    let mut explored = Vec::new();
    roots
        .iter()
        .any(|root| visit(root, origin, &mut path, &mut explored))
}

fn visit<E: Event>(
    node: &SubMachine<E>,
    origin: Option<&SubMachine<E>>,
    path: &mut Vec<SubMachine<E>>,
    explored: &mut Vec<SubMachine<E>>,
) -> bool {
    if origin.is_some_and(|origin| origin.ptr_eq(node)) || path.iter().any(|seen| seen.ptr_eq(node)) {
        return true;
    }
    if explored.iter().any(|seen| seen.ptr_eq(node)) {
        return false;
    }
    let children = match node.inner.try_borrow() {
        Ok(machine) => machine.sub_machines(),
        Err(_) => return false,
    };
    path.push(node.clone());
    let found = children
        .iter()
        .any(|child| visit(child, origin, path, explored));
    path.pop();
    explored.push(node.clone());
    found
}

pub(crate) struct WeakSubMachine<E: Event> {
    inner: Weak<RefCell<dyn Dispatch<E>>>,
}

impl<E: Event> WeakSubMachine<E> {
    pub(crate) fn upgrade(&self) -> Option<SubMachine<E>> {
        self.inner.upgrade().map(|inner| SubMachine { inner })
    }
}

/// Shared owner of a [`Machine`].
///
/// Use a handle for any machine that is nested inside a state, or that an
/// action needs to reach. All operations borrow the machine for their
/// duration and report [`FsmError::Reentrant`] instead of panicking when it is
/// already borrowed.
///
/// # Example
///
/// ```rust
/// use nestfsm::builder::{MachineBuilder, StateBuilder};
/// use nestfsm::engine::MachineHandle;
/// use nestfsm::{event_enum, state_enum};
/// use std::rc::Rc;
///
/// state_enum! {
///     enum Switch { Off, On }
/// }
///
/// event_enum! {
///     enum Press { Toggle }
/// }
///
/// let config = MachineBuilder::new()
///     .initial(Switch::Off)
///     .state(StateBuilder::new(Switch::Off).on(Press::Toggle, Switch::On).build())
///     .state(StateBuilder::new(Switch::On).on(Press::Toggle, Switch::Off).build())
///     .build()
///     .unwrap();
///
/// let handle = MachineHandle::new();
/// handle.initialize(Rc::new(config)).unwrap();
/// handle.process_event(&Press::Toggle).unwrap();
/// assert_eq!(handle.current_state().unwrap(), Switch::On);
/// ```
pub struct MachineHandle<S: State, E: Event> {
    inner: Rc<RefCell<Machine<S, E>>>,
}

impl<S: State, E: Event> MachineHandle<S, E> {
    pub fn new() -> Self {
        Self::from_machine(Machine::new())
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self::from_machine(Machine::with_options(options))
    }

    pub fn from_machine(machine: Machine<S, E>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(machine)),
        }
    }

    /// Like [`Machine::initialize`], and additionally rejects a
    /// configuration that nests this handle's machine inside itself.
    pub fn initialize(&self, config: Rc<MachineConfig<S, E>>) -> FsmResult<()> {
        let origin = self.sub_machine();
        self.borrow_mut()?.initialize_nested(config, Some(&origin))
    }

    pub fn reset(&self) -> FsmResult<()> {
        self.borrow_mut()?.reset()
    }

    pub fn process_event(&self, event: &E) -> FsmResult<()> {
        self.borrow_mut()?.process_event(event)
    }

    /// Current state of an initialized machine.
    pub fn current_state(&self) -> FsmResult<S> {
        self.borrow()?
            .current_state()
            .cloned()
            .ok_or(FsmError::NullArgument("configuration"))
    }

    pub fn is_first_run(&self) -> FsmResult<bool> {
        Ok(self.borrow()?.is_first_run())
    }

    /// Snapshot of the machine's history. Copies every retained record; see
    /// [`EngineOptions::history_limit`] to bound it.
    pub fn history(&self) -> FsmResult<StateHistory<S, E>> {
        Ok(self.borrow()?.history().clone())
    }

    /// Reference suitable for [`crate::config::StateConfig::sub_machine`].
    pub fn sub_machine(&self) -> SubMachine<E> {
        SubMachine::new(Rc::clone(&self.inner))
    }

    /// Borrow the machine for inspection.
    pub fn borrow(&self) -> FsmResult<Ref<'_, Machine<S, E>>> {
        self.inner.try_borrow().map_err(|_| FsmError::Reentrant)
    }

    fn borrow_mut(&self) -> FsmResult<RefMut<'_, Machine<S, E>>> {
        self.inner.try_borrow_mut().map_err(|_| FsmError::Reentrant)
    }
}

impl<S: State, E: Event> Default for MachineHandle<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> Clone for MachineHandle<S, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: State, E: Event> From<&MachineHandle<S, E>> for SubMachine<E> {
    fn from(handle: &MachineHandle<S, E>) -> Self {
        handle.sub_machine()
    }
}
