//! Action callbacks fired by the engine.
//!
//! An action is an optional callback invoked for its side effect. The engine
//! treats it opaquely: it never looks at what the callback does and ignores
//! anything it might want to return.

use crate::core::state::Event;
use crate::engine::SubMachine;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Optional side-effecting callback attached to a state or a transition.
///
/// An absent callback makes [`Action::invoke`] a no-op. Arguments are bound
/// when the action is built, either captured by a closure or passed through
/// [`Action::with_arg`].
///
/// # Example
///
/// ```rust
/// use nestfsm::core::Action;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let hits = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&hits);
/// let action = Action::new(move || counter.set(counter.get() + 1));
///
/// action.invoke();
/// Action::none().invoke();
/// assert_eq!(hits.get(), 1);
/// ```
#[derive(Clone, Default)]
pub struct Action {
    callback: Option<Callback>,
}

impl Action {
    /// An action with no callback.
    pub fn none() -> Self {
        Self { callback: None }
    }

    /// Create an action from a closure.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            callback: Some(Rc::new(callback)),
        }
    }

    /// Bind a plain function to an owned argument.
    ///
    /// ```rust
    /// use nestfsm::core::Action;
    ///
    /// fn announce(message: &&'static str) {
    ///     println!("{message}");
    /// }
    ///
    /// let action = Action::with_arg(announce, "MAIN: STATE1: ENTRY");
    /// assert!(action.is_set());
    /// ```
    pub fn with_arg<A>(func: fn(&A), arg: A) -> Self
    where
        A: 'static,
    {
        Self::new(move || func(&arg))
    }

    /// Emit `message` through `tracing` at INFO level.
    pub fn log(message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        Self::new(move || tracing::info!(target: "nestfsm::action", "{}", message))
    }

    /// Reset a sub-machine to its initial state.
    ///
    /// Typically used as the entry action of a composite state so that every
    /// entry into the state starts the nested machine afresh. Only a weak
    /// reference is kept; a dropped or busy machine is logged and skipped.
    pub fn reset_machine<E: Event>(machine: &SubMachine<E>) -> Self {
        let target = machine.downgrade();
        Self::new(move || {
            let Some(machine) = target.upgrade() else {
                tracing::warn!("reset action: sub-machine no longer exists");
                return;
            };
            if let Err(err) = machine.reset() {
                tracing::warn!(error = %err, "reset action: sub-machine reset failed");
            }
        })
    }

    /// Whether a callback is present.
    pub fn is_set(&self) -> bool {
        self.callback.is_some()
    }

    /// Invoke the callback if present.
    pub fn invoke(&self) {
        if let Some(callback) = &self.callback {
            callback();
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("set", &self.is_set())
            .finish()
    }
}
