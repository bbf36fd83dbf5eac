//! Guard predicates for controlling state transitions.
//!
//! A guard decides whether a matched transition may change the current state.
//! An absent guard always allows it.

use std::fmt;
use std::rc::Rc;

type Predicate = Rc<dyn Fn() -> bool>;

/// Optional predicate that gates the state change of a transition.
///
/// # Example
///
/// ```rust
/// use nestfsm::core::Guard;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let armed = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&armed);
/// let guard = Guard::new(move || flag.get());
///
/// assert!(!guard.check());
/// armed.set(true);
/// assert!(guard.check());
///
/// // No predicate means the transition is always allowed
/// assert!(Guard::none().check());
/// ```
#[derive(Clone, Default)]
pub struct Guard {
    predicate: Option<Predicate>,
}

impl Guard {
    /// A guard with no predicate.
    pub fn none() -> Self {
        Self { predicate: None }
    }

    /// Create a guard from a closure.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Self {
            predicate: Some(Rc::new(predicate)),
        }
    }

    /// Bind a plain predicate function to an owned argument.
    pub fn with_arg<A>(func: fn(&A) -> bool, arg: A) -> Self
    where
        A: 'static,
    {
        Self::new(move || func(&arg))
    }

    /// Whether a predicate is present.
    pub fn is_set(&self) -> bool {
        self.predicate.is_some()
    }

    /// Evaluate the guard. Returns `true` when no predicate is set.
    pub fn check(&self) -> bool {
        self.predicate.as_ref().is_none_or(|predicate| predicate())
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("set", &self.is_set()).finish()
    }
}
