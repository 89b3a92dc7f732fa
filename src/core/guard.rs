//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions evaluated against the current state
//! before a transition is allowed to happen.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Pure predicate that decides whether a transition may leave a state.
///
/// # Example
///
/// ```rust
/// use coursedeck::core::{Guard, State};
/// use coursedeck::Screen;
///
/// let not_finished = Guard::new(|s: &Screen| !s.is_final());
///
/// assert!(not_finished.check(&Screen::Onboarding));
/// assert!(!not_finished.check(&Screen::CourseList));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that admits every state that is not final.
    pub fn non_final() -> Self {
        Self::new(|s: &S| !s.is_final())
    }

    /// Check if the guard admits a transition out of `state`.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            _phantom: PhantomData,
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
