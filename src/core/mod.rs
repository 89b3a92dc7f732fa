//! Core view-state types.
//!
//! Everything here is pure: states are values, guards are predicates and
//! history is an immutable log. The controller in [`crate::screen`] is the
//! only place these are combined with mutation.

mod guard;
mod history;
mod screens;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use screens::{CardState, Screen};
pub use state::State;
