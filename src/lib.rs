//! Coursedeck: an onboarding splash followed by an expandable course list.
//!
//! The crate follows a "pure core, imperative shell" layout. The core is a
//! tiny view-state model with two commands and a handful of queries:
//!
//! - [`ScreenController::dismiss_onboarding`] moves from the onboarding
//!   screen to the course list, once and for good.
//! - [`ScreenController::toggle_expanded`] flips one course card.
//! - [`ScreenController::current_screen`], [`ScreenController::is_expanded`]
//!   and [`Catalog::list`] read it back.
//!
//! [`screen::view`] turns that state into a render model. The [`ui`] module
//! and the `coursedeck` binary are one possible shell around it; anything
//! else that can draw a [`View`] works just as well.
//!
//! # Example
//!
//! ```rust
//! use coursedeck::{view, Catalog, Screen, ScreenController, View};
//!
//! let mut controller = ScreenController::new(Catalog::standard());
//! assert!(matches!(view(&controller), View::Onboarding { .. }));
//!
//! controller.dismiss_onboarding();
//! controller.toggle_expanded("SECT-3141");
//!
//! let View::CourseList { cards } = view(&controller) else { unreachable!() };
//! assert_eq!(cards.len(), 5);
//! assert_eq!(
//!     cards[3].detail.as_ref().map(|d| d.prerequisites.as_str()),
//!     Some("Prerequisites: None")
//! );
//! # assert_eq!(controller.current_screen(), Screen::CourseList);
//! ```

mod macros;

pub mod catalog;
pub mod config;
pub mod core;
pub mod screen;
pub mod session;
pub mod snapshot;
pub mod ui;

// Re-export commonly used types
pub use catalog::{Catalog, Course, CourseId, CourseRef};
pub use core::{CardState, Screen, State};
pub use screen::{view, CardView, ScreenController, View};
pub use snapshot::{Snapshot, SnapshotError};
