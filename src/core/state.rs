//! The `State` trait shared by every state the controller tracks.
//!
//! Screen-level states and per-card states both implement this trait, so
//! guards and history can be written once and reused for either.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for view states.
///
/// All methods are pure. A state is a plain value describing where the UI
/// currently is; it never owns the data being displayed.
///
/// # Required Traits
///
/// - `Clone` + `PartialEq`: states are recorded in history and compared by guards
/// - `Debug`: states show up in log events
/// - `Serialize` + `Deserialize`: states are captured by snapshots
///
/// # Example
///
/// ```rust
/// use coursedeck::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Tab {
///     Overview,
///     Details,
/// }
///
/// impl State for Tab {
///     fn name(&self) -> &str {
///         match self {
///             Self::Overview => "Overview",
///             Self::Details => "Details",
///         }
///     }
/// }
///
/// assert_eq!(Tab::Details.name(), "Details");
/// assert!(!Tab::Details.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used for display and logging.
    fn name(&self) -> &str;

    /// Whether no further transition may leave this state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
