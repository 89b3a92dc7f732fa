//! The two state machines driven by the controller.

use crate::state_enum;

state_enum! {
    /// Which top-level screen is shown.
    ///
    /// `Onboarding` is the initial state; `CourseList` is terminal.
    #[derive(Copy, Eq, Hash)]
    pub enum Screen {
        Onboarding,
        CourseList,
    }
    final: [CourseList]
}

state_enum! {
    /// Per-card expansion.
    #[derive(Copy, Eq, Hash, Default)]
    pub enum CardState {
        #[default]
        Collapsed,
        Expanded,
    }
}

impl Screen {
    pub const INITIAL: Screen = Screen::Onboarding;
}

impl CardState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}
