//! The screen state controller.

use crate::catalog::{Catalog, CourseId, CourseRef};
use crate::core::{CardState, Guard, Screen, State, StateHistory, StateTransition};
use tracing::debug;

/// Owns all mutable view state for one session.
///
/// Two commands mutate it, [`dismiss_onboarding`](Self::dismiss_onboarding)
/// and [`toggle_expanded`](Self::toggle_expanded). Everything else is a
/// read query. The controller is an ordinary value, so tests can hold as
/// many independent sessions as they like.
///
/// # Example
///
/// ```rust
/// use coursedeck::{Catalog, Screen, ScreenController};
///
/// let mut controller = ScreenController::new(Catalog::standard());
/// assert_eq!(controller.current_screen(), Screen::Onboarding);
///
/// controller.dismiss_onboarding();
/// assert_eq!(controller.current_screen(), Screen::CourseList);
///
/// assert!(controller.toggle_expanded("SECT-3113"));
/// assert!(!controller.is_expanded("SECT-3132"));
/// ```
#[derive(Clone, Debug)]
pub struct ScreenController {
    catalog: Catalog,
    screen: Screen,
    cards: Vec<CardState>,
    history: StateHistory<Screen>,
    leave_guard: Guard<Screen>,
}

impl ScreenController {
    /// Fresh session: onboarding shown, every card collapsed.
    pub fn new(catalog: Catalog) -> Self {
        let cards = vec![CardState::default(); catalog.len()];
        Self {
            catalog,
            screen: Screen::INITIAL,
            cards,
            history: StateHistory::new(),
            leave_guard: Guard::non_final(),
        }
    }

    /// Rebuild a controller from already-validated parts.
    pub(crate) fn from_parts(
        catalog: Catalog,
        screen: Screen,
        expanded: &[CourseId],
        history: StateHistory<Screen>,
    ) -> Self {
        let mut controller = Self::new(catalog);
        controller.screen = screen;
        controller.history = history;
        for id in expanded {
            controller.cards[id.index()] = CardState::Expanded;
        }
        controller
    }

    /// Leave onboarding for the course list.
    ///
    /// Idempotent: once the course list is showing, further calls do nothing.
    pub fn dismiss_onboarding(&mut self) {
        if !self.leave_guard.check(&self.screen) {
            debug!(screen = self.screen.name(), "onboarding already dismissed");
            return;
        }

        let from = self.screen;
        let to = Screen::CourseList;
        self.history = self.history.record(StateTransition::now(from, to));
        self.screen = to;
        debug!(from = from.name(), to = to.name(), "screen transition");
    }

    /// Flip one card between collapsed and expanded, returning the new value.
    ///
    /// # Panics
    ///
    /// If `course` does not name a catalog entry.
    pub fn toggle_expanded<R: CourseRef>(&mut self, course: R) -> bool {
        let id = self.require(&course);
        let card = &mut self.cards[id.index()];
        *card = card.toggled();
        debug!(course = %id, state = card.name(), "card toggled");
        card.is_expanded()
    }

    pub fn current_screen(&self) -> Screen {
        self.screen
    }

    /// Whether onboarding has been dismissed in this session.
    pub fn onboarding_dismissed(&self) -> bool {
        self.screen.is_final()
    }

    /// # Panics
    ///
    /// If `course` does not name a catalog entry.
    pub fn is_expanded<R: CourseRef>(&self, course: R) -> bool {
        let id = self.require(&course);
        self.cards[id.index()].is_expanded()
    }

    pub fn card_state(&self, id: CourseId) -> CardState {
        self.cards[self.require(&id).index()]
    }

    /// Ids of every expanded card, in display order.
    pub fn expanded_ids(&self) -> Vec<CourseId> {
        self.catalog
            .ids()
            .filter(|id| self.cards[id.index()].is_expanded())
            .collect()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &StateHistory<Screen> {
        &self.history
    }

    fn require<R: CourseRef + ?Sized>(&self, course: &R) -> CourseId {
        match course.resolve(&self.catalog) {
            Some(id) => id,
            None => panic!("{course:?} does not identify a catalog course"),
        }
    }
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_starts_on_onboarding() {
        let controller = ScreenController::default();
        assert_eq!(controller.current_screen(), Screen::Onboarding);
        assert!(!controller.onboarding_dismissed());
        assert!(controller.history().is_empty());
        assert!(controller.expanded_ids().is_empty());
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut controller = ScreenController::default();
        controller.dismiss_onboarding();
        controller.dismiss_onboarding();
        controller.dismiss_onboarding();

        assert_eq!(controller.current_screen(), Screen::CourseList);
        assert_eq!(controller.history().transitions().len(), 1);
        assert_eq!(
            controller.history().get_path(),
            vec![&Screen::Onboarding, &Screen::CourseList]
        );
    }

    #[test]
    fn toggle_flips_only_the_named_card() {
        let mut controller = ScreenController::default();
        controller.dismiss_onboarding();

        assert!(controller.toggle_expanded("SECT-3113"));
        assert!(controller.is_expanded("SECT-3113"));
        assert!(!controller.is_expanded("SECT-3132"));

        assert!(!controller.toggle_expanded("SECT-3113"));
        assert!(!controller.is_expanded("SECT-3113"));
    }

    #[test]
    fn index_and_code_refer_to_the_same_card() {
        let mut controller = ScreenController::default();
        controller.toggle_expanded(3usize);

        assert!(controller.is_expanded("SECT-3141"));
        assert_eq!(
            controller.card_state(CourseId(3)),
            CardState::Expanded
        );
        assert_eq!(controller.expanded_ids(), vec![CourseId(3)]);
    }

    #[test]
    fn expansion_is_allowed_before_dismissal() {
        let mut controller = ScreenController::default();
        assert!(controller.toggle_expanded("SECT-3082"));
        assert_eq!(controller.current_screen(), Screen::Onboarding);
    }

    #[test]
    #[should_panic(expected = "does not identify a catalog course")]
    fn toggling_unknown_code_panics() {
        let mut controller = ScreenController::default();
        controller.toggle_expanded("SECT-9999");
    }

    #[test]
    #[should_panic(expected = "does not identify a catalog course")]
    fn querying_out_of_range_index_panics() {
        let controller = ScreenController::default();
        controller.is_expanded(5usize);
    }
}
