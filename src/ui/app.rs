//! Terminal host state and key handling.
//!
//! The cursor and scroll position belong to the terminal, not to the view
//! state core: they decide which card a key press targets and nothing else.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use super::theme::Palette;
use crate::config::Config;
use crate::core::Screen;
use crate::screen::ScreenController;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct App {
    controller: ScreenController,
    selected: usize,
    pub(crate) first_visible: usize,
    palette: Palette,
    card_width_percent: u16,
}

impl App {
    pub fn new(controller: ScreenController, config: &Config) -> Self {
        Self {
            controller,
            selected: 0,
            first_visible: 0,
            palette: Palette::for_choice(config.theme),
            card_width_percent: config.ui.card_width_percent,
        }
    }

    pub fn controller(&self) -> &ScreenController {
        &self.controller
    }

    pub fn into_controller(self) -> ScreenController {
        self.controller
    }

    /// Index of the highlighted card.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn card_width_percent(&self) -> u16 {
        self.card_width_percent
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            return Flow::Quit;
        }

        match self.controller.current_screen() {
            Screen::Onboarding => {
                if matches!(
                    key.code,
                    KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('c')
                ) {
                    self.controller.dismiss_onboarding();
                }
            }
            Screen::CourseList => self.handle_list_key(key.code),
        }
        Flow::Continue
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        let last = self.controller.catalog().len().saturating_sub(1);
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.selected = (self.selected + 1).min(last),
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => self.selected = last,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.controller.toggle_expanded(self.selected);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if !self.controller.is_expanded(self.selected) {
                    self.controller.toggle_expanded(self.selected);
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if self.controller.is_expanded(self.selected) {
                    self.controller.toggle_expanded(self.selected);
                }
            }
            other => debug!(key = ?other, "unbound key"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(ScreenController::default(), &Config::default())
    }

    #[test]
    fn enter_on_onboarding_dismisses_it() {
        let mut app = app();
        assert_eq!(app.handle_key(press(KeyCode::Enter)), Flow::Continue);
        assert_eq!(app.controller().current_screen(), Screen::CourseList);
    }

    #[test]
    fn space_and_c_also_dismiss_onboarding() {
        for code in [KeyCode::Char(' '), KeyCode::Char('c')] {
            let mut app = app();
            assert_eq!(app.handle_key(press(code)), Flow::Continue);
            assert_eq!(app.controller().current_screen(), Screen::CourseList);
            // The dismissing key is not also applied to the list.
            assert!(app.controller().expanded_ids().is_empty());
        }
    }

    #[test]
    fn ctrl_c_on_onboarding_quits_without_dismissing() {
        let mut app = app();
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Flow::Quit
        );
        assert_eq!(app.controller().current_screen(), Screen::Onboarding);
    }

    #[test]
    fn list_keys_do_nothing_during_onboarding() {
        let mut app = app();
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.selected(), 0);
        assert!(app.controller().expanded_ids().is_empty());
    }

    #[test]
    fn cursor_is_clamped_to_catalog() {
        let mut app = app();
        app.handle_key(press(KeyCode::Enter));

        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.selected(), 0);

        for _ in 0..10 {
            app.handle_key(press(KeyCode::Char('j')));
        }
        assert_eq!(app.selected(), 4);

        app.handle_key(press(KeyCode::Home));
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn space_toggles_selected_card_only() {
        let mut app = app();
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Char(' ')));

        assert!(app.controller().is_expanded("SECT-3132"));
        assert!(!app.controller().is_expanded("SECT-3113"));

        app.handle_key(press(KeyCode::Enter));
        assert!(!app.controller().is_expanded("SECT-3132"));
    }

    #[test]
    fn right_and_left_expand_and_collapse() {
        let mut app = app();
        app.handle_key(press(KeyCode::Enter));

        app.handle_key(press(KeyCode::Right));
        app.handle_key(press(KeyCode::Right));
        assert!(app.controller().is_expanded(0usize));

        app.handle_key(press(KeyCode::Left));
        app.handle_key(press(KeyCode::Left));
        assert!(!app.controller().is_expanded(0usize));
    }

    #[test]
    fn quit_keys_end_the_loop() {
        let mut app = app();
        assert_eq!(app.handle_key(press(KeyCode::Char('q'))), Flow::Quit);
        assert_eq!(app.handle_key(press(KeyCode::Esc)), Flow::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Flow::Quit
        );
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut app = app();
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        app.handle_key(release);
        assert_eq!(app.controller().current_screen(), Screen::Onboarding);
    }
}
