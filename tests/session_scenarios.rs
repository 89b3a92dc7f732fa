//! End-to-end sessions through the public API.

use coursedeck::config::Config;
use coursedeck::screen::{SHOW_LESS, SHOW_MORE};
use coursedeck::ui::{App, Flow};
use coursedeck::{view, Catalog, Screen, ScreenController, Snapshot, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn press(app: &mut App, code: KeyCode) -> Flow {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn onboarding_then_toggle_scenario() {
    let mut controller = ScreenController::new(Catalog::standard());
    assert_eq!(controller.current_screen(), Screen::Onboarding);

    controller.dismiss_onboarding();
    assert_eq!(controller.current_screen(), Screen::CourseList);

    controller.toggle_expanded("SECT-3113");
    assert!(controller.is_expanded("SECT-3113"));
    assert!(!controller.is_expanded("SECT-3132"));

    controller.toggle_expanded("SECT-3113");
    assert!(!controller.is_expanded("SECT-3113"));
}

#[test]
fn catalog_records_scenario() {
    let catalog = Catalog::standard();
    let courses = catalog.list();

    assert_eq!(courses.len(), 5);
    assert_eq!(courses[0].code, "SECT-3113");
    assert_eq!(courses[0].credit_hours, 3);
    assert_eq!(courses[0].prerequisites, "Web Design and Programming");
    assert_eq!(courses[3].code, "SECT-3141");
    assert_eq!(courses[3].prerequisites, "None");
}

#[test]
fn view_tracks_each_command() {
    let mut controller = ScreenController::default();
    assert_eq!(view(&controller).screen(), Screen::Onboarding);

    controller.dismiss_onboarding();
    controller.toggle_expanded("SECT-3151");

    let View::CourseList { cards } = view(&controller) else {
        panic!("expected the course list");
    };
    let labels: Vec<_> = cards.iter().map(|c| c.toggle_label).collect();
    assert_eq!(labels, [SHOW_MORE, SHOW_MORE, SHOW_LESS, SHOW_MORE, SHOW_MORE]);
    assert_eq!(cards[2].credits, "Credit Hours: 2");
}

#[test]
fn keyboard_session_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let state_file = dir.path().join("session.json");

    let mut app = App::new(ScreenController::default(), &Config::default());
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(press(&mut app, KeyCode::Char('q')), Flow::Quit);

    app.into_controller().snapshot().save(&state_file).unwrap();

    let snapshot = Snapshot::load(&state_file).unwrap().expect("snapshot on disk");
    assert_eq!(snapshot.expanded, vec!["SECT-3141".to_string()]);

    let restored = ScreenController::restore(Catalog::standard(), &snapshot).unwrap();
    assert_eq!(restored.current_screen(), Screen::CourseList);
    assert!(restored.is_expanded("SECT-3141"));
    assert!(!restored.is_expanded("SECT-3113"));
}

#[test]
fn sessions_are_independent() {
    let mut first = ScreenController::default();
    let second = ScreenController::default();

    first.dismiss_onboarding();
    first.toggle_expanded(0usize);

    assert_eq!(second.current_screen(), Screen::Onboarding);
    assert!(!second.is_expanded(0usize));
}
