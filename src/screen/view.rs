//! Pure "state in, view out" render model.
//!
//! A front end re-runs [`view`] after every command and draws the result.
//! Nothing in here knows about colors, fonts or terminals.

use super::controller::ScreenController;
use crate::catalog::{Course, CourseId};
use crate::core::{CardState, Screen};
use serde::Serialize;

pub const WELCOME_HEADLINE: &str = "Welcome to the Academic Courses App!";
pub const CONTINUE_LABEL: &str = "Continue";
pub const SHOW_MORE: &str = "Show More";
pub const SHOW_LESS: &str = "Show Less";

/// Everything a front end needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum View {
    Onboarding {
        headline: &'static str,
        action: &'static str,
    },
    CourseList {
        cards: Vec<CardView>,
    },
}

/// One course card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: CourseId,
    pub heading: String,
    pub credits: String,
    /// Present only while the card is expanded.
    pub detail: Option<CardDetail>,
    pub toggle_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardDetail {
    pub description: String,
    pub prerequisites: String,
    /// False when the course lists the "None" sentinel.
    pub has_prerequisites: bool,
}

impl CardView {
    pub fn new(id: CourseId, course: &Course, state: CardState) -> Self {
        let detail = state.is_expanded().then(|| CardDetail {
            description: format!("Description: {}", course.description),
            prerequisites: format!("Prerequisites: {}", course.prerequisites),
            has_prerequisites: course.has_prerequisites(),
        });
        Self {
            id,
            heading: course.heading(),
            credits: format!("Credit Hours: {}", course.credit_hours),
            detail,
            toggle_label: if state.is_expanded() {
                SHOW_LESS
            } else {
                SHOW_MORE
            },
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.detail.is_some()
    }

    /// Text lines in reading order.
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = vec![self.heading.as_str(), self.credits.as_str()];
        if let Some(detail) = &self.detail {
            lines.push(&detail.description);
            lines.push(&detail.prerequisites);
        }
        lines
    }
}

impl View {
    pub fn screen(&self) -> Screen {
        match self {
            Self::Onboarding { .. } => Screen::Onboarding,
            Self::CourseList { .. } => Screen::CourseList,
        }
    }

    /// Plain-text rendering, one card per block.
    pub fn to_plain_text(&self) -> String {
        match self {
            Self::Onboarding { headline, action } => format!("{headline}\n\n[ {action} ]\n"),
            Self::CourseList { cards } => {
                let mut out = String::new();
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    for line in card.lines() {
                        out.push_str(line);
                        out.push('\n');
                    }
                    out.push_str(&format!("[{}]\n", card.toggle_label));
                }
                out
            }
        }
    }
}

/// Render model for the controller's current state.
pub fn view(controller: &ScreenController) -> View {
    match controller.current_screen() {
        Screen::Onboarding => View::Onboarding {
            headline: WELCOME_HEADLINE,
            action: CONTINUE_LABEL,
        },
        Screen::CourseList => View::CourseList {
            cards: controller
                .catalog()
                .entries()
                .map(|(id, course)| CardView::new(id, course, controller.card_state(id)))
                .collect(),
        },
    }
}
