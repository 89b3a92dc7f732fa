//! Terminal rendering for the view model.
//!
//! [`draw`] turns [`crate::screen::view`] output into ratatui widgets. It is
//! re-run after every key press; nothing is cached between frames except the
//! scroll position kept on [`App`].

mod app;
pub mod theme;

pub use app::{App, Flow};

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::screen::{view, CardView, View};
use theme::{styles, Palette};

const HELP: &str = "↑/↓ select · Enter toggle · q quit";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    match view(app.controller()) {
        View::Onboarding { headline, action } => {
            draw_onboarding(frame, area, app.palette(), headline, action);
        }
        View::CourseList { cards } => draw_course_list(frame, area, app, &cards),
    }
}

fn draw_onboarding(frame: &mut Frame, area: Rect, palette: &Palette, headline: &str, action: &str) {
    frame.render_widget(Block::default().style(styles::onboarding(palette)), area);

    let [headline_area, _, button_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(area);

    frame.render_widget(
        Paragraph::new(headline)
            .alignment(Alignment::Center)
            .style(styles::onboarding(palette)),
        headline_area,
    );

    let label = format!("  {action}  ");
    let [button] = Layout::horizontal([Constraint::Length(label.width() as u16)])
        .flex(Flex::Center)
        .areas(button_area);
    frame.render_widget(
        Paragraph::new(label).style(styles::button(palette)),
        button,
    );
}

fn draw_course_list(frame: &mut Frame, area: Rect, app: &mut App, cards: &[CardView]) {
    let palette = *app.palette();
    frame.render_widget(Block::default().style(styles::background(&palette)), area);

    let [list_area, help_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
    let [column] = Layout::horizontal([Constraint::Percentage(app.card_width_percent())])
        .flex(Flex::Center)
        .areas(list_area);

    let inner_width = column.width.saturating_sub(2).max(1);
    let bodies: Vec<Vec<Line>> = cards
        .iter()
        .map(|card| card_lines(card, inner_width, &palette))
        .collect();
    let heights: Vec<u16> = bodies
        .iter()
        .map(|body| card_height(body, inner_width))
        .collect();

    let selected = app.selected().min(cards.len().saturating_sub(1));
    app.first_visible = scroll_to(app.first_visible, selected, &heights, column.height);

    let visible: u16 = heights[app.first_visible..]
        .iter()
        .scan(0u16, |used, h| {
            (*used + h <= column.height).then(|| {
                *used += h;
                *h
            })
        })
        .sum();
    let mut y = column.y + column.height.saturating_sub(visible) / 2;

    for (index, body) in bodies.into_iter().enumerate().skip(app.first_visible) {
        let height = heights[index];
        let bottom = column.y + column.height;
        if y >= bottom {
            break;
        }
        let rect = Rect::new(column.x, y, column.width, height.min(bottom - y));
        let border = if index == selected {
            styles::selected_border(&palette)
        } else {
            Style::default().fg(palette.on_surface)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .style(styles::card(&palette));
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(body)
                .wrap(Wrap { trim: false })
                .block(block),
            rect,
        );
        y += height;
    }

    frame.render_widget(
        Paragraph::new(HELP)
            .alignment(Alignment::Center)
            .style(styles::background(&palette)),
        help_area,
    );
}

/// Unwrapped lines for one card body; `Paragraph::wrap` lays them out.
///
/// The toggle is right-aligned on the heading row when both fit in `width`
/// columns, otherwise it gets a row of its own.
fn card_lines(card: &CardView, width: u16, palette: &Palette) -> Vec<Line<'static>> {
    let marker = if card.is_expanded() { "▲" } else { "▼" };
    let toggle = format!("{marker} {}", card.toggle_label);
    let heading = styles::heading(palette);
    let width = usize::from(width);
    let used = card.heading.width() + toggle.width();

    let mut lines = Vec::new();
    if used < width {
        lines.push(Line::from(vec![
            Span::styled(card.heading.clone(), heading),
            Span::raw(" ".repeat(width - used)),
            Span::styled(toggle, heading),
        ]));
    } else {
        lines.push(Line::styled(card.heading.clone(), heading));
        lines.push(Line::styled(toggle, heading).alignment(Alignment::Right));
    }
    lines.push(Line::from(card.credits.clone()));

    if let Some(detail) = &card.detail {
        lines.push(Line::from(detail.description.clone()));
        let style = if detail.has_prerequisites {
            styles::prerequisites(palette)
        } else {
            styles::no_prerequisites(palette)
        };
        lines.push(Line::styled(detail.prerequisites.clone(), style));
    }
    lines
}

/// Rows a card occupies at `width` inner columns, borders included.
fn card_height(body: &[Line], width: u16) -> u16 {
    let rows = Paragraph::new(body.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width.max(1));
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
}

/// First visible card index that keeps `selected` on screen.
fn scroll_to(first: usize, selected: usize, heights: &[u16], viewport: u16) -> usize {
    let mut first = first.min(selected);
    while first < selected {
        let span: u16 = heights[first..=selected].iter().sum();
        if span <= viewport {
            break;
        }
        first += 1;
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::screen::ScreenController;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn listing_app() -> App {
        let mut controller = ScreenController::default();
        controller.dismiss_onboarding();
        App::new(controller, &Config::default())
    }

    #[test]
    fn onboarding_shows_headline_and_button() {
        let mut app = App::new(ScreenController::default(), &Config::default());
        let screen = render(&mut app, 60, 12);
        assert!(screen.contains("Welcome to the Academic Courses App!"));
        assert!(screen.contains("Continue"));
        assert!(!screen.contains("SECT-3113"));
    }

    #[test]
    fn course_list_shows_collapsed_cards() {
        let mut app = listing_app();
        let screen = render(&mut app, 100, 40);
        assert!(screen.contains("Mobile Application Development (SECT-3113)"));
        assert!(screen.contains("Credit Hours: 3"));
        assert!(screen.contains("Show More"));
        assert!(!screen.contains("Description:"));
    }

    #[test]
    fn expanded_card_renders_detail() {
        let mut controller = ScreenController::default();
        controller.dismiss_onboarding();
        controller.toggle_expanded("SECT-3113");
        let mut app = App::new(controller, &Config::default());

        let screen = render(&mut app, 100, 40);
        assert!(screen.contains("Show Less"));
        assert!(screen.contains("Description:"));
        assert!(screen.contains("Prerequisites: Web Design and Programming"));
    }

    #[test]
    fn selection_scrolls_into_view() {
        let mut app = listing_app();
        for _ in 0..4 {
            app.handle_key(crossterm::event::KeyEvent::new(
                crossterm::event::KeyCode::Down,
                crossterm::event::KeyModifiers::NONE,
            ));
        }
        let screen = render(&mut app, 80, 10);
        assert!(screen.contains("SECT-3082"));
        assert!(app.first_visible > 0);
    }

    fn wide_card(expanded: bool) -> CardView {
        let course = crate::catalog::Course {
            title: "数据结构",
            code: "WIDE-0001",
            credit_hours: 3,
            description: "Trees, graphs and hashing.",
            prerequisites: "None",
        };
        let state = if expanded {
            crate::core::CardState::Expanded
        } else {
            crate::core::CardState::Collapsed
        };
        CardView::new(crate::catalog::CourseId(0), &course, state)
    }

    #[test]
    fn toggle_is_right_aligned_by_display_width() {
        let palette = Palette::light();
        let lines = card_lines(&wide_card(false), 40, &palette);

        assert_eq!(lines[0].width(), 40);
        assert!(lines[0].to_string().ends_with("▼ Show More"));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn toggle_moves_to_its_own_row_when_narrow() {
        let palette = Palette::light();
        let lines = card_lines(&wide_card(false), 20, &palette);

        assert_eq!(lines[1].to_string(), "▼ Show More");
        assert_eq!(lines[1].alignment, Some(Alignment::Right));
    }

    #[test]
    fn missing_prerequisites_use_muted_style() {
        let palette = Palette::light();
        let lines = card_lines(&wide_card(true), 60, &palette);
        let last = lines.last().unwrap();

        assert_eq!(last.to_string(), "Prerequisites: None");
        assert_eq!(last.style, styles::no_prerequisites(&palette));
    }

    #[test]
    fn card_height_counts_wrapped_rows() {
        let palette = Palette::light();
        let body = card_lines(&wide_card(true), 12, &palette);

        assert!(card_height(&body, 12) > body.len() as u16 + 2);
        assert_eq!(card_height(&card_lines(&wide_card(false), 60, &palette), 60), 4);
    }

    #[test]
    fn scroll_keeps_selected_visible() {
        let heights = [4, 4, 4, 4];
        assert_eq!(scroll_to(0, 0, &heights, 8), 0);
        assert_eq!(scroll_to(0, 3, &heights, 8), 2);
        assert_eq!(scroll_to(3, 1, &heights, 8), 1);
    }
}
