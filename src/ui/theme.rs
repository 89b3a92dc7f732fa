//! Color palettes for the terminal front end.
//!
//! Light and dark use the brown Material scheme the app has always shipped
//! with; high contrast falls back to the basic ANSI colors.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeChoice;

mod colors {
    use super::Color;

    pub const BROWN_500: Color = Color::Rgb(0x79, 0x55, 0x48);
    pub const BROWN_400: Color = Color::Rgb(0x8D, 0x6E, 0x63);
    pub const BROWN_700: Color = Color::Rgb(0x5D, 0x40, 0x37);
    pub const BROWN_900: Color = Color::Rgb(0x3E, 0x27, 0x23);
    pub const BROWN_100: Color = Color::Rgb(0xD7, 0xCC, 0xC8);
    pub const AMBER_50: Color = Color::Rgb(0xFF, 0xF8, 0xE1);
    pub const PAPER: Color = Color::Rgb(0xFF, 0xFD, 0xF9);
    pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
}

/// Resolved palette used when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub on_primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub on_background: Color,
    pub surface: Color,
    pub on_surface: Color,
}

impl Palette {
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: colors::BROWN_500,
            on_primary: colors::WHITE,
            secondary: colors::AMBER_50,
            background: colors::PAPER,
            on_background: colors::BROWN_900,
            surface: colors::WHITE,
            on_surface: colors::BROWN_900,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: colors::BROWN_400,
            on_primary: colors::WHITE,
            secondary: colors::BROWN_100,
            background: colors::BROWN_900,
            on_background: colors::WHITE,
            surface: colors::BROWN_700,
            on_surface: colors::WHITE,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            primary: Color::Yellow,
            on_primary: Color::Black,
            secondary: Color::Cyan,
            background: Color::Black,
            on_background: Color::White,
            surface: Color::Black,
            on_surface: Color::White,
        }
    }

    #[must_use]
    pub fn for_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Self::light(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::HighContrast => Self::high_contrast(),
        }
    }
}

/// Named styles built from a palette.
pub mod styles {
    use super::{Modifier, Palette, Style};

    pub fn onboarding(p: &Palette) -> Style {
        Style::default().fg(p.on_primary).bg(p.primary)
    }

    /// The inverted "Continue" button on the onboarding screen.
    pub fn button(p: &Palette) -> Style {
        Style::default()
            .fg(p.primary)
            .bg(p.on_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn background(p: &Palette) -> Style {
        Style::default().fg(p.on_background).bg(p.background)
    }

    pub fn card(p: &Palette) -> Style {
        Style::default().fg(p.on_surface).bg(p.surface)
    }

    pub fn heading(p: &Palette) -> Style {
        Style::default().fg(p.primary).add_modifier(Modifier::BOLD)
    }

    pub fn prerequisites(p: &Palette) -> Style {
        Style::default().fg(p.secondary)
    }

    /// The "None" sentinel, dimmed so it reads as absence.
    pub fn no_prerequisites(p: &Palette) -> Style {
        Style::default()
            .fg(p.on_surface)
            .add_modifier(Modifier::DIM | Modifier::ITALIC)
    }

    pub fn selected_border(p: &Palette) -> Style {
        Style::default().fg(p.primary).add_modifier(Modifier::BOLD)
    }
}
