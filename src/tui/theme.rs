use ratatui::style::Color;

use crate::cli::ThemeChoice;

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    /// De-emphasized text: hints, placeholder, completed tasks.
    pub dim: Color,
    /// Cursor-line background.
    pub highlight: Color,
    pub accent: Color,
    pub done: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            highlight: Color::Rgb(0x3D, 0x14, 0x38),
            accent: Color::Rgb(0xFB, 0x41, 0x96),
            done: Color::Rgb(0x44, 0xFF, 0x88),
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x21, 0x21, 0x21),
            text_bright: Color::Rgb(0x00, 0x00, 0x00),
            dim: Color::Rgb(0x9E, 0x9E, 0x9E),
            highlight: Color::Rgb(0xBB, 0xDE, 0xFB),
            accent: Color::Rgb(0x1E, 0x88, 0xE5),
            done: Color::Rgb(0x38, 0x8E, 0x3C),
        }
    }

    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Theme::dark(),
            ThemeChoice::Light => Theme::light(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}
