//! ANSI 256-color fallback theme tailored for terminals without truecolor support.
//!
//! Approximates the Studio palette with indexed colors so the site stays
//! legible inside macOS Terminal and other 8-bit terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(234),
                surface: Color::Indexed(235),
                surface_muted: Color::Indexed(238),
                border: Color::Indexed(238),

                text: Color::Indexed(255),
                text_secondary: Color::Indexed(252),
                text_muted: Color::Indexed(246),

                accent_primary: Color::Indexed(43),
                accent_secondary: Color::Indexed(80),
                accent_strong: Color::Indexed(30),

                success: Color::Indexed(78),
                error: Color::Indexed(203),

                selection_bg: Color::Indexed(238),
                focus: Color::Indexed(80),

                scrollbar_track: Color::Indexed(235),
                scrollbar_thumb: Color::Indexed(240),
            },
        }
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
