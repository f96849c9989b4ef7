use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Semantic color roles used throughout the site.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub border: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    /// Headings, the brand mark and the active nav control.
    pub accent_primary: Color,
    /// Highlighted names and bullets inside body copy.
    pub accent_secondary: Color,
    /// Filled call-to-action buttons.
    pub accent_strong: Color,

    pub success: Color,
    pub error: Color,

    pub selection_bg: Color,
    pub focus: Color,

    pub scrollbar_track: Color,
    pub scrollbar_thumb: Color,
}

/// Theme trait exposes semantic roles and common style builders.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    // Text styles
    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    // Borders and focus
    fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles().focus } else { self.roles().border };
        Style::default().fg(color)
    }

    fn status_success(&self) -> Style {
        Style::default().fg(self.roles().success)
    }
    fn status_error(&self) -> Style {
        Style::default().fg(self.roles().error)
    }

    // Accents
    fn accent_primary_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary)
    }
    fn accent_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().accent_secondary)
    }
    fn accent_emphasis_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary).add_modifier(Modifier::BOLD)
    }
}
