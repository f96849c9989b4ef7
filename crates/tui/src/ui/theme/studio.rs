use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Studio palette: teal accents over charcoal greys.
pub const CHARCOAL_900: Color = Color::Rgb(0x11, 0x18, 0x27); // #111827 - page background
pub const CHARCOAL_800: Color = Color::Rgb(0x1F, 0x29, 0x37); // #1f2937 - alternating sections, header
pub const CHARCOAL_700: Color = Color::Rgb(0x37, 0x41, 0x51); // #374151 - card borders
pub const CHARCOAL_600: Color = Color::Rgb(0x4B, 0x55, 0x63); // #4b5563

pub const GREY_100: Color = Color::Rgb(0xF3, 0xF4, 0xF6); // #f3f4f6 - body text
pub const GREY_300: Color = Color::Rgb(0xD1, 0xD5, 0xDB); // #d1d5db - paragraphs
pub const GREY_400: Color = Color::Rgb(0x9C, 0xA3, 0xAF); // #9ca3af - footers, hints

pub const TEAL_300: Color = Color::Rgb(0x5E, 0xEA, 0xD4); // #5eead4
pub const TEAL_400: Color = Color::Rgb(0x2D, 0xD4, 0xBF); // #2dd4bf
pub const TEAL_600: Color = Color::Rgb(0x0D, 0x94, 0x88); // #0d9488

pub const GREEN: Color = Color::Rgb(0x34, 0xD3, 0x99); // #34d399
pub const RED: Color = Color::Rgb(0xF8, 0x71, 0x71); // #f87171

/// Default teal-on-charcoal theme.
#[derive(Debug, Clone)]
pub struct StudioTheme {
    roles: ThemeRoles,
}

impl StudioTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: CHARCOAL_900,
                surface: CHARCOAL_800,
                surface_muted: CHARCOAL_700,
                border: CHARCOAL_700,

                text: GREY_100,
                text_secondary: GREY_300,
                text_muted: GREY_400,

                accent_primary: TEAL_400,
                accent_secondary: TEAL_300,
                accent_strong: TEAL_600,

                success: GREEN,
                error: RED,

                selection_bg: CHARCOAL_700,
                focus: TEAL_300,

                scrollbar_track: CHARCOAL_800,
                scrollbar_thumb: CHARCOAL_600,
            },
        }
    }
}

impl Theme for StudioTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// High-contrast Studio: brighter copy and teal borders.
#[derive(Debug, Clone)]
pub struct StudioThemeHighContrast {
    roles: ThemeRoles,
}

impl StudioThemeHighContrast {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Rgb(0x0A, 0x0F, 0x19),
                surface: CHARCOAL_900,
                surface_muted: CHARCOAL_800,
                border: TEAL_600,

                text: Color::White,
                text_secondary: GREY_100,
                text_muted: GREY_300,

                accent_primary: TEAL_300,
                accent_secondary: TEAL_300,
                accent_strong: TEAL_600,

                success: GREEN,
                error: RED,

                selection_bg: TEAL_600,
                focus: Color::Rgb(0xFA, 0xCC, 0x15), // amber focus ring

                scrollbar_track: CHARCOAL_800,
                scrollbar_thumb: TEAL_400,
            },
        }
    }
}

impl Theme for StudioThemeHighContrast {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
