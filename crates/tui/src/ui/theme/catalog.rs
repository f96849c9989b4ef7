use ratatui::style::Color;

use super::{Ansi256Theme, StudioTheme, StudioThemeHighContrast, Theme};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used for persistence.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Colors summarizing the palette; shown in the hint bar after a switch.
    pub swatch: ThemeSwatch,
    /// Theme aliases (e.g., env overrides) that map back to this definition.
    pub aliases: &'static [&'static str],
    /// Whether the palette targets ANSI/8-bit terminals.
    pub is_ansi_fallback: bool,
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ThemeSwatch {
    pub background: Color,
    pub accent: Color,
}

/// Ordered list of selectable themes; the first entry is the truecolor default.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "studio",
        label: "Studio",
        swatch: ThemeSwatch {
            background: Color::Rgb(0x11, 0x18, 0x27),
            accent: Color::Rgb(0x2D, 0xD4, 0xBF),
        },
        aliases: &["studio", "teal", "default"],
        is_ansi_fallback: false,
        factory: || Box::new(StudioTheme::new()),
    },
    ThemeDefinition {
        id: "studio_hc",
        label: "Studio High Contrast",
        swatch: ThemeSwatch {
            background: Color::Rgb(0x0A, 0x0F, 0x19),
            accent: Color::Rgb(0x5E, 0xEA, 0xD4),
        },
        aliases: &["studio_hc", "studio-high-contrast", "studio-hc", "studiohc"],
        is_ansi_fallback: false,
        factory: || Box::new(StudioThemeHighContrast::new()),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        swatch: ThemeSwatch {
            background: Color::Indexed(234),
            accent: Color::Indexed(43),
        },
        aliases: &["ansi256", "ansi", "256"],
        is_ansi_fallback: true,
        factory: || Box::new(Ansi256Theme::new()),
    },
];

/// Locate a definition by id or alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let normalized = name.trim().to_ascii_lowercase();
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.id.eq_ignore_ascii_case(&normalized) || definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(&normalized))
    })
}

/// The definition following `current` among palettes of the same color capability.
pub fn next_after(current: &ThemeDefinition) -> &'static ThemeDefinition {
    let candidates: Vec<&'static ThemeDefinition> = THEME_DEFINITIONS
        .iter()
        .filter(|definition| definition.is_ansi_fallback == current.is_ansi_fallback)
        .collect();
    let position = candidates.iter().position(|definition| definition.id == current.id).unwrap_or(0);
    candidates
        .get((position + 1) % candidates.len().max(1))
        .copied()
        .unwrap_or_else(default_truecolor)
}

pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

pub fn default_ansi() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[THEME_DEFINITIONS.len() - 1]
}
