//! Theme selection and terminal capability detection.

use std::env;

use hbt_util::is_truthy;
use tracing::debug;

use super::{Theme, ThemeDefinition, catalog};

/// Environment variable naming a theme that overrides the saved preference.
pub const THEME_ENV: &str = "TUI_THEME";

/// Loaded theme plus metadata about which definition produced it.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    pub fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

impl std::fmt::Debug for LoadedTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedTheme").field("id", &self.definition.id).finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme from explicit overrides, the saved preference, and terminal capability.
///
/// `requested` (the `--theme` flag) beats `TUI_THEME`, which beats `preferred`.
pub fn load(requested: Option<&str>, preferred: Option<&str>) -> LoadedTheme {
    if matches!(detect_color_capability(), ColorCapability::Ansi256) {
        debug!("ANSI-only terminal detected; forcing fallback palette");
        return LoadedTheme::from_definition(catalog::default_ansi());
    }

    let from_env = env::var(THEME_ENV).ok();
    for candidate in [requested, from_env.as_deref(), preferred].into_iter().flatten() {
        match catalog::resolve(candidate) {
            Some(definition) => return LoadedTheme::from_definition(definition),
            None => debug!(theme = candidate, "unknown theme name; trying next source"),
        }
    }

    LoadedTheme::from_definition(catalog::default_truecolor())
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var("TUI_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    if env::var("TUI_FORCE_TRUECOLOR").is_ok_and(|value| is_truthy(&value)) {
        return ColorCapability::Truecolor;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") || term.contains("direct") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_terminals_always_get_the_fallback() {
        temp_env::with_vars([("TUI_COLOR_MODE", Some("ansi256")), (THEME_ENV, Some("studio_hc"))], || {
            assert_eq!(load(Some("studio"), None).definition.id, "ansi256");
        });
    }

    #[test]
    fn explicit_request_beats_env_and_preference() {
        temp_env::with_vars([("TUI_COLOR_MODE", Some("truecolor")), (THEME_ENV, Some("studio"))], || {
            assert_eq!(load(Some("studio_hc"), Some("studio")).definition.id, "studio_hc");
        });
    }

    #[test]
    fn env_beats_saved_preference() {
        temp_env::with_vars([("TUI_COLOR_MODE", Some("truecolor")), (THEME_ENV, Some("studio-hc"))], || {
            assert_eq!(load(None, Some("studio")).definition.id, "studio_hc");
        });
    }

    #[test]
    fn unknown_names_fall_through_to_default() {
        temp_env::with_vars([("TUI_COLOR_MODE", Some("24bit")), (THEME_ENV, None::<&str>)], || {
            assert_eq!(load(Some("nope"), Some("also-nope")).definition.id, "studio");
        });
    }
}
