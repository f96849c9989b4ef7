//! Theme styling for the terminal site.
//!
//! Defines the Studio palettes, an ANSI 256-color fallback, semantic theme
//! roles, and helper builders for Ratatui widgets and styles. Prefer these
//! helpers over hard-coded colors.

pub mod ansi256;
pub mod catalog;
pub mod loader;
pub mod roles;
pub mod studio;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use catalog::ThemeDefinition;
pub use loader::load;
pub use roles::Theme;
pub use studio::{StudioTheme, StudioThemeHighContrast};
