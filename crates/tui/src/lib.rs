//! # HBT Studio terminal site
//!
//! A single-page portfolio rendered in the terminal: a header nav bar over a
//! scrolling page of five sections (home, about, services, portfolio,
//! contact). The nav bar always highlights the section the visitor is
//! looking at, whether they got there by clicking a nav control or by
//! scrolling.
//!
//! ## Architecture
//!
//! - `app`: [`App`](app::App) state, including the `hbt_engine::SectionSync`
//!   controller and the page layout it observes.
//! - `ui::components`: nav bar, page, contact form and hint bar components.
//! - `ui::runtime`: terminal lifecycle and the single `tokio::select!` loop.
//! - `contact`: form validation and the [`ContactTransport`] port.

mod app;
mod contact;
mod ui;

use std::{sync::Arc, time::Duration};

use anyhow::Result;
use hbt_engine::{DEFAULT_SCROLL_DURATION, DEFAULT_VISIBILITY_THRESHOLD};
use hbt_util::UserPreferences;

pub use contact::{ContactError, ContactField, ContactTransport, FieldError, LogTransport, validate_contact};

/// Startup options resolved from preferences and command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Theme requested explicitly; beats `TUI_THEME` and the saved preference.
    pub theme: Option<String>,
    pub visibility_threshold: f32,
    pub scroll_duration: Duration,
    /// Navigation jumps instead of animating.
    pub reduce_motion: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: None,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            scroll_duration: DEFAULT_SCROLL_DURATION,
            reduce_motion: false,
        }
    }
}

/// Runs the site until the visitor quits, delivering contact messages
/// through the logging transport.
///
/// # Errors
///
/// Terminal setup or teardown failures.
pub async fn run(config: SiteConfig, preferences: Arc<UserPreferences>) -> Result<()> {
    run_with_transport(config, preferences, Arc::new(LogTransport)).await
}

/// Like [`run`], with a caller-supplied contact transport.
pub async fn run_with_transport(config: SiteConfig, preferences: Arc<UserPreferences>, transport: Arc<dyn ContactTransport>) -> Result<()> {
    ui::runtime::run_app(config, preferences, transport).await
}
