//! User preference persistence for the HBT site.
//!
//! A small JSON-backed store for the knobs a visitor may want to keep between
//! runs: the theme, how eagerly sections become active, and how navigation
//! scrolls. The file lives in the standard configuration directory
//! (`~/.config/hbt/preferences.json` on most platforms) unless
//! `HBT_PREFERENCES_PATH` points elsewhere.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::expand_tilde;

/// Environment variable allowing callers to override the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "HBT_PREFERENCES_PATH";

/// Default filename for the JSON payload.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.5;
const DEFAULT_SCROLL_DURATION_MS: u64 = 450;

/// Error surfaced when reading or writing preferences fails.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted preference values. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesPayload {
    /// Canonical identifier of the selected theme.
    pub preferred_theme: Option<String>,
    /// Fraction of a section that must be on screen for it to become active.
    pub visibility_threshold: f32,
    /// Length of the navigation scroll animation.
    pub scroll_duration_ms: u64,
    /// Jump instead of animating when navigating.
    pub reduce_motion: bool,
}

impl Default for PreferencesPayload {
    fn default() -> Self {
        Self {
            preferred_theme: None,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
            reduce_motion: false,
        }
    }
}

/// Thread-safe preferences store backed by a JSON file.
#[derive(Debug, Default)]
pub struct UserPreferences {
    path: PathBuf,
    payload: Mutex<PreferencesPayload>,
    persist_to_disk: bool,
}

impl UserPreferences {
    /// Opens the store at the default location (or `HBT_PREFERENCES_PATH`).
    pub fn new() -> Result<Self, PreferencesError> {
        Self::open(default_preferences_path())
    }

    /// Opens the store at an explicit path.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let path = path.into();
        let payload = load_payload(&path)?;
        Ok(Self {
            path,
            payload: Mutex::new(payload),
            persist_to_disk: true,
        })
    }

    /// Build an in-memory store used as a fallback when the config directory cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(PreferencesPayload::default()),
            persist_to_disk: false,
        }
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of every stored value.
    pub fn snapshot(&self) -> PreferencesPayload {
        self.lock().clone()
    }

    /// Returns the canonical identifier of the preferred theme, if one was saved.
    pub fn preferred_theme(&self) -> Option<String> {
        self.lock().preferred_theme.clone()
    }

    /// Persist a new preferred theme identifier.
    pub fn set_preferred_theme(&self, theme_id: Option<String>) -> Result<(), PreferencesError> {
        self.update(|payload| payload.preferred_theme = theme_id)
    }

    /// Applies `change` and persists the result.
    pub fn update(&self, change: impl FnOnce(&mut PreferencesPayload)) -> Result<(), PreferencesError> {
        let mut payload = self.lock();
        change(&mut payload);
        if self.persist_to_disk {
            self.save_locked(&payload)?;
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, PreferencesPayload> {
        self.payload.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn save_locked(&self, payload: &PreferencesPayload) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

fn default_preferences_path() -> PathBuf {
    if let Ok(path) = env::var(PREFERENCES_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hbt")
        .join(PREFERENCES_FILE_NAME)
}

fn load_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse preferences file; using defaults"
                );
                Ok(PreferencesPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(PreferencesPayload::default()),
        Err(error) => Err(PreferencesError::Io(error)),
    }
}
