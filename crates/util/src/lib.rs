//! Utilities shared by the HBT binary and terminal front end: preference
//! storage and path/environment helpers.

pub mod path_processing;
pub mod preferences;

pub use path_processing::{LOG_PATH_ENV, default_log_path, expand_tilde, is_truthy};
pub use preferences::{PREFERENCES_PATH_ENV, PreferencesError, PreferencesPayload, UserPreferences};
