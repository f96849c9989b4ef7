use std::path::PathBuf;

use dirs_next::{data_local_dir, home_dir};

/// Environment variable overriding where the tracing log file is written.
pub const LOG_PATH_ENV: &str = "HBT_LOG_PATH";

/// Expands a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let p = path.trim();
    if p == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = p.strip_prefix("~/").or_else(|| p.strip_prefix("~\\")) {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(p)
}

/// Log file location: `HBT_LOG_PATH` when set, otherwise
/// `<data-local-dir>/hbt/hbt.log`.
pub fn default_log_path() -> PathBuf {
    if let Ok(path) = std::env::var(LOG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }
    data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join("hbt").join("hbt.log")
}

/// Interprets common spellings of "on" in environment variables.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "enable" | "enabled"
    )
}
