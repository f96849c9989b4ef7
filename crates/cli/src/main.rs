use std::{
    fs::{self, File},
    path::PathBuf,
    sync::{Arc, Mutex},
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use hbt_tui::SiteConfig;
use hbt_util::{PreferencesPayload, UserPreferences, default_log_path, expand_tilde};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// HBT Studio, browsable from the terminal.
#[derive(Parser, Debug)]
#[command(name = "hbt", version, about)]
struct Args {
    /// Theme id or alias (studio, studio_hc, ansi256)
    #[arg(long)]
    theme: Option<String>,

    /// Fraction of a section that must be on screen before it becomes active
    #[arg(long)]
    threshold: Option<f32>,

    /// Length of the navigation scroll animation in milliseconds
    #[arg(long = "scroll-ms")]
    scroll_ms: Option<u64>,

    /// Jump to sections instead of animating
    #[arg(long)]
    reduce_motion: bool,

    /// Where to write the log (defaults to HBT_LOG_PATH or the data directory)
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_path = args.log_file.as_deref().map(expand_tilde).unwrap_or_else(default_log_path);
    init_tracing(log_path)?;

    let preferences = Arc::new(open_preferences());
    let config = site_config(&args, &preferences.snapshot());
    info!(
        threshold = config.visibility_threshold,
        scroll_ms = config.scroll_duration.as_millis() as u64,
        reduce_motion = config.reduce_motion,
        "launching"
    );
    hbt_tui::run(config, preferences).await
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_tracing(path: PathBuf) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

fn open_preferences() -> UserPreferences {
    UserPreferences::new().unwrap_or_else(|error| {
        warn!(%error, "preferences unavailable; using defaults for this session");
        UserPreferences::ephemeral()
    })
}

/// Saved preferences with command-line flags on top.
fn site_config(args: &Args, saved: &PreferencesPayload) -> SiteConfig {
    SiteConfig {
        theme: args.theme.clone(),
        visibility_threshold: args.threshold.unwrap_or(saved.visibility_threshold),
        scroll_duration: Duration::from_millis(args.scroll_ms.unwrap_or(saved.scroll_duration_ms)),
        reduce_motion: args.reduce_motion || saved.reduce_motion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_preferences_apply_without_flags() {
        let saved = PreferencesPayload {
            visibility_threshold: 0.3,
            scroll_duration_ms: 200,
            reduce_motion: true,
            ..PreferencesPayload::default()
        };
        let config = site_config(&Args::parse_from(["hbt"]), &saved);
        assert_eq!(config.theme, None);
        assert_eq!(config.visibility_threshold, 0.3);
        assert_eq!(config.scroll_duration, Duration::from_millis(200));
        assert!(config.reduce_motion);
    }

    #[test]
    fn flags_override_saved_preferences() {
        let args = Args::parse_from(["hbt", "--theme", "studio_hc", "--threshold", "0.75", "--scroll-ms", "0", "--reduce-motion"]);
        let config = site_config(&args, &PreferencesPayload::default());
        assert_eq!(config.theme.as_deref(), Some("studio_hc"));
        assert_eq!(config.visibility_threshold, 0.75);
        assert_eq!(config.scroll_duration, Duration::ZERO);
        assert!(config.reduce_motion);
    }
}
