//! Utility functions for xtask commands

use anyhow::{Context, Result};
use std::path::PathBuf;

use affinity_content::SettingsLoader;
use affinity_core::AffinityConfig;

/// Environment variable naming the default settings file.
pub const SETTINGS_ENV: &str = "AFFINITY_SETTINGS";

/// Resolve the settings path: explicit argument first, then `AFFINITY_SETTINGS`.
pub fn settings_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| std::env::var_os(SETTINGS_ENV).map(PathBuf::from))
}

/// Load settings from the resolved path, or defaults when no path is given.
pub fn load_settings(explicit: Option<PathBuf>) -> Result<AffinityConfig> {
    match settings_path(explicit) {
        Some(path) => {
            tracing::debug!("Loading settings from {}", path.display());
            SettingsLoader::load(&path)
                .with_context(|| format!("Failed to load settings: {}", path.display()))
        }
        None => {
            tracing::debug!("No settings file given, using defaults");
            Ok(AffinityConfig::default())
        }
    }
}
