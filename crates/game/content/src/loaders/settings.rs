//! Elemental affinity settings loader.

use std::path::Path;

use affinity_core::{AffinityConfig, Policy};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// On-disk layout. Keys mirror the host's setting identifiers.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default)]
    elemental_affinities: Option<SettingsSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsSection {
    enabled: Option<bool>,
    #[serde(rename = "type")]
    policy: Option<String>,
}

/// Loader for elemental affinity settings from TOML files.
///
/// ```toml
/// [elemental_affinities]
/// enabled = true
/// type = "balanced"
/// ```
///
/// Missing keys fall back to [`AffinityConfig::default`]. An unknown `type`
/// is an error; it is never replaced by a default policy.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> LoadResult<AffinityConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid settings in {}: {}", path.display(), e))
    }

    /// Parse settings from TOML text.
    pub fn parse(content: &str) -> LoadResult<AffinityConfig> {
        let file: SettingsFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings TOML: {}", e))?;

        let section = file.elemental_affinities.unwrap_or_default();
        let mut config = AffinityConfig::default();

        if let Some(enabled) = section.enabled {
            config.enabled = enabled;
        }
        if let Some(name) = section.policy {
            config.policy = Policy::from_name(&name)?;
        }

        Ok(config)
    }
}
