//! Content loaders for reading affinity data from files.
//!
//! This module provides loaders that convert RON/TOML files into affinity-core types.

pub mod profiles;
pub mod settings;

pub use profiles::ProfileLoader;
pub use settings::SettingsLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
