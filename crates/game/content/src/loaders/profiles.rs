//! Affinity profile catalog loader.
//!
//! Loads named target profiles from RON files.

use std::path::Path;

use affinity_core::AffinityProfile;

use crate::catalog::ProfileCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for affinity profiles from RON files.
pub struct ProfileLoader;

impl ProfileLoader {
    /// Load a profile catalog from a RON file.
    ///
    /// RON format: `Vec<(String, AffinityProfile)>`, element sets as name lists:
    ///
    /// ```ron
    /// [
    ///     ("flan", (weak: [fire], resist: [], ignore: [], absorb: [ice])),
    ///     ("bomb", (absorb: [fire])),
    /// ]
    /// ```
    ///
    /// Omitted categories are empty. Duplicate names are an error.
    pub fn load(path: &Path) -> LoadResult<ProfileCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid profiles in {}: {}", path.display(), e))
    }

    /// Parse a profile catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ProfileCatalog> {
        let raw_data: Vec<(String, AffinityProfile)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse profile catalog RON: {}", e))?;

        let mut catalog = ProfileCatalog::new();
        for (name, profile) in raw_data {
            if catalog.contains(&name) {
                anyhow::bail!("Duplicate affinity profile '{}'", name);
            }
            catalog.insert(name, profile);
        }

        Ok(catalog)
    }
}
