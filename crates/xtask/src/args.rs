//! Arguments shared by the resolving commands.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use affinity_content::ProfileLoader;
use affinity_core::{AffinityError, AffinityProfile, ElementSet, Policy};

/// Parse a `fire,ice` style element list.
pub fn parse_elements(value: &str) -> Result<ElementSet, AffinityError> {
    value.parse()
}

/// Parse a policy name.
pub fn parse_policy(value: &str) -> Result<Policy, AffinityError> {
    Policy::from_name(value)
}

/// The hit being resolved: base damage, carried elements, and the target.
#[derive(Args, Debug)]
pub struct HitArgs {
    /// Base damage computed so far by the combat formula
    #[arg(short, long, allow_hyphen_values = true)]
    pub damage: i32,

    /// Elements the attack carries (e.g. fire,ice)
    #[arg(short, long, value_parser = parse_elements)]
    pub elements: Option<ElementSet>,

    /// Elements the target is weak to
    #[arg(long, value_parser = parse_elements)]
    pub weak: Option<ElementSet>,

    /// Elements the target resists
    #[arg(long, value_parser = parse_elements)]
    pub resist: Option<ElementSet>,

    /// Elements the target ignores
    #[arg(long, value_parser = parse_elements)]
    pub ignore: Option<ElementSet>,

    /// Elements the target absorbs
    #[arg(long, value_parser = parse_elements)]
    pub absorb: Option<ElementSet>,

    /// Named target from a profile catalog (replaces the category flags)
    #[arg(long, requires = "profiles", value_name = "NAME")]
    pub profile: Option<String>,

    /// RON profile catalog to look `--profile` up in
    #[arg(long, value_name = "FILE")]
    pub profiles: Option<PathBuf>,
}

impl HitArgs {
    pub fn elements(&self) -> ElementSet {
        self.elements.unwrap_or_default()
    }

    /// Build the target profile from a catalog entry or the category flags.
    pub fn target(&self) -> Result<AffinityProfile> {
        if let (Some(name), Some(path)) = (&self.profile, &self.profiles) {
            let catalog = ProfileLoader::load(path)
                .with_context(|| format!("Failed to load profiles: {}", path.display()))?;
            return catalog.get(name).copied().with_context(|| {
                format!(
                    "Unknown profile '{}' (available: {})",
                    name,
                    catalog.names().collect::<Vec<_>>().join(", ")
                )
            });
        }

        Ok(AffinityProfile::new(
            self.weak.unwrap_or_default(),
            self.resist.unwrap_or_default(),
            self.ignore.unwrap_or_default(),
            self.absorb.unwrap_or_default(),
        ))
    }
}

/// Output format
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// JSON object for scripting
    Json,
}
