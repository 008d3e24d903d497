//! Load a settings file and report the active policy.
//!
//! Exits non-zero when the file names an unknown policy, so it can gate
//! settings changes in CI.

use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use crate::utils;

/// Validate a settings file
#[derive(Parser, Debug)]
pub struct CheckSettings {
    /// TOML settings file (defaults to $AFFINITY_SETTINGS)
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,
}

impl CheckSettings {
    pub fn execute(self) -> Result<()> {
        let Some(path) = utils::settings_path(self.path) else {
            bail!(
                "No settings file given and {} is not set",
                utils::SETTINGS_ENV
            );
        };

        let config = utils::load_settings(Some(path.clone()))?;

        println!("{} {}", style("✓").green().bold(), style(path.display()).dim());
        println!("  {:<8} {}", style("enabled").bold(), config.enabled);
        println!("  {:<8} {}", style("policy").bold(), style(config.policy).yellow());

        match config.active_policy() {
            Some(policy) => println!("  {}", style(format!("hits resolve with {policy}")).dim()),
            None => println!("  {}", style("hits use the original formula").dim()),
        }

        Ok(())
    }
}
