//! Resolve one hit with the configured policy.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use affinity_core::{AffinityConfig, Policy, VanillaFormula};
use affinity_runtime::{ElementalDamageHook, Route};

use crate::args::{HitArgs, OutputFormat, parse_policy};
use crate::utils;

/// Resolve one hit
#[derive(Parser, Debug)]
pub struct Resolve {
    #[command(flatten)]
    hit: HitArgs,

    /// Policy to use (overrides the settings file)
    #[arg(short, long, value_parser = parse_policy)]
    policy: Option<Policy>,

    /// TOML settings file (defaults to $AFFINITY_SETTINGS)
    #[arg(short, long, value_name = "FILE", conflicts_with = "policy")]
    settings: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl Resolve {
    pub fn execute(self) -> Result<()> {
        let config = match self.policy {
            Some(policy) => AffinityConfig::with_policy(policy),
            None => utils::load_settings(self.settings)?,
        };

        let target = self.hit.target()?;
        let elements = self.hit.elements();
        let hook = ElementalDamageHook::new(config, VanillaFormula);
        let outcome = hook.calculate_detailed(&target, elements, self.hit.damage);

        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "damage": self.hit.damage,
                    "elements": elements.to_string(),
                    "enabled": config.enabled,
                    "policy": config.policy.to_string(),
                    "route": route_label(outcome.route),
                    "result": outcome.damage,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            OutputFormat::Text => {
                println!(
                    "{} {} {} {}",
                    style(self.hit.damage).bold(),
                    style(elements).cyan(),
                    style("→").dim(),
                    style(outcome.damage).green().bold()
                );
                println!("  {} {}", style("route:").dim(), route_label(outcome.route));
            }
        }

        Ok(())
    }
}

pub(crate) fn route_label(route: Route) -> String {
    match route {
        Route::Original => "original formula".to_string(),
        Route::Unelemental => "no elements".to_string(),
        Route::Resolved(policy) => policy.to_string(),
    }
}
