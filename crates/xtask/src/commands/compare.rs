//! Resolve one hit under every policy side by side.

use anyhow::Result;
use clap::Parser;
use console::style;

use affinity_core::{AffinityConfig, Policy, VanillaFormula};
use affinity_runtime::ElementalDamageHook;

use crate::args::{HitArgs, OutputFormat};
use crate::commands::resolve::route_label;

/// Compare all policies for one hit
#[derive(Parser, Debug)]
pub struct Compare {
    #[command(flatten)]
    hit: HitArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl Compare {
    pub fn execute(self) -> Result<()> {
        let target = self.hit.target()?;
        let elements = self.hit.elements();

        let rows: Vec<(Policy, i32, String)> = Policy::ALL
            .into_iter()
            .map(|policy| {
                let hook = ElementalDamageHook::new(AffinityConfig::with_policy(policy), VanillaFormula);
                let outcome = hook.calculate_detailed(&target, elements, self.hit.damage);
                (policy, outcome.damage, route_label(outcome.route))
            })
            .collect();

        match self.format {
            OutputFormat::Json => {
                let results: serde_json::Map<String, serde_json::Value> = rows
                    .iter()
                    .map(|(policy, damage, _)| (policy.to_string(), (*damage).into()))
                    .collect();
                let json = serde_json::json!({
                    "damage": self.hit.damage,
                    "elements": elements.to_string(),
                    "results": results,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            OutputFormat::Text => {
                println!(
                    "{} {} {}",
                    style("Elemental hit:").bold(),
                    style(self.hit.damage).bold(),
                    style(elements).cyan()
                );
                println!(
                    "  {} weak={} resist={} ignore={} absorb={}",
                    style("target").dim(),
                    target.weak,
                    target.resist,
                    target.ignore,
                    target.absorb
                );
                println!();
                for (policy, damage, route) in &rows {
                    println!(
                        "  {:<12} {:>8}  {}",
                        style(policy).yellow(),
                        style(damage).green().bold(),
                        style(route).dim()
                    );
                }
            }
        }

        Ok(())
    }
}
