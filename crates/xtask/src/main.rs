//! Development tasks for the elemental affinity workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod args;
mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{CheckSettings, Compare, Resolve};

/// Development tasks for the elemental affinity workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Evaluate elemental affinity policies", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Resolve one hit with the configured policy
    Resolve(Resolve),

    /// Resolve one hit under every policy side by side
    Compare(Compare),

    /// Load a settings file and report the active policy
    CheckSettings(CheckSettings),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for AFFINITY_SETTINGS)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Resolve(cmd) => cmd.execute(),
        Command::Compare(cmd) => cmd.execute(),
        Command::CheckSettings(cmd) => cmd.execute(),
    }
}
