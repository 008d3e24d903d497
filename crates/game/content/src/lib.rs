//! Data-driven content definitions and loaders.
//!
//! This crate houses the data the elemental damage step is configured with and
//! provides loaders for RON/TOML data files:
//! - Elemental affinity settings (data-driven via TOML)
//! - Named target affinity profiles (data-driven via RON)
//!
//! Content is consumed by the damage hook and tooling; the resolver itself
//! never reads files.
//!
//! All loaders use affinity-core types directly with serde for RON/TOML deserialization.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::ProfileCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{ProfileLoader, SettingsLoader};
