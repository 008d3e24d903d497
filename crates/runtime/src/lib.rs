//! Runtime wiring of the elemental damage step.
//!
//! This crate sits at the boundary where a host's combat pipeline hands one
//! elemental damage step over to this workspace. [`ElementalDamageHook`]
//! decides per call whether the host's original formula runs or
//! [`affinity_core::resolve`] does, based on the active [`AffinityConfig`].
//!
//! Modules are organized by responsibility:
//! - [`hooks`] hosts the damage hook and its routing types
//! - [`error`] defines errors raised while wiring a hook from settings files
pub mod error;
pub mod hooks;

pub use affinity_core::AffinityConfig;
pub use error::{Result, RuntimeError};
pub use hooks::{DamageOutcome, ElementalDamageHook, Route};
