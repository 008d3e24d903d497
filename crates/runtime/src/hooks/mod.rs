//! Damage-pipeline hooks.
//!
//! A hook replaces one step of the host's combat formula. The host keeps the
//! original step available, and the hook falls back to it whenever the
//! feature is disabled or the `default` policy is selected.
//!
//! # Routing
//!
//! ```text
//! disabled            → original formula
//! no elements carried → damage unchanged
//! policy = default    → original formula
//! otherwise           → affinity_core::resolve
//! ```

mod elemental;

pub use elemental::{DamageOutcome, ElementalDamageHook, Route};
