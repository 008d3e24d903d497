//! Deterministic elemental affinity resolution.
//!
//! `affinity-core` defines the element and affinity types and the pure
//! [`resolve`] function that computes the damage of a hit carrying one or more
//! elements under a selectable [`Policy`]. Loaders, the damage-pipeline hook,
//! and tooling live in sibling crates and depend on the types re-exported here.
pub mod affinity;
pub mod combat;
pub mod config;
pub mod element;
pub mod error;
pub mod formula;
pub mod policy;

pub use affinity::{Affinity, AffinityProfile};
pub use combat::{Stacking, apply_affinity, resolve, round_damage};
pub use config::AffinityConfig;
pub use element::{Element, ElementSet};
pub use error::{AffinityError, ErrorSeverity};
pub use formula::{ElementalFormula, VanillaFormula};
pub use policy::Policy;
