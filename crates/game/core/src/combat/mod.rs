//! Elemental damage resolution.
//!
//! This module provides pure functions that turn a base damage value into the
//! final damage of an elemental hit. All logic is deterministic and side-effect free.
//!
//! # Architecture
//!
//! - **Pure Functions**: No allocation beyond locals, no I/O, no shared state
//! - **Closed Dispatch**: [`resolve`] matches on [`Policy`]; each policy lives in its own module
//! - **Fixed Order**: Elements are visited in [`Element::ORDER`](crate::Element::ORDER)
//!
//! # Core Functions
//!
//! - `resolve`: Entry point (empty-set short-circuit + policy dispatch)
//! - `apply_affinity`: One affinity category against the carried elements
//! - `round_damage`: Float-to-integer conversion used at every return point

pub mod balanced;
pub mod extra_mean;
pub mod favorable;
pub mod stacking;
pub mod unfavorable;

pub use stacking::{Stacking, apply_affinity};

use crate::affinity::AffinityProfile;
use crate::element::ElementSet;
use crate::policy::Policy;

/// Resolve the final damage of an elemental hit.
///
/// Returns `damage` unchanged when `elements` carries no element, for every
/// policy. `Policy::Default` is routed to the original formula by the damage
/// pipeline; when it reaches this function directly it is evaluated as
/// `Favorable`, which is what the unpatched formula computes.
///
/// # Arguments
///
/// * `target` - Affinities of the target being hit
/// * `elements` - Elements the attack carries
/// * `damage` - Damage computed so far by the combat formula
/// * `policy` - Active resolution policy
pub fn resolve(target: &AffinityProfile, elements: ElementSet, damage: i32, policy: Policy) -> i32 {
    if !elements.has_elements() {
        return damage;
    }

    match policy {
        Policy::Default | Policy::Favorable => favorable::resolve(target, elements, damage),
        Policy::Balanced => balanced::resolve(target, elements, damage),
        Policy::Unfavorable => unfavorable::resolve(target, elements, damage),
        Policy::ExtraMean => extra_mean::resolve(target, elements, damage),
    }
}

/// Round to the nearest integer, ties away from zero.
///
/// Values outside the `i32` range saturate; `NaN` maps to 0.
pub fn round_damage(value: f64) -> i32 {
    value.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    #[test]
    fn empty_element_set_is_a_no_op() {
        let target = AffinityProfile::NEUTRAL
            .with_weak(ElementSet::all())
            .with_absorb(ElementSet::all());

        for policy in Policy::ALL {
            assert_eq!(resolve(&target, ElementSet::empty(), 123, policy), 123);
            assert_eq!(resolve(&target, ElementSet::empty(), -7, policy), -7);
        }
    }

    #[test]
    fn unknown_bits_alone_count_as_unelemental() {
        let target = AffinityProfile::NEUTRAL.with_weak(ElementSet::all());
        let stray = ElementSet::from_bits_retain(0b1000_0000);
        assert_eq!(resolve(&target, stray, 40, Policy::Favorable), 40);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_damage(2.5), 3);
        assert_eq!(round_damage(-2.5), -3);
        assert_eq!(round_damage(2.4999), 2);
        assert_eq!(round_damage(-0.5), -1);
        assert_eq!(round_damage(0.0), 0);
    }

    #[test]
    fn rounding_saturates() {
        assert_eq!(round_damage(1e12), i32::MAX);
        assert_eq!(round_damage(-1e12), i32::MIN);
        assert_eq!(round_damage(f64::NAN), 0);
    }

    #[test]
    fn default_policy_evaluates_like_favorable() {
        let target = AffinityProfile::NEUTRAL
            .with_weak(ElementSet::FIRE | ElementSet::ICE)
            .with_resist(ElementSet::WATER);
        let attack = ElementSet::from_elements(&[Element::Fire, Element::Ice, Element::Water]);

        assert_eq!(
            resolve(&target, attack, 100, Policy::Default),
            resolve(&target, attack, 100, Policy::Favorable)
        );
    }

    #[test]
    fn single_neutral_element_passes_through_every_policy() {
        let target = AffinityProfile::NEUTRAL.with_resist(ElementSet::ICE);
        for policy in Policy::RESOLVING {
            assert_eq!(resolve(&target, ElementSet::FIRE, 91, policy), 91, "{policy}");
        }
    }

    #[test]
    fn single_element_affinities_agree_across_policies() {
        // With one carried element every policy reduces to the plain affinity rule,
        // except absorb under extra_mean, which never negates.
        let weak = AffinityProfile::NEUTRAL.with_weak(ElementSet::HOLY);
        let resist = AffinityProfile::NEUTRAL.with_resist(ElementSet::HOLY);
        let ignore = AffinityProfile::NEUTRAL.with_ignore(ElementSet::HOLY);
        let absorb = AffinityProfile::NEUTRAL.with_absorb(ElementSet::HOLY);

        for policy in Policy::RESOLVING {
            assert_eq!(resolve(&weak, ElementSet::HOLY, 101, policy), 152, "{policy}");
            assert_eq!(resolve(&resist, ElementSet::HOLY, 101, policy), 51, "{policy}");
            assert_eq!(resolve(&ignore, ElementSet::HOLY, 101, policy), 0, "{policy}");
        }
        for policy in [Policy::Favorable, Policy::Balanced, Policy::Unfavorable] {
            assert_eq!(resolve(&absorb, ElementSet::HOLY, 101, policy), -101, "{policy}");
        }
        assert_eq!(resolve(&absorb, ElementSet::HOLY, 101, Policy::ExtraMean), 101);
    }
}
