//! Unfavorable resolution: the favorable cascade inverted, tilted toward the target.

use crate::affinity::{Affinity, AffinityProfile};
use crate::element::ElementSet;

use super::round_damage;
use super::stacking::{Stacking, apply_affinity};

/// Resolve a hit under the unfavorable policy.
///
/// First applicable rule wins for the entire hit:
///
/// 1. Any absorb: the original damage negated.
/// 2. Any ignore: 0.
/// 3. Resist: ×0.5 per resisted element, compounding.
/// 4. Weak: ×1.5 once.
///
/// Neutral elements never short-circuit; with no affinity at all the damage
/// passes through.
pub fn resolve(target: &AffinityProfile, elements: ElementSet, damage: i32) -> i32 {
    let base = f64::from(damage);

    let (_, absorb) = apply_affinity(
        target.absorb,
        elements,
        base,
        Affinity::ABSORB_MULTIPLIER,
        Stacking::FirstMatch,
    );
    if absorb {
        return damage.saturating_neg();
    }

    let (_, ignore) = apply_affinity(
        target.ignore,
        elements,
        base,
        Affinity::IGNORE_MULTIPLIER,
        Stacking::FirstMatch,
    );
    if ignore {
        return 0;
    }

    let (resisted, resist) = apply_affinity(
        target.resist,
        elements,
        base,
        Affinity::RESIST_MULTIPLIER,
        Stacking::Compound,
    );
    if resist {
        return round_damage(resisted);
    }

    let (weakened, _) = apply_affinity(
        target.weak,
        elements,
        base,
        Affinity::WEAK_MULTIPLIER,
        Stacking::FirstMatch,
    );
    round_damage(weakened)
}
