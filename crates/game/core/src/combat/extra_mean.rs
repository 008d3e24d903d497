//! Extra-mean resolution: unfavorable, except an absorbed hit stacks weaknesses.

use crate::affinity::{Affinity, AffinityProfile};
use crate::element::ElementSet;

use super::round_damage;
use super::stacking::{Stacking, apply_affinity};

/// Resolve a hit under the extra-mean policy.
///
/// 1. Any absorb: the unmodified damage ×1.5 per weak element, compounding.
///    The hit is not negated.
/// 2. Any ignore: 0.
/// 3. Resist: ×0.5 per resisted element, compounding.
/// 4. Weak: ×1.5 once.
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
        let (weakened, _) = apply_affinity(
            target.weak,
            elements,
            base,
            Affinity::WEAK_MULTIPLIER,
            Stacking::Compound,
        );
        return round_damage(weakened);
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
