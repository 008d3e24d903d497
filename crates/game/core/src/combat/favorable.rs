//! Favorable resolution: a single verdict for the whole hit, tilted toward the attacker.

use crate::affinity::{Affinity, AffinityProfile};
use crate::element::ElementSet;

use super::round_damage;
use super::stacking::{Stacking, apply_affinity};

/// Resolve a hit under the favorable policy.
///
/// First applicable rule wins for the entire hit:
///
/// 1. Any weakness: ×1.5 per weak element, compounding.
/// 2. Any carried element neutral to the target: original damage, unmodified.
/// 3. Resist: ×0.5 once.
/// 4. Ignore: 0.
/// 5. Absorb: ×-1.0 once.
pub fn resolve(target: &AffinityProfile, elements: ElementSet, damage: i32) -> i32 {
    let base = f64::from(damage);

    let (weakened, weak) = apply_affinity(
        target.weak,
        elements,
        base,
        Affinity::WEAK_MULTIPLIER,
        Stacking::Compound,
    );
    if weak {
        return round_damage(weakened);
    }

    if elements.elements().any(|element| target.is_neutral(element)) {
        return damage;
    }

    let (resisted, resist) = apply_affinity(
        target.resist,
        elements,
        weakened,
        Affinity::RESIST_MULTIPLIER,
        Stacking::FirstMatch,
    );
    if resist {
        return round_damage(resisted);
    }

    let (_, ignore) = apply_affinity(
        target.ignore,
        elements,
        weakened,
        Affinity::IGNORE_MULTIPLIER,
        Stacking::FirstMatch,
    );
    if ignore {
        return 0;
    }

    let (absorbed, _) = apply_affinity(
        target.absorb,
        elements,
        weakened,
        Affinity::ABSORB_MULTIPLIER,
        Stacking::FirstMatch,
    );
    round_damage(absorbed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weaknesses_compound() {
        let target = AffinityProfile::NEUTRAL.with_weak(ElementSet::FIRE | ElementSet::ICE);
        assert_eq!(resolve(&target, ElementSet::FIRE | ElementSet::ICE, 100), 225);
    }

    #[test]
    fn weakness_beats_absorb_on_another_element() {
        let target = AffinityProfile::NEUTRAL
            .with_weak(ElementSet::FIRE)
            .with_absorb(ElementSet::ICE);
        assert_eq!(resolve(&target, ElementSet::FIRE | ElementSet::ICE, 100), 150);
    }

    #[test]
    fn neutral_element_beats_resistance() {
        let target = AffinityProfile::NEUTRAL.with_resist(ElementSet::THUNDER);
        let attack = ElementSet::THUNDER | ElementSet::WATER;
        assert_eq!(resolve(&target, attack, 77), 77);
    }

    #[test]
    fn resistance_does_not_stack() {
        let target = AffinityProfile::NEUTRAL.with_resist(ElementSet::FIRE | ElementSet::ICE);
        assert_eq!(resolve(&target, ElementSet::FIRE | ElementSet::ICE, 100), 50);
    }

    #[test]
    fn resist_beats_ignore_and_absorb() {
        let target = AffinityProfile::NEUTRAL
            .with_resist(ElementSet::HOLY)
            .with_ignore(ElementSet::FIRE)
            .with_absorb(ElementSet::ICE);
        let attack = ElementSet::FIRE | ElementSet::ICE | ElementSet::HOLY;
        assert_eq!(resolve(&target, attack, 5), 3); // 2.5
    }

    #[test]
    fn ignore_beats_absorb() {
        let target = AffinityProfile::NEUTRAL
            .with_ignore(ElementSet::WATER)
            .with_absorb(ElementSet::FIRE);
        assert_eq!(resolve(&target, ElementSet::FIRE | ElementSet::WATER, 60), 0);
    }

    #[test]
    fn full_absorb_negates_once() {
        let target = AffinityProfile::NEUTRAL.with_absorb(ElementSet::FIRE | ElementSet::ICE);
        assert_eq!(resolve(&target, ElementSet::FIRE | ElementSet::ICE, 60), -60);
    }
}
