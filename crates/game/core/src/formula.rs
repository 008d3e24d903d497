//! The elemental step of the combat formula, as an injectable seam.
//!
//! The host's combat pipeline calls one elemental step per hit. The original
//! step is supplied by the host through [`ElementalFormula`]; the damage hook
//! in the runtime crate decides per call whether to invoke it or [`crate::resolve`].

use crate::affinity::AffinityProfile;
use crate::combat::favorable;
use crate::element::ElementSet;

/// One implementation of the elemental damage step.
pub trait ElementalFormula {
    /// Compute final damage for `damage` hitting `target` with `elements`.
    fn compute(&self, target: &AffinityProfile, elements: ElementSet, damage: i32) -> i32;
}

impl<F> ElementalFormula for F
where
    F: Fn(&AffinityProfile, ElementSet, i32) -> i32,
{
    fn compute(&self, target: &AffinityProfile, elements: ElementSet, damage: i32) -> i32 {
        self(target, elements, damage)
    }
}

/// The unpatched elemental step when nothing else modifies it.
///
/// Weaknesses stack and any neutral element lets the hit through unmodified,
/// which is the favorable policy. Used as the fallback formula by tooling that
/// has no host to call into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VanillaFormula;

impl ElementalFormula for VanillaFormula {
    fn compute(&self, target: &AffinityProfile, elements: ElementSet, damage: i32) -> i32 {
        if !elements.has_elements() {
            return damage;
        }
        favorable::resolve(target, elements, damage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_formulas() {
        let doubled = |_: &AffinityProfile, _: ElementSet, damage: i32| damage * 2;
        assert_eq!(doubled.compute(&AffinityProfile::NEUTRAL, ElementSet::FIRE, 21), 42);
    }

    #[test]
    fn vanilla_formula_stacks_weaknesses() {
        let target = AffinityProfile::NEUTRAL.with_weak(ElementSet::FIRE | ElementSet::ICE);
        let attack = ElementSet::FIRE | ElementSet::ICE;
        assert_eq!(VanillaFormula.compute(&target, attack, 100), 225);
        assert_eq!(VanillaFormula.compute(&target, ElementSet::empty(), 100), 100);
    }
}
