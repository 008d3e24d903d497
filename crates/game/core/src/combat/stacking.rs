//! Applying one affinity category to the carried elements.

use crate::element::ElementSet;

/// Whether a multiplier compounds per matching element or applies once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stacking {
    /// Multiply once per matching element, in fixed order.
    Compound,
    /// Multiply at the first matching element and stop.
    FirstMatch,
}

impl From<bool> for Stacking {
    fn from(stacking: bool) -> Self {
        if stacking { Self::Compound } else { Self::FirstMatch }
    }
}

/// Apply `multiplier` for elements present in both `affinity` and `elements`.
///
/// # Formula
///
/// ```text
/// stacking:     damage × multiplier^matches
/// non-stacking: damage × multiplier  (first match only)
/// ```
///
/// # Returns
///
/// The new damage and whether any element matched. Without a match the
/// damage is returned unchanged.
pub fn apply_affinity(
    affinity: ElementSet,
    elements: ElementSet,
    damage: f64,
    multiplier: f64,
    stacking: impl Into<Stacking>,
) -> (f64, bool) {
    let stacking = stacking.into();
    let mut damage = damage;
    let mut applied = false;

    for _ in affinity.intersection(elements).elements() {
        applied = true;

        match stacking {
            Stacking::Compound => damage *= multiplier,
            Stacking::FirstMatch => return (damage * multiplier, applied),
        }
    }

    (damage, applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacking_compounds_per_match() {
        let affinity = ElementSet::FIRE | ElementSet::WATER;
        let elements = ElementSet::FIRE | ElementSet::ICE | ElementSet::WATER;

        let (damage, applied) = apply_affinity(affinity, elements, 100.0, 0.5, true);
        assert!(applied);
        assert_eq!(damage, 100.0 * 0.5 * 0.5);
    }

    #[test]
    fn non_stacking_stops_at_first_match() {
        let affinity = ElementSet::FIRE | ElementSet::WATER;
        let elements = ElementSet::FIRE | ElementSet::ICE | ElementSet::WATER;

        let (damage, applied) = apply_affinity(affinity, elements, 100.0, 0.5, false);
        assert!(applied);
        assert_eq!(damage, 50.0);
    }

    #[test]
    fn no_match_leaves_damage_unchanged() {
        for stacking in [Stacking::Compound, Stacking::FirstMatch] {
            let (damage, applied) =
                apply_affinity(ElementSet::HOLY, ElementSet::FIRE, 42.0, 1.5, stacking);
            assert!(!applied);
            assert_eq!(damage, 42.0);
        }
    }

    #[test]
    fn zero_multiplier_still_reports_match() {
        let (damage, applied) =
            apply_affinity(ElementSet::ICE, ElementSet::ICE, 80.0, 0.0, Stacking::FirstMatch);
        assert!(applied);
        assert_eq!(damage, 0.0);
    }
}
