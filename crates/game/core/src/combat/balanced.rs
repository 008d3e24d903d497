//! Balanced resolution: an N-elemental hit is N independent hits of 1/N damage.

use crate::affinity::AffinityProfile;
use crate::element::ElementSet;

use super::round_damage;

/// Resolve a hit under the balanced policy.
///
/// # Formula
///
/// ```text
/// part  = damage / element_count
/// total = Σ part × share(classify(element))     for each carried element
/// share: weak 1.5, resist 0.5, ignore dropped, absorb -1.0, neutral 1.0
/// ```
///
/// Classification precedence is weak > resist > ignore > absorb. An ignored
/// element's share is dropped, not redistributed to the others. This is the
/// only policy where elements of one attack land in different categories.
///
/// `elements` must carry at least one element; [`super::resolve`] guarantees it.
pub fn resolve(target: &AffinityProfile, elements: ElementSet, damage: i32) -> i32 {
    let element_count = elements.element_count();
    let damage_part = f64::from(damage) / f64::from(element_count);

    let total = elements
        .elements()
        .filter_map(|element| target.classify(element).share_multiplier())
        .fold(0.0, |total, multiplier| total + damage_part * multiplier);

    round_damage(total)
}
