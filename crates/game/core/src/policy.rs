//! Multi-elemental resolution policies.

use crate::error::AffinityError;

/// Selects how an attack carrying several elements is resolved.
///
/// The discriminants are the positions in the settings dropdown. `Default`
/// defers to the host's original formula and is handled by the damage
/// pipeline before [`crate::resolve`] is reached.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Policy {
    /// Defer to the original formula.
    Default = 0,
    /// Favors the attacker: weaknesses stack, a neutral element beats any resistance.
    Favorable = 1,
    /// Splits an N-elemental hit into N equal parts, each resolved on its own.
    Balanced = 2,
    /// Favors the target: absorb negates, resistances stack.
    Unfavorable = 3,
    /// Like `Unfavorable`, but an absorbed hit stacks weaknesses instead of negating.
    ExtraMean = 4,
}

impl Policy {
    /// Every policy, in dropdown order.
    pub const ALL: [Policy; 5] = [
        Policy::Default,
        Policy::Favorable,
        Policy::Balanced,
        Policy::Unfavorable,
        Policy::ExtraMean,
    ];

    /// Policies that are computed by this crate rather than the original formula.
    pub const RESOLVING: [Policy; 4] = [
        Policy::Favorable,
        Policy::Balanced,
        Policy::Unfavorable,
        Policy::ExtraMean,
    ];

    /// Returns true unless this policy defers to the original formula.
    pub const fn is_resolving(self) -> bool {
        !matches!(self, Policy::Default)
    }

    /// Dropdown index of this policy.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Parses a policy name. Unknown names are fatal and never coerced.
    pub fn from_name(name: &str) -> Result<Self, AffinityError> {
        name.trim()
            .parse()
            .map_err(|_| AffinityError::UnknownPolicy(name.trim().to_string()))
    }
}

impl TryFrom<u8> for Policy {
    type Error = AffinityError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Policy::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(AffinityError::UnknownPolicyIndex(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_display() {
        for policy in Policy::ALL {
            assert_eq!(Policy::from_name(&policy.to_string()), Ok(policy));
        }
        assert_eq!(Policy::ExtraMean.to_string(), "extra_mean");
        assert_eq!(Policy::from_name(" BALANCED "), Ok(Policy::Balanced));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            Policy::from_name("vanilla"),
            Err(AffinityError::UnknownPolicy("vanilla".to_string()))
        );
    }

    #[test]
    fn dropdown_indices() {
        assert_eq!(Policy::try_from(0), Ok(Policy::Default));
        assert_eq!(Policy::try_from(4), Ok(Policy::ExtraMean));
        assert_eq!(Policy::try_from(5), Err(AffinityError::UnknownPolicyIndex(5)));
        assert_eq!(Policy::Unfavorable.index(), 3);
    }

    #[test]
    fn only_default_defers() {
        assert!(!Policy::Default.is_resolving());
        assert!(Policy::RESOLVING.iter().all(|policy| policy.is_resolving()));
    }
}
