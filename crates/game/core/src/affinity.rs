//! Target-side elemental affinities.

use crate::element::{Element, ElementSet};

/// How a target reacts to one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Affinity {
    Weak,
    Resist,
    Ignore,
    Absorb,
    /// In none of the four categories.
    Neutral,
}

impl Affinity {
    pub const WEAK_MULTIPLIER: f64 = 1.5;
    pub const RESIST_MULTIPLIER: f64 = 0.5;
    pub const IGNORE_MULTIPLIER: f64 = 0.0;
    pub const ABSORB_MULTIPLIER: f64 = -1.0;
    pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

    /// Multiplier applied to a share of damage landing in this category.
    ///
    /// Returns `None` for `Ignore`: an ignored share contributes nothing.
    pub const fn share_multiplier(self) -> Option<f64> {
        match self {
            Self::Weak => Some(Self::WEAK_MULTIPLIER),
            Self::Resist => Some(Self::RESIST_MULTIPLIER),
            Self::Ignore => None,
            Self::Absorb => Some(Self::ABSORB_MULTIPLIER),
            Self::Neutral => Some(Self::NEUTRAL_MULTIPLIER),
        }
    }
}

/// The four elemental categories of a combat target.
///
/// Categories are independent and may overlap. Each policy decides which
/// category wins when an element appears in more than one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AffinityProfile {
    pub weak: ElementSet,
    pub resist: ElementSet,
    pub ignore: ElementSet,
    pub absorb: ElementSet,
}

impl AffinityProfile {
    /// Profile with no affinities: every element is neutral.
    pub const NEUTRAL: Self = Self {
        weak: ElementSet::empty(),
        resist: ElementSet::empty(),
        ignore: ElementSet::empty(),
        absorb: ElementSet::empty(),
    };

    pub const fn new(
        weak: ElementSet,
        resist: ElementSet,
        ignore: ElementSet,
        absorb: ElementSet,
    ) -> Self {
        Self {
            weak,
            resist,
            ignore,
            absorb,
        }
    }

    #[must_use]
    pub const fn with_weak(mut self, weak: ElementSet) -> Self {
        self.weak = weak;
        self
    }

    #[must_use]
    pub const fn with_resist(mut self, resist: ElementSet) -> Self {
        self.resist = resist;
        self
    }

    #[must_use]
    pub const fn with_ignore(mut self, ignore: ElementSet) -> Self {
        self.ignore = ignore;
        self
    }

    #[must_use]
    pub const fn with_absorb(mut self, absorb: ElementSet) -> Self {
        self.absorb = absorb;
        self
    }

    /// Element set for one category. `Neutral` yields the elements in no category.
    pub fn category(&self, affinity: Affinity) -> ElementSet {
        match affinity {
            Affinity::Weak => self.weak,
            Affinity::Resist => self.resist,
            Affinity::Ignore => self.ignore,
            Affinity::Absorb => self.absorb,
            Affinity::Neutral => {
                ElementSet::all().difference(self.weak | self.resist | self.ignore | self.absorb)
            }
        }
    }

    /// Classifies one element with precedence weak > resist > ignore > absorb.
    pub fn classify(&self, element: Element) -> Affinity {
        if self.weak.has(element) {
            Affinity::Weak
        } else if self.resist.has(element) {
            Affinity::Resist
        } else if self.ignore.has(element) {
            Affinity::Ignore
        } else if self.absorb.has(element) {
            Affinity::Absorb
        } else {
            Affinity::Neutral
        }
    }

    /// Returns true if `element` is in none of resist, ignore, or absorb.
    ///
    /// Weakness is not considered here; callers rule it out first.
    pub fn is_neutral(&self, element: Element) -> bool {
        !(self.resist.has(element) || self.ignore.has(element) || self.absorb.has(element))
    }
}
