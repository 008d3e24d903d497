//! Elements and element sets.
//!
//! An attack carries zero or more elements at once, and a target reacts to
//! each element through four independent [`ElementSet`]s (see
//! [`crate::AffinityProfile`]). Every algorithm in this crate walks elements in
//! the fixed order given by [`Element::ORDER`]; first-match and stacking
//! semantics depend on it.

use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;

use crate::error::AffinityError;

/// A single damage element.
///
/// Discriminants match the host's element flag bits so an [`Element`] can be
/// converted to a one-element [`ElementSet`] without a lookup table.
/// [`Element::None`] is a sentinel: it never matches an affinity or an attack.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Element {
    None = 0x00,
    Fire = 0x01,
    Ice = 0x02,
    Thunder = 0x04,
    Water = 0x08,
    Holy = 0x10,
}

impl Element {
    /// Iteration order shared by every resolution policy. `None` is excluded.
    pub const ORDER: [Element; 5] = [
        Element::Fire,
        Element::Ice,
        Element::Thunder,
        Element::Water,
        Element::Holy,
    ];

    /// Returns the one-element set for this element (empty for `None`).
    pub const fn flag(self) -> ElementSet {
        ElementSet::from_bits_truncate(self as u8)
    }

    /// Parses an element name, reporting unknown names as [`AffinityError`].
    pub fn from_name(name: &str) -> Result<Self, AffinityError> {
        name.trim()
            .parse()
            .map_err(|_| AffinityError::UnknownElement(name.trim().to_string()))
    }
}

bitflags! {
    /// Zero or more elements carried simultaneously.
    ///
    /// Used both for the elements an attack carries and for each affinity
    /// category on a target.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ElementSet: u8 {
        const FIRE    = 1 << 0;
        const ICE     = 1 << 1;
        const THUNDER = 1 << 2;
        const WATER   = 1 << 3;
        const HOLY    = 1 << 4;
    }
}

impl ElementSet {
    /// Builds a set from a slice of elements. `None` entries contribute nothing.
    pub fn from_elements(elements: &[Element]) -> Self {
        elements.iter().copied().collect()
    }

    /// Returns true if `element` is a member. Always false for `Element::None`.
    pub const fn has(self, element: Element) -> bool {
        let flag = element.flag();
        !flag.is_empty() && self.contains(flag)
    }

    /// Iterates member elements in [`Element::ORDER`].
    pub fn elements(self) -> impl Iterator<Item = Element> {
        Element::ORDER
            .into_iter()
            .filter(move |element| self.has(*element))
    }

    /// Number of member elements. Bits outside the known elements are not counted.
    pub fn element_count(self) -> u32 {
        self.intersection(Self::all()).bits().count_ones()
    }

    /// Returns true if the set carries at least one known element.
    pub fn has_elements(self) -> bool {
        self.element_count() > 0
    }
}

impl From<Element> for ElementSet {
    fn from(element: Element) -> Self {
        element.flag()
    }
}

impl FromIterator<Element> for ElementSet {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ElementSet::empty(), |set, element| set | element.flag())
    }
}

/// Displays member names in iteration order joined by `|`, or `none` when empty.
impl fmt::Display for ElementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_elements() {
            return f.write_str(Element::None.as_ref());
        }

        for (index, element) in self.elements().enumerate() {
            if index > 0 {
                f.write_str("|")?;
            }
            f.write_str(element.as_ref())?;
        }
        Ok(())
    }
}

/// Parses element names separated by `,` or `|`.
///
/// An empty string and the name `none` both produce the empty set.
impl FromStr for ElementSet {
    type Err = AffinityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split([',', '|'])
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Element::from_name)
            .collect::<Result<Vec<_>, _>>()
            .map(|elements| elements.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ElementSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.elements())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ElementSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements = <Vec<Element> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(elements.into_iter().collect())
    }
}
