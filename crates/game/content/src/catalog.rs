//! Named affinity profiles.

use affinity_core::AffinityProfile;

/// Affinity profiles keyed by target name, kept in insertion order.
///
/// Catalogs are small (one entry per enemy kind), so lookups are linear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileCatalog {
    entries: Vec<(String, AffinityProfile)>,
}

impl ProfileCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a profile, returning the previous one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        profile: AffinityProfile,
    ) -> Option<AffinityProfile> {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(core::mem::replace(slot, profile)),
            None => {
                self.entries.push((name, profile));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&AffinityProfile> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, profile)| profile)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AffinityProfile)> {
        self.entries
            .iter()
            .map(|(name, profile)| (name.as_str(), profile))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use affinity_core::ElementSet;

    #[test]
    fn insert_replaces_and_keeps_order() {
        let mut catalog = ProfileCatalog::new();
        let flan = AffinityProfile::NEUTRAL.with_weak(ElementSet::FIRE);
        let bomb = AffinityProfile::NEUTRAL.with_absorb(ElementSet::FIRE);

        assert_eq!(catalog.insert("flan", flan), None);
        assert_eq!(catalog.insert("bomb", bomb), None);
        assert_eq!(catalog.insert("flan", bomb), Some(flan));

        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["flan", "bomb"]);
        assert_eq!(catalog.get("flan"), Some(&bomb));
        assert!(!catalog.contains("tonberry"));
        assert_eq!(catalog.len(), 2);
    }
}
