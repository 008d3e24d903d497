use crate::policy::Policy;

/// Elemental affinity settings read by the damage pipeline.
///
/// Only two values reach the resolver: whether the feature is on at all, and
/// which policy is selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AffinityConfig {
    /// When false, the pipeline uses the original formula unconditionally.
    pub enabled: bool,
    /// Selected resolution policy.
    pub policy: Policy,
}

impl AffinityConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ENABLED: bool = true;
    pub const DEFAULT_POLICY: Policy = Policy::Balanced;

    pub const fn new() -> Self {
        Self {
            enabled: Self::DEFAULT_ENABLED,
            policy: Self::DEFAULT_POLICY,
        }
    }

    /// Enabled config with the given policy.
    pub const fn with_policy(policy: Policy) -> Self {
        Self {
            enabled: true,
            policy,
        }
    }

    /// Config that always defers to the original formula.
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            policy: Self::DEFAULT_POLICY,
        }
    }

    /// Policy to run, or `None` when the original formula must be used.
    pub const fn active_policy(&self) -> Option<Policy> {
        if self.enabled && self.policy.is_resolving() {
            Some(self.policy)
        } else {
            None
        }
    }
}

impl Default for AffinityConfig {
    fn default() -> Self {
        Self::new()
    }
}
