//! Hook that replaces the elemental step of the combat formula.

use std::path::Path;

use affinity_content::SettingsLoader;
use affinity_core::{
    AffinityConfig, AffinityProfile, ElementSet, ElementalFormula, Policy, resolve,
};
use tracing::{debug, trace};

use crate::error::{Result, RuntimeError};

/// Which path a damage calculation took.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// The host's original formula ran.
    Original,
    /// The attack carried no element; damage passed through.
    Unelemental,
    /// [`resolve`] ran with this policy.
    Resolved(Policy),
}

/// Final damage plus the route that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DamageOutcome {
    pub damage: i32,
    pub route: Route,
}

/// Elemental damage step with policy-based resolution.
///
/// Holds the active [`AffinityConfig`] and the host's original formula. The
/// config is swapped with [`set_config`](Self::set_config) between combat
/// ticks; a calculation only ever reads it.
///
/// # Example Flow
///
/// ```text
/// Host computes base damage 100 for a fire+ice spell
///   → ElementalDamageHook::calculate(target, FIRE|ICE, 100)
///   → config: enabled, balanced
///   → resolve(target, FIRE|ICE, 100, Balanced)
/// ```
#[derive(Clone, Debug)]
pub struct ElementalDamageHook<F> {
    config: AffinityConfig,
    original: F,
}

impl<F: ElementalFormula> ElementalDamageHook<F> {
    pub fn new(config: AffinityConfig, original: F) -> Self {
        Self { config, original }
    }

    /// Creates a hook configured from a TOML settings file.
    pub fn from_settings(path: &Path, original: F) -> Result<Self> {
        let config = SettingsLoader::load(path)
            .map_err(|e| RuntimeError::SettingsError(format!("{e:#}")))?;

        debug!(
            target: "runtime::hooks",
            enabled = config.enabled,
            policy = %config.policy,
            "Loaded elemental affinity settings from {}",
            path.display()
        );

        Ok(Self::new(config, original))
    }

    pub fn config(&self) -> AffinityConfig {
        self.config
    }

    pub fn set_config(&mut self, config: AffinityConfig) {
        if config != self.config {
            debug!(
                target: "runtime::hooks",
                enabled = config.enabled,
                policy = %config.policy,
                "Elemental affinity settings changed"
            );
        }
        self.config = config;
    }

    pub fn original(&self) -> &F {
        &self.original
    }

    /// Decides the route for an attack carrying `elements` without computing damage.
    pub fn route(&self, elements: ElementSet) -> Route {
        if !self.config.enabled {
            return Route::Original;
        }
        if !elements.has_elements() {
            return Route::Unelemental;
        }
        match self.config.active_policy() {
            Some(policy) => Route::Resolved(policy),
            None => Route::Original,
        }
    }

    /// Final damage for `damage` hitting `target` with `elements`.
    pub fn calculate(&self, target: &AffinityProfile, elements: ElementSet, damage: i32) -> i32 {
        self.calculate_detailed(target, elements, damage).damage
    }

    /// Like [`calculate`](Self::calculate), also reporting the route taken.
    pub fn calculate_detailed(
        &self,
        target: &AffinityProfile,
        elements: ElementSet,
        damage: i32,
    ) -> DamageOutcome {
        let route = self.route(elements);

        let result = match route {
            Route::Original => self.original.compute(target, elements, damage),
            Route::Unelemental => damage,
            Route::Resolved(policy) => resolve(target, elements, damage, policy),
        };

        trace!(
            target: "runtime::hooks",
            route = ?route,
            elements = %elements,
            weak = %target.weak,
            resist = %target.resist,
            ignore = %target.ignore,
            absorb = %target.absorb,
            damage,
            result,
            "Elemental damage step"
        );

        DamageOutcome {
            damage: result,
            route,
        }
    }
}

// Hooks can wrap one another.
impl<F: ElementalFormula> ElementalFormula for ElementalDamageHook<F> {
    fn compute(&self, target: &AffinityProfile, elements: ElementSet, damage: i32) -> i32 {
        self.calculate(target, elements, damage)
    }
}
