use std::io::Write;

use affinity_core::{AffinityProfile, Element, ElementSet, Policy, VanillaFormula};
use affinity_runtime::{ElementalDamageHook, Route, RuntimeError};

fn settings_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn hook_reads_policy_from_settings() {
    let file = settings_file("[elemental_affinities]\ntype = \"extra_mean\"\n");
    let hook = ElementalDamageHook::from_settings(file.path(), VanillaFormula).unwrap();

    let target = AffinityProfile::NEUTRAL
        .with_absorb(ElementSet::ICE)
        .with_weak(ElementSet::FIRE);
    let attack = ElementSet::from_elements(&[Element::Fire, Element::Ice]);

    let outcome = hook.calculate_detailed(&target, attack, 100);
    assert_eq!(outcome.route, Route::Resolved(Policy::ExtraMean));
    assert_eq!(outcome.damage, 150);
}

#[test]
fn disabled_settings_fall_back_to_original() {
    let file = settings_file("[elemental_affinities]\nenabled = false\ntype = \"unfavorable\"\n");
    let hook = ElementalDamageHook::from_settings(file.path(), VanillaFormula).unwrap();

    let target = AffinityProfile::NEUTRAL.with_weak(ElementSet::FIRE | ElementSet::ICE);
    let attack = ElementSet::FIRE | ElementSet::ICE;

    assert_eq!(hook.route(attack), Route::Original);
    assert_eq!(hook.calculate(&target, attack, 100), 225);
}

#[test]
fn unknown_policy_in_settings_is_fatal() {
    let file = settings_file("[elemental_affinities]\ntype = \"merciful\"\n");

    let err = ElementalDamageHook::from_settings(file.path(), VanillaFormula).unwrap_err();
    let RuntimeError::SettingsError(message) = err;
    assert!(message.contains("merciful"), "{message}");
}

#[test]
fn concurrent_hits_share_one_hook() {
    let hook = ElementalDamageHook::new(
        affinity_runtime::AffinityConfig::with_policy(Policy::Balanced),
        VanillaFormula,
    );
    let target = AffinityProfile::NEUTRAL
        .with_weak(ElementSet::FIRE)
        .with_resist(ElementSet::WATER);

    let results: Vec<i32> = std::thread::scope(|scope| {
        let handles: Vec<_> = [
            ElementSet::FIRE,
            ElementSet::WATER,
            ElementSet::FIRE | ElementSet::WATER,
            ElementSet::empty(),
        ]
        .into_iter()
        .map(|attack| {
            let hook = &hook;
            let target = &target;
            scope.spawn(move || hook.calculate(target, attack, 100))
        })
        .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, vec![150, 50, 100, 100]);
}
