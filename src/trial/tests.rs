use assert_matches::assert_matches;
use proptest::prelude::*;

use super::*;
use crate::variant::VariantError;

fn fast32_config(registry: &VariantRegistry, size: usize) -> TrialConfig<'_> {
    TrialConfig::new(registry, "fast_hash32", size).unwrap()
}

#[test]
fn setup_allocates_exactly_the_configured_size() {
    let registry = VariantRegistry::with_builtins();
    for size in [0, 1, 10, 1000, 4096] {
        let config = fast32_config(&registry, size);
        let state = TrialState::setup(&config);
        assert_eq!(state.bytes().len(), size);
    }
}

#[test]
fn config_with_unknown_variant_fails_before_setup() {
    let registry = VariantRegistry::with_builtins();
    assert_matches!(
        TrialConfig::new(&registry, "sha999", 10),
        Err(ConfigError::UnknownVariant(_))
    );
}

#[test]
fn config_debug_output_names_the_variant() {
    let registry = VariantRegistry::with_builtins();
    let config = fast32_config(&registry, 10);
    let rendered = format!("{config:?}");
    assert!(rendered.contains("fast_hash32"), "{rendered}");
    assert!(rendered.contains("10"), "{rendered}");
}

#[test]
fn zero_repetitions_return_zero_for_every_variant() {
    let registry = VariantRegistry::with_builtins();
    for name in ["fast_hash32", "fast_hash64", "murmur_hash32", "murmur_hash128", "md5_digest"] {
        let config = TrialConfig::new(&registry, name, 64).unwrap();
        let state = TrialState::setup(&config);
        assert_eq!(state.run(config.variant(), 0), 0);
    }
}

#[test]
fn accumulator_folds_every_repetition() {
    let registry = VariantRegistry::with_builtins();
    let config = fast32_config(&registry, 10);
    let state = TrialState::setup(&config);
    let single = config.variant().compute(state.bytes());

    // XOR of n identical values collapses to 0 for even n, the value for odd n
    assert_eq!(state.run(config.variant(), 1), single);
    assert_eq!(state.run(config.variant(), 2), 0);
    assert_eq!(state.run(config.variant(), 999), single);
    assert_eq!(state.run(config.variant(), 1000), 0);
}

#[test]
fn repeated_runs_on_the_same_state_are_deterministic() {
    let registry = VariantRegistry::with_builtins();
    let config = fast32_config(&registry, 1000);
    let state = TrialState::setup(&config);
    let first = state.run(config.variant(), 33);
    assert_eq!(state.run(config.variant(), 33), first);
}

#[test]
fn checked_run_matches_run_for_builtins() {
    let registry = VariantRegistry::with_builtins();
    let config = TrialConfig::new(&registry, "murmur_hash128", 128).unwrap();
    let state = TrialState::setup(&config);
    assert_eq!(state.checked_run(config.variant(), 5).unwrap(), state.run(config.variant(), 5));
}

#[test]
fn checked_run_aborts_on_first_failure() {
    struct FailsAfter(std::sync::atomic::AtomicU64);
    impl HashVariant for FailsAfter {
        fn name(&self) -> &'static str {
            "fails_after"
        }
        fn compute(&self, _bytes: &[u8]) -> u64 {
            unreachable!("checked path only")
        }
        fn try_compute(&self, _bytes: &[u8]) -> Result<u64, VariantError> {
            let calls = self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            if calls < 3 { Ok(1) } else { Err("device lost".into()) }
        }
    }

    let variant = FailsAfter(std::sync::atomic::AtomicU64::new(0));
    let config = TrialConfig::with_variant(&variant, 8);
    let state = TrialState::setup(&config);
    let err = state.checked_run(config.variant(), 10).unwrap_err();
    assert_eq!(err.variant, "fails_after");
    assert_eq!(err.completed, 3);
    assert_eq!(err.requested, 10);
    // no retry: exactly one failing invocation was made
    assert_eq!(variant.0.load(std::sync::atomic::Ordering::Relaxed), 4);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn run_equals_xor_of_individual_computes(size in 0usize..256, reps in 0u64..16) {
        let registry = VariantRegistry::with_builtins();
        let config = TrialConfig::new(&registry, "fast_hash64", size).unwrap();
        let state = TrialState::setup(&config);

        let mut expected = 0u64;
        for _ in 0..reps {
            expected ^= config.variant().compute(state.bytes());
        }
        prop_assert_eq!(state.run(config.variant(), reps), expected);
    }
}
