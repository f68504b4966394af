//! Property tests for the simulation transform
//!
//! Over the whole valid bias range, with either economy hold setting:
//! - Results are deterministic
//! - The baseline never changes
//! - Penalties and operational cost respect their floors
//! - The tuned total stays within rounding of its components

use kit_simulator_core_rs::{
    models::CabinClass,
    policy::{validate, PolicyParams},
    scale_factors, simulate, ReferenceDataset,
};
use proptest::prelude::*;

fn params(bias_f: f64, bias_j: f64, hold_y: bool, seed: i64) -> PolicyParams {
    PolicyParams::default()
        .with_bias(CabinClass::F, bias_f)
        .with_bias(CabinClass::J, bias_j)
        .with_hold_on_long(CabinClass::Y, hold_y)
        .with_seed(seed)
}

proptest! {
    #[test]
    fn simulation_is_deterministic(
        bias_f in 0.6f64..=1.6,
        bias_j in 0.6f64..=1.6,
        hold_y in any::<bool>(),
        seed in any::<i64>(),
    ) {
        let dataset = ReferenceDataset::builtin();
        let valid = validate(&params(bias_f, bias_j, hold_y, seed)).unwrap();
        prop_assert_eq!(simulate(&valid, &dataset), simulate(&valid, &dataset));
    }

    #[test]
    fn baseline_never_changes(
        bias_f in 0.6f64..=1.6,
        bias_j in 0.6f64..=1.6,
        hold_y in any::<bool>(),
    ) {
        let dataset = ReferenceDataset::builtin();
        let valid = validate(&params(bias_f, bias_j, hold_y, 42)).unwrap();
        prop_assert_eq!(simulate(&valid, &dataset).baseline, dataset.get_baseline());
    }

    #[test]
    fn figures_respect_floors(
        bias_f in 0.6f64..=1.6,
        bias_j in 0.6f64..=1.6,
        hold_y in any::<bool>(),
    ) {
        let dataset = ReferenceDataset::builtin();
        let valid = validate(&params(bias_f, bias_j, hold_y, 42)).unwrap();
        let factors = scale_factors(&valid);
        let current = simulate(&valid, &dataset).current;

        prop_assert!(factors.penalty_scale >= 0.68);
        prop_assert!(factors.operational_scale >= 0.9);
        // 610000 * 0.68 and 432000000 * 0.9
        prop_assert!(current.penalties >= 414_800);
        prop_assert!(current.operational >= 388_800_000);
    }

    #[test]
    fn breakdown_shape_is_preserved(
        bias_f in 0.6f64..=1.6,
        bias_j in 0.6f64..=1.6,
        hold_y in any::<bool>(),
    ) {
        let dataset = ReferenceDataset::builtin();
        let reference = dataset.get_reference_current();
        let valid = validate(&params(bias_f, bias_j, hold_y, 42)).unwrap();
        let current = simulate(&valid, &dataset).current;

        prop_assert_eq!(current.breakdown_categories(), reference.breakdown_categories());
        let pairs = current.penalty_breakdown.iter().zip(&reference.penalty_breakdown);
        for (tuned, original) in pairs {
            prop_assert!(tuned.value <= original.value);
            prop_assert!(tuned.value >= 0);
        }
    }

    #[test]
    fn total_is_close_to_component_sum(
        bias_f in 0.6f64..=1.6,
        bias_j in 0.6f64..=1.6,
        hold_y in any::<bool>(),
    ) {
        let dataset = ReferenceDataset::builtin();
        let valid = validate(&params(bias_f, bias_j, hold_y, 42)).unwrap();
        let current = simulate(&valid, &dataset).current;

        // Rounding happens once per figure, so the parts can drift by one
        let drift = current.total_cost - (current.operational + current.penalties);
        prop_assert!(drift.abs() <= 1);
    }
}
