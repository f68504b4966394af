//! Simulation transform
//!
//! Closed-form rescaling of the reference "current" result by factors
//! derived from the policy:
//!
//! ```text
//! premium_lift      = (bias_F - 1.2) * 0.06 + (bias_J - 1.1) * 0.04
//! econ_throttle     = hold_on_long_Y ? 0.08 : 0.03
//! penalty_scale     = max(0.68, 0.92 - premium_lift - econ_throttle)
//! operational_scale = max(0.9, 1 + (bias_F - 1.2) * 0.05 + (bias_J - 1.1) * 0.03)
//! ```
//!
//! The tuned total is recomposed from the two scaled components; the
//! reference total is never scaled directly. The baseline is passed
//! through untouched.

use super::insight::tuned_insight;
use crate::dataset::ReferenceDataset;
use crate::models::{ComparisonResult, PenaltySlice, SimulationResult};
use crate::policy::ValidParams;
use serde::Serialize;

/// First-class bias the reference figures were produced with
pub const REFERENCE_BIAS_F: f64 = 1.2;

/// Business bias the reference figures were produced with
pub const REFERENCE_BIAS_J: f64 = 1.1;

/// Penalties never drop below this share of the reference
pub const PENALTY_SCALE_FLOOR: f64 = 0.68;

/// Operational cost never drops below this share of the reference
pub const OPERATIONAL_SCALE_FLOOR: f64 = 0.9;

/// Penalty scale before any premium lift or economy throttle
const PENALTY_SCALE_BASE: f64 = 0.92;

const ECON_THROTTLE_HOLD: f64 = 0.08;
const ECON_THROTTLE_MOVE: f64 = 0.03;

/// Name of the computed result
pub const TUNED_NAME: &str = "Tuned";

/// Intermediate factors of one simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleFactors {
    pub premium_lift: f64,
    pub econ_throttle: f64,
    pub penalty_scale: f64,
    pub operational_scale: f64,
}

impl ScaleFactors {
    /// Whether the penalty scale was clamped to its floor
    pub fn penalty_floored(&self) -> bool {
        self.penalty_scale == PENALTY_SCALE_FLOOR
    }

    /// Whether the operational scale was clamped to its floor
    pub fn operational_floored(&self) -> bool {
        self.operational_scale == OPERATIONAL_SCALE_FLOOR
    }
}

/// Round to the nearest integer, halves rounding up (`floor(x + 0.5)`)
///
/// # Example
/// ```
/// use kit_simulator_core_rs::simulation::round_half_up;
///
/// assert_eq!(round_half_up(453.6), 454);
/// assert_eq!(round_half_up(2.5), 3);
/// assert_eq!(round_half_up(-2.5), -2);
/// ```
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Compute the scale factors for a validated policy
pub fn scale_factors(params: &ValidParams) -> ScaleFactors {
    let bias_f = params.biases().f;
    let bias_j = params.biases().j;

    let premium_lift = (bias_f - REFERENCE_BIAS_F) * 0.06 + (bias_j - REFERENCE_BIAS_J) * 0.04;
    let econ_throttle = if params.hold_on_long().y {
        ECON_THROTTLE_HOLD
    } else {
        ECON_THROTTLE_MOVE
    };
    let penalty_scale = PENALTY_SCALE_FLOOR.max(PENALTY_SCALE_BASE - premium_lift - econ_throttle);
    let operational_scale = OPERATIONAL_SCALE_FLOOR
        .max(1.0 + (bias_f - REFERENCE_BIAS_F) * 0.05 + (bias_j - REFERENCE_BIAS_J) * 0.03);

    ScaleFactors {
        premium_lift,
        econ_throttle,
        penalty_scale,
        operational_scale,
    }
}

/// Run the simulation transform
///
/// Pure and infallible: the same parameters and dataset always produce an
/// identical result, and the dataset is only read.
///
/// # Example
/// ```
/// use kit_simulator_core_rs::dataset::ReferenceDataset;
/// use kit_simulator_core_rs::policy::{validate, PolicyParams};
/// use kit_simulator_core_rs::simulation::simulate;
///
/// let dataset = ReferenceDataset::builtin();
/// let params = validate(&PolicyParams::default()).unwrap();
///
/// let result = simulate(&params, &dataset);
/// assert_eq!(result.baseline, dataset.get_baseline());
/// assert_eq!(result.current.penalties, 512_400);
/// ```
pub fn simulate(params: &ValidParams, dataset: &ReferenceDataset) -> ComparisonResult {
    let factors = scale_factors(params);
    let reference = dataset.reference_current();

    let scaled_operational = reference.operational as f64 * factors.operational_scale;
    let scaled_penalties = reference.penalties as f64 * factors.penalty_scale;

    let penalty_breakdown = reference
        .penalty_breakdown
        .iter()
        .map(|slice| PenaltySlice {
            value: round_half_up(slice.value as f64 * factors.penalty_scale),
            ..slice.clone()
        })
        .collect();

    let current = SimulationResult {
        name: TUNED_NAME.to_string(),
        total_cost: round_half_up(scaled_operational + scaled_penalties),
        operational: round_half_up(scaled_operational),
        penalties: round_half_up(scaled_penalties),
        penalty_breakdown,
        insight: tuned_insight(params, &factors),
    };

    ComparisonResult {
        baseline: dataset.get_baseline(),
        current,
    }
}
