//! Policy Parameter Set
//!
//! Two forms of the same configuration:
//!
//! - `PolicyParams`: the wire form, exactly as a caller submits it. Class
//!   keyed maps are string keyed so that missing or extra classes can be
//!   represented and reported.
//! - `ValidParams`: the checked form. Only `validate()` can build one, so
//!   the simulation transform never sees an incomplete parameter set.
//!
//! Edits never mutate in place: every `with_*` method returns a new
//! parameter set and leaves the original untouched.

use crate::models::{CabinClass, ClassMap};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Distance breakpoints (km) separating short, medium and long haul
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceThresholds {
    pub short: f64,
    pub medium: f64,
    pub long: f64,
}

impl Default for DistanceThresholds {
    fn default() -> Self {
        Self {
            short: 1200.0,
            medium: 3200.0,
            long: 7200.0,
        }
    }
}

/// Policy Parameter Set (wire form)
///
/// # Example
/// ```
/// use kit_simulator_core_rs::models::CabinClass;
/// use kit_simulator_core_rs::policy::PolicyParams;
///
/// let base = PolicyParams::default();
/// let tuned = base.with_bias(CabinClass::F, 1.4).with_hold_on_long(CabinClass::Y, false);
///
/// assert_eq!(base.biases["F"], 1.2);
/// assert_eq!(tuned.biases["F"], 1.4);
/// assert_ne!(base, tuned);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyParams {
    /// Allocation priority weight per class
    pub biases: BTreeMap<String, f64>,

    pub distance_thresholds: DistanceThresholds,

    /// Operational-cost vs. penalty sensitivity per class
    pub cost_alpha: BTreeMap<String, f64>,

    /// Suppress movement of the class on long-haul flights
    pub hold_on_long: BTreeMap<String, bool>,

    /// Number of simulation iterations
    ///
    /// Signed so that zero and negative submissions reach validation.
    pub episodes: i64,

    /// Deterministic seed, reserved for stochastic extensions
    pub seed: i64,
}

impl Default for PolicyParams {
    fn default() -> Self {
        Self {
            biases: class_keyed(ClassMap::new(1.2, 1.1, 0.95, 0.8)),
            distance_thresholds: DistanceThresholds::default(),
            cost_alpha: class_keyed(ClassMap::new(1.25, 1.1, 0.9, 0.75)),
            hold_on_long: class_keyed(ClassMap::new(false, false, true, true)),
            episodes: 6,
            seed: 42,
        }
    }
}

impl PolicyParams {
    pub fn with_bias(&self, class: CabinClass, value: f64) -> Self {
        let mut next = self.clone();
        next.biases.insert(class.code().to_string(), value);
        next
    }

    pub fn with_cost_alpha(&self, class: CabinClass, value: f64) -> Self {
        let mut next = self.clone();
        next.cost_alpha.insert(class.code().to_string(), value);
        next
    }

    pub fn with_hold_on_long(&self, class: CabinClass, hold: bool) -> Self {
        let mut next = self.clone();
        next.hold_on_long.insert(class.code().to_string(), hold);
        next
    }

    pub fn with_distance_thresholds(&self, thresholds: DistanceThresholds) -> Self {
        Self {
            distance_thresholds: thresholds,
            ..self.clone()
        }
    }

    pub fn with_episodes(&self, episodes: i64) -> Self {
        Self {
            episodes,
            ..self.clone()
        }
    }

    pub fn with_seed(&self, seed: i64) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }

    /// SHA-256 of the parameter set's JSON form (hex)
    ///
    /// Maps are `BTreeMap`s, so the serialized key order is stable and
    /// equal parameter sets always hash equally.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_vec(self)?;

        let mut hasher = Sha256::new();
        hasher.update(&json);
        Ok(format!("{:x}", hasher.finalize()))
    }
}

fn class_keyed<T: Copy>(map: ClassMap<T>) -> BTreeMap<String, T> {
    map.iter()
        .map(|(class, value)| (class.code().to_string(), *value))
        .collect()
}

/// Validated Policy Parameter Set
///
/// Obtained only through `policy::validate`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidParams {
    pub(crate) biases: ClassMap<f64>,
    pub(crate) distance_thresholds: DistanceThresholds,
    pub(crate) cost_alpha: ClassMap<f64>,
    pub(crate) hold_on_long: ClassMap<bool>,
    pub(crate) episodes: u32,
    pub(crate) seed: i64,
}

impl ValidParams {
    pub fn biases(&self) -> &ClassMap<f64> {
        &self.biases
    }

    pub fn distance_thresholds(&self) -> &DistanceThresholds {
        &self.distance_thresholds
    }

    pub fn cost_alpha(&self) -> &ClassMap<f64> {
        &self.cost_alpha
    }

    pub fn hold_on_long(&self) -> &ClassMap<bool> {
        &self.hold_on_long
    }

    pub fn episodes(&self) -> u32 {
        self.episodes
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }
}

impl From<&ValidParams> for PolicyParams {
    fn from(valid: &ValidParams) -> Self {
        Self {
            biases: class_keyed(valid.biases),
            distance_thresholds: valid.distance_thresholds,
            cost_alpha: class_keyed(valid.cost_alpha),
            hold_on_long: class_keyed(valid.hold_on_long),
            episodes: i64::from(valid.episodes),
            seed: valid.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_dashboard_start() {
        let params = PolicyParams::default();
        assert_eq!(params.biases["W"], 0.95);
        assert_eq!(params.cost_alpha["Y"], 0.75);
        assert!(params.hold_on_long["Y"]);
        assert!(!params.hold_on_long["F"]);
        assert_eq!(params.distance_thresholds.medium, 3200.0);
        assert_eq!(params.episodes, 6);
        assert_eq!(params.seed, 42);
    }

    #[test]
    fn test_wire_form_is_camel_case() {
        let json = serde_json::to_value(PolicyParams::default()).unwrap();
        assert!(json.get("distanceThresholds").is_some());
        assert!(json.get("costAlpha").is_some());
        assert!(json.get("holdOnLong").is_some());
        assert_eq!(json["biases"]["F"], 1.2);
    }

    #[test]
    fn test_edits_return_new_value() {
        let base = PolicyParams::default();
        let edited = base.with_episodes(12).with_seed(7);
        assert_eq!(base.episodes, 6);
        assert_eq!(edited.episodes, 12);
        assert_eq!(edited.seed, 7);
    }

    #[test]
    fn test_fingerprint_stable_and_sensitive() {
        let a = PolicyParams::default();
        let b = PolicyParams::default();
        let c = a.with_bias(CabinClass::J, 1.3);

        let fa = a.fingerprint().unwrap();
        assert_eq!(fa.len(), 64);
        assert_eq!(fa, b.fingerprint().unwrap());
        assert_ne!(fa, c.fingerprint().unwrap());
    }
}
