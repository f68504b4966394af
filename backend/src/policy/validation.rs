// Policy Parameter Set Validation
//
// Checks run before any simulation:
// - Class coverage of biases, costAlpha and holdOnLong (exactly F, J, W, Y)
// - Weight ranges
// - Episode count
// - Distance threshold sign and ordering
//
// Every problem is reported, not only the first one, so a caller adjusting
// several sliders sees all of them at once.

use crate::models::{CabinClass, ClassMap};
use crate::policy::params::{DistanceThresholds, PolicyParams, ValidParams};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Allowed range for `biases` values
pub const BIAS_RANGE: (f64, f64) = (0.6, 1.6);

/// Allowed range for `costAlpha` values
pub const COST_ALPHA_RANGE: (f64, f64) = (0.5, 1.5);

/// Validation errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field}: missing")]
    MissingField { field: String },

    #[error("{field}: expected {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    #[error("{field}: missing class '{class}'")]
    MissingClass { field: String, class: CabinClass },

    #[error("{field}: unknown class '{key}'")]
    UnknownClass { field: String, key: String },

    #[error("{field}: value {value} outside [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("episodes: must be at least 1, got {0}")]
    EpisodesTooLow(i64),

    #[error("distanceThresholds.{name}: must be positive, got {value}")]
    NonPositiveThreshold { name: String, value: f64 },

    #[error("distanceThresholds: expected short < medium < long, got {short} / {medium} / {long}")]
    ThresholdOrder { short: f64, medium: f64, long: f64 },
}

impl ValidationError {
    /// Path of the offending field in the wire form (e.g. `biases.J`)
    pub fn field(&self) -> String {
        match self {
            ValidationError::MissingField { field } | ValidationError::WrongType { field, .. } => {
                field.clone()
            }
            ValidationError::MissingClass { field, class } => format!("{}.{}", field, class),
            ValidationError::UnknownClass { field, key } => format!("{}.{}", field, key),
            ValidationError::OutOfRange { field, .. } => field.clone(),
            ValidationError::EpisodesTooLow(_) => "episodes".to_string(),
            ValidationError::NonPositiveThreshold { name, .. } => {
                format!("distanceThresholds.{}", name)
            }
            ValidationError::ThresholdOrder { .. } => "distanceThresholds".to_string(),
        }
    }

    /// Short machine-readable kind, used by the CLI and FFI error reports
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. } => "MissingField",
            ValidationError::WrongType { .. } => "WrongType",
            ValidationError::MissingClass { .. } => "MissingClass",
            ValidationError::UnknownClass { .. } => "UnknownClass",
            ValidationError::OutOfRange { .. } => "OutOfRange",
            ValidationError::EpisodesTooLow(_) => "EpisodesTooLow",
            ValidationError::NonPositiveThreshold { .. } => "NonPositiveThreshold",
            ValidationError::ThresholdOrder { .. } => "ThresholdOrder",
        }
    }
}

/// Serializable form of a validation error, for CLI and FFI reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub field: String,
    pub message: String,
}

impl From<&ValidationError> for ValidationIssue {
    fn from(error: &ValidationError) -> Self {
        Self {
            kind: error.kind(),
            field: error.field(),
            message: error.to_string(),
        }
    }
}

/// Validation result
pub type ValidationResult = Result<ValidParams, Vec<ValidationError>>;

/// Validate a Policy Parameter Set
///
/// Runs all checks and returns all errors found.
///
/// # Example
///
/// ```rust
/// use kit_simulator_core_rs::policy::{validate, PolicyParams, ValidationError};
///
/// let mut params = PolicyParams::default().with_episodes(0);
/// params.biases.remove("J");
///
/// let errors = validate(&params).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// assert!(errors.contains(&ValidationError::EpisodesTooLow(0)));
/// ```
pub fn validate(params: &PolicyParams) -> ValidationResult {
    let mut errors = Vec::new();

    let biases = check_class_map("biases", &params.biases, &mut errors);
    if let Some(biases) = &biases {
        check_range("biases", biases, BIAS_RANGE, &mut errors);
    }

    let cost_alpha = check_class_map("costAlpha", &params.cost_alpha, &mut errors);
    if let Some(cost_alpha) = &cost_alpha {
        check_range("costAlpha", cost_alpha, COST_ALPHA_RANGE, &mut errors);
    }

    let hold_on_long = check_class_map("holdOnLong", &params.hold_on_long, &mut errors);

    let episodes = match u32::try_from(params.episodes) {
        Ok(n) if n >= 1 => Some(n),
        Ok(_) => {
            errors.push(ValidationError::EpisodesTooLow(params.episodes));
            None
        }
        // Negative counts are too low; counts beyond u32 are out of range
        Err(_) if params.episodes < 1 => {
            errors.push(ValidationError::EpisodesTooLow(params.episodes));
            None
        }
        Err(_) => {
            errors.push(ValidationError::OutOfRange {
                field: "episodes".to_string(),
                value: params.episodes as f64,
                min: 1.0,
                max: f64::from(u32::MAX),
            });
            None
        }
    };

    check_thresholds(&params.distance_thresholds, &mut errors);

    match (biases, cost_alpha, hold_on_long, episodes) {
        (Some(biases), Some(cost_alpha), Some(hold_on_long), Some(episodes))
            if errors.is_empty() =>
        {
            Ok(ValidParams {
                biases,
                distance_thresholds: params.distance_thresholds,
                cost_alpha,
                hold_on_long,
                episodes,
                seed: params.seed,
            })
        }
        _ => Err(errors),
    }
}

/// Check that a class-keyed map covers exactly {F, J, W, Y}
///
/// Reports missing classes in canonical order, then unknown keys in key
/// order. Returns the typed map only when coverage is exact.
fn check_class_map<T: Copy>(
    field: &str,
    map: &BTreeMap<String, T>,
    errors: &mut Vec<ValidationError>,
) -> Option<ClassMap<T>> {
    let before = errors.len();

    for class in CabinClass::ALL {
        if !map.contains_key(class.code()) {
            errors.push(ValidationError::MissingClass {
                field: field.to_string(),
                class,
            });
        }
    }

    for key in map.keys() {
        if !CabinClass::ALL.iter().any(|class| class.code() == key.as_str()) {
            errors.push(ValidationError::UnknownClass {
                field: field.to_string(),
                key: key.clone(),
            });
        }
    }

    if errors.len() != before {
        return None;
    }

    let f = map.get("F")?;
    let j = map.get("J")?;
    let w = map.get("W")?;
    let y = map.get("Y")?;
    Some(ClassMap::new(*f, *j, *w, *y))
}

fn check_range(
    field: &str,
    values: &ClassMap<f64>,
    (min, max): (f64, f64),
    errors: &mut Vec<ValidationError>,
) {
    for (class, &value) in values.iter() {
        // NaN fails both comparisons and lands here too
        if !(value >= min && value <= max) {
            errors.push(ValidationError::OutOfRange {
                field: format!("{}.{}", field, class),
                value,
                min,
                max,
            });
        }
    }
}

fn check_thresholds(thresholds: &DistanceThresholds, errors: &mut Vec<ValidationError>) {
    let named = [
        ("short", thresholds.short),
        ("medium", thresholds.medium),
        ("long", thresholds.long),
    ];

    let mut all_positive = true;
    for (name, value) in named {
        if !(value.is_finite() && value > 0.0) {
            all_positive = false;
            errors.push(ValidationError::NonPositiveThreshold {
                name: name.to_string(),
                value,
            });
        }
    }

    // Ordering is only meaningful once every breakpoint is a real distance
    if all_positive
        && !(thresholds.short < thresholds.medium && thresholds.medium < thresholds.long)
    {
        errors.push(ValidationError::ThresholdOrder {
            short: thresholds.short,
            medium: thresholds.medium,
            long: thresholds.long,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        let valid = validate(&PolicyParams::default()).unwrap();
        assert_eq!(valid.biases().f, 1.2);
        assert!(valid.hold_on_long().y);
        assert_eq!(valid.episodes(), 6);
        assert_eq!(valid.seed(), 42);
    }

    #[test]
    fn test_range_edges_are_inclusive() {
        let params = PolicyParams::default()
            .with_bias(CabinClass::F, 1.6)
            .with_bias(CabinClass::Y, 0.6)
            .with_cost_alpha(CabinClass::F, 1.5)
            .with_cost_alpha(CabinClass::Y, 0.5);
        assert!(validate(&params).is_ok());
    }

    #[test]
    fn test_out_of_range_reports_class_path() {
        let params = PolicyParams::default().with_cost_alpha(CabinClass::W, 1.75);
        let errors = validate(&params).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), "costAlpha.W");
        assert_eq!(errors[0].kind(), "OutOfRange");
    }

    #[test]
    fn test_nan_weight_is_rejected() {
        let params = PolicyParams::default().with_bias(CabinClass::J, f64::NAN);
        let errors = validate(&params).unwrap_err();
        assert_eq!(errors[0].field(), "biases.J");
    }

    #[test]
    fn test_unknown_and_missing_keys() {
        let mut params = PolicyParams::default();
        params.hold_on_long.remove("W");
        params.hold_on_long.insert("X".to_string(), true);

        let errors = validate(&params).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingClass {
                    field: "holdOnLong".to_string(),
                    class: CabinClass::W,
                },
                ValidationError::UnknownClass {
                    field: "holdOnLong".to_string(),
                    key: "X".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_negative_episodes() {
        let errors = validate(&PolicyParams::default().with_episodes(-3)).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EpisodesTooLow(-3)]);
    }

    #[test]
    fn test_threshold_sign_and_order() {
        let unordered = PolicyParams::default().with_distance_thresholds(DistanceThresholds {
            short: 3200.0,
            medium: 1200.0,
            long: 7200.0,
        });
        let errors = validate(&unordered).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), "ThresholdOrder");

        let negative = PolicyParams::default().with_distance_thresholds(DistanceThresholds {
            short: -1.0,
            medium: 0.0,
            long: 7200.0,
        });
        let errors = validate(&negative).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(
            fields,
            vec!["distanceThresholds.short", "distanceThresholds.medium"]
        );
    }

    #[test]
    fn test_issue_report_shape() {
        let issue = ValidationIssue::from(&ValidationError::EpisodesTooLow(0));
        assert_eq!(
            serde_json::to_value(&issue).unwrap(),
            serde_json::json!({
                "type": "EpisodesTooLow",
                "field": "episodes",
                "message": "episodes: must be at least 1, got 0"
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::MissingClass {
            field: "biases".to_string(),
            class: CabinClass::J,
        };
        assert_eq!(err.to_string(), "biases: missing class 'J'");
        assert_eq!(
            ValidationError::EpisodesTooLow(0).to_string(),
            "episodes: must be at least 1, got 0"
        );
    }
}
