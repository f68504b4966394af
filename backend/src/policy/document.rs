//! Parameter sets submitted as JSON
//!
//! Strict deserialization into `PolicyParams` stops at the first missing
//! or mistyped field. `ParamsDocument` reads the JSON leniently instead:
//! every structural problem is recorded, the readable parts become a
//! `PolicyParams`, and `validate()` reports the structural problems
//! together with the field-level ones.
//!
//! Field-level problems nested under a field that is already missing or
//! mistyped (e.g. `biases.J` when `biases` is absent) are not repeated.

use super::params::{DistanceThresholds, PolicyParams};
use super::validation::{validate, ValidationError, ValidationResult};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A parameter set read from JSON, with the problems found while reading
#[derive(Debug, Clone, PartialEq)]
pub struct ParamsDocument {
    params: PolicyParams,
    problems: Vec<ValidationError>,
}

impl From<PolicyParams> for ParamsDocument {
    fn from(params: PolicyParams) -> Self {
        Self {
            params,
            problems: Vec::new(),
        }
    }
}

impl ParamsDocument {
    /// Parse JSON text
    ///
    /// # Errors
    ///
    /// Only syntax errors fail here; shape problems are recorded.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        let mut problems = Vec::new();

        let Some(root) = value.as_object() else {
            problems.push(ValidationError::WrongType {
                field: "params".to_string(),
                expected: "object",
            });
            return Self {
                params: PolicyParams::default(),
                problems,
            };
        };

        let params = PolicyParams {
            biases: read_class_map(root, "biases", Value::as_f64, "number", &mut problems),
            distance_thresholds: read_thresholds(root, &mut problems),
            cost_alpha: read_class_map(root, "costAlpha", Value::as_f64, "number", &mut problems),
            hold_on_long: read_class_map(
                root,
                "holdOnLong",
                Value::as_bool,
                "boolean",
                &mut problems,
            ),
            episodes: read_integer(root, "episodes", &mut problems),
            seed: read_integer(root, "seed", &mut problems),
        };

        Self { params, problems }
    }

    /// The readable part of the document
    ///
    /// Missing or mistyped pieces hold placeholders; only use this for
    /// display or further edits, never as a validated set.
    pub fn params(&self) -> &PolicyParams {
        &self.params
    }

    pub fn problems(&self) -> &[ValidationError] {
        &self.problems
    }

    /// Replace the parameters with an edited copy
    ///
    /// `fields` names the wire paths the edit supplies (e.g. `episodes`,
    /// `biases.F`); reading problems at exactly those paths, or nested
    /// under them, are resolved.
    pub fn edit(self, fields: &[String], edit: impl FnOnce(PolicyParams) -> PolicyParams) -> Self {
        let problems = self
            .problems
            .into_iter()
            .filter(|problem| !fields.iter().any(|field| nested_in(&problem.field(), field)))
            .collect();

        Self {
            params: edit(self.params),
            problems,
        }
    }

    /// Validate the document, reporting reading and field problems together
    pub fn validate(&self) -> ValidationResult {
        let outcome = validate(&self.params);
        if self.problems.is_empty() {
            return outcome;
        }

        let mut errors = self.problems.clone();
        if let Err(more) = outcome {
            errors.extend(more.into_iter().filter(|error| !self.already_reported(error)));
        }
        Err(errors)
    }

    fn already_reported(&self, error: &ValidationError) -> bool {
        let field = error.field();
        self.problems.iter().any(|problem| nested_in(&field, &problem.field()))
    }
}

/// Whether `path` is `parent` or lies under it
fn nested_in(path: &str, parent: &str) -> bool {
    path == parent || path.strip_prefix(parent).is_some_and(|rest| rest.starts_with('.'))
}

fn read_class_map<T>(
    root: &Map<String, Value>,
    field: &str,
    read: fn(&Value) -> Option<T>,
    expected: &'static str,
    problems: &mut Vec<ValidationError>,
) -> BTreeMap<String, T> {
    let Some(section) = root.get(field) else {
        problems.push(ValidationError::MissingField {
            field: field.to_string(),
        });
        return BTreeMap::new();
    };
    let Some(entries) = section.as_object() else {
        problems.push(ValidationError::WrongType {
            field: field.to_string(),
            expected: "object",
        });
        return BTreeMap::new();
    };

    let mut map = BTreeMap::new();
    for (key, value) in entries {
        match read(value) {
            Some(value) => {
                map.insert(key.clone(), value);
            }
            None => problems.push(ValidationError::WrongType {
                field: format!("{}.{}", field, key),
                expected,
            }),
        }
    }
    map
}

fn read_thresholds(
    root: &Map<String, Value>,
    problems: &mut Vec<ValidationError>,
) -> DistanceThresholds {
    const FIELD: &str = "distanceThresholds";

    // NaN placeholders fail the sign check, which is then folded into the
    // reading problem
    let unreadable = DistanceThresholds {
        short: f64::NAN,
        medium: f64::NAN,
        long: f64::NAN,
    };

    let Some(section) = root.get(FIELD) else {
        problems.push(ValidationError::MissingField {
            field: FIELD.to_string(),
        });
        return unreadable;
    };
    let Some(entries) = section.as_object() else {
        problems.push(ValidationError::WrongType {
            field: FIELD.to_string(),
            expected: "object",
        });
        return unreadable;
    };

    let mut read = |name: &str| {
        let field = format!("{}.{}", FIELD, name);
        match entries.get(name) {
            None => {
                problems.push(ValidationError::MissingField { field });
                f64::NAN
            }
            Some(value) => value.as_f64().unwrap_or_else(|| {
                problems.push(ValidationError::WrongType {
                    field,
                    expected: "number",
                });
                f64::NAN
            }),
        }
    };

    DistanceThresholds {
        short: read("short"),
        medium: read("medium"),
        long: read("long"),
    }
}

fn read_integer(
    root: &Map<String, Value>,
    field: &str,
    problems: &mut Vec<ValidationError>,
) -> i64 {
    match root.get(field) {
        None => {
            problems.push(ValidationError::MissingField {
                field: field.to_string(),
            });
            0
        }
        Some(value) => value.as_i64().unwrap_or_else(|| {
            problems.push(ValidationError::WrongType {
                field: field.to_string(),
                expected: "integer",
            });
            0
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CabinClass;
    use serde_json::json;

    fn wire() -> Value {
        serde_json::to_value(PolicyParams::default()).unwrap()
    }

    fn fields(errors: &[ValidationError]) -> Vec<String> {
        errors.iter().map(|e| e.field()).collect()
    }

    #[test]
    fn test_complete_document_matches_strict_form() {
        let doc = ParamsDocument::from_value(&wire());
        assert!(doc.problems().is_empty());
        assert_eq!(doc.params(), &PolicyParams::default());
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_missing_scalar_and_missing_class_both_reported() {
        let mut value = wire();
        value["biases"].as_object_mut().unwrap().remove("J");
        value.as_object_mut().unwrap().remove("episodes");

        let errors = ParamsDocument::from_value(&value).validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingField {
                    field: "episodes".to_string(),
                },
                ValidationError::MissingClass {
                    field: "biases".to_string(),
                    class: CabinClass::J,
                },
            ]
        );
    }

    #[test]
    fn test_mistyped_values_are_not_reported_twice() {
        let mut value = wire();
        value["costAlpha"]["W"] = json!("high");
        value["seed"] = json!(4.5);
        value["distanceThresholds"]["long"] = json!(null);
        value["biases"]["F"] = json!(9.0);

        let errors = ParamsDocument::from_value(&value).validate().unwrap_err();
        assert_eq!(
            fields(&errors),
            vec!["distanceThresholds.long", "costAlpha.W", "seed", "biases.F"]
        );
        assert_eq!(errors[1].to_string(), "costAlpha.W: expected number");
    }

    #[test]
    fn test_missing_sections() {
        let errors = ParamsDocument::from_value(&json!({"seed": 1}))
            .validate()
            .unwrap_err();
        assert_eq!(
            fields(&errors),
            vec!["biases", "distanceThresholds", "costAlpha", "holdOnLong", "episodes"]
        );
    }

    #[test]
    fn test_non_object_document() {
        let errors = ParamsDocument::from_value(&json!([1, 2])).validate().unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::WrongType {
                field: "params".to_string(),
                expected: "object",
            }]
        );
    }

    #[test]
    fn test_syntax_error_fails_parse() {
        assert!(ParamsDocument::from_json_str("{\"biases\": ").is_err());
    }

    #[test]
    fn test_edit_resolves_supplied_fields() {
        let mut value = wire();
        value.as_object_mut().unwrap().remove("episodes");
        value["biases"]["J"] = json!("x");

        let doc = ParamsDocument::from_value(&value).edit(&["episodes".to_string()], |p| {
            p.with_episodes(3)
        });
        assert_eq!(fields(doc.problems()), vec!["biases.J"]);

        let doc = doc.edit(&["biases.J".to_string()], |p| p.with_bias(CabinClass::J, 1.0));
        let valid = doc.validate().unwrap();
        assert_eq!(valid.episodes(), 3);
        assert_eq!(valid.biases().j, 1.0);
    }

    #[test]
    fn test_nested_in() {
        assert!(nested_in("biases.J", "biases"));
        assert!(nested_in("biases", "biases"));
        assert!(!nested_in("biasesX", "biases"));
        assert!(!nested_in("biases", "biases.J"));
    }
}
