//! Type conversion utilities for FFI boundary
//!
//! Everything crosses the boundary as JSON text: parameter sets come in
//! as JSON objects, results go out as JSON strings.

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use serde::Serialize;
use serde_json::{json, Value};

use crate::models::FlightFilter;
use crate::policy::{ParamsDocument, ValidationIssue};
use crate::service::ServiceError;

/// Parse a Policy Parameter Set from JSON.
///
/// Missing or mistyped fields are recorded in the document and reported
/// when it is validated.
///
/// # Errors
/// Returns PyValueError if the text is not JSON.
pub fn parse_params(params_json: &str) -> PyResult<ParamsDocument> {
    ParamsDocument::from_json_str(params_json)
        .map_err(|e| PyValueError::new_err(format!("Invalid parameter JSON: {}", e)))
}

/// Parse a flight filter from JSON; `None` means no filtering.
pub fn parse_flight_filter(filter_json: Option<&str>) -> PyResult<FlightFilter> {
    match filter_json {
        None => Ok(FlightFilter::default()),
        Some(json) => serde_json::from_str(json)
            .map_err(|e| PyValueError::new_err(format!("Invalid flight filter JSON: {}", e))),
    }
}

/// Serialize a result for Python.
pub fn to_json<T: Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value)
        .map_err(|e| PyValueError::new_err(format!("Serialization failed: {}", e)))
}

/// Map a service error onto a Python exception.
///
/// Validation failures become ValueError with every problem in the
/// message; unknown airports become KeyError.
pub fn service_error_to_py(err: ServiceError) -> PyErr {
    match &err {
        ServiceError::InvalidParams(_) => PyValueError::new_err(err.to_string()),
        ServiceError::Catalog(_) => PyKeyError::new_err(err.to_string()),
    }
}

/// Build the `{"valid": ...}` report for a parameter JSON string.
///
/// Parse failures are reported in the same shape as field problems so
/// callers only handle one format.
pub fn validation_report(params_json: &str) -> Value {
    let document = match ParamsDocument::from_json_str(params_json) {
        Ok(document) => document,
        Err(e) => {
            return json!({
                "valid": false,
                "errors": [{
                    "type": "ParseError",
                    "field": "",
                    "message": format!("JSON parsing failed: {}", e)
                }]
            });
        }
    };

    match document.validate() {
        Ok(_) => json!({
            "valid": true,
            "fingerprint": document.params().fingerprint().ok(),
        }),
        Err(errors) => {
            let issues: Vec<ValidationIssue> = errors.iter().map(ValidationIssue::from).collect();
            json!({
                "valid": false,
                "errors": issues,
            })
        }
    }
}
