//! Kit Simulator Core - Rust Engine
//!
//! Scenario simulation for rotable-kit allocation across an airline
//! network, with deterministic execution.
//!
//! # Architecture
//!
//! - **models**: Domain types (cabin classes, results, flights, airports)
//! - **policy**: Policy Parameter Set and its validation
//! - **dataset**: Read-only reference dataset and catalog lookups
//! - **simulation**: The closed-form simulation transform
//! - **service**: Entry points for the surrounding application
//!
//! # Critical Invariants
//!
//! 1. All cost and penalty figures are i64, rounded half-up
//! 2. Simulation is pure and deterministic
//! 3. The reference dataset is never mutated after construction
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod dataset;
pub mod models;
pub mod policy;
pub mod service;
pub mod simulation;

// Re-exports for convenience
pub use dataset::{CatalogError, ReferenceDataset, DEFAULT_SCENARIO};
pub use models::{
    Airport, CabinClass, ClassMap, ComparisonResult, DashboardPayload, FlightFilter, FlightRow,
    PenaltySlice, Scenario, SimulationResult,
};
pub use policy::{validate, DistanceThresholds, PolicyParams, ValidParams, ValidationError};
pub use service::{ScenarioService, ServiceError};
pub use simulation::{scale_factors, simulate, ScaleFactors};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

/// Validate a Policy Parameter Set JSON string.
///
/// Performs:
/// 1. JSON parsing (syntax and shape)
/// 2. Field validation (class coverage, ranges, episodes, thresholds)
///
/// # Returns
///
/// JSON string with validation results:
/// - On success: `{"valid": true, "fingerprint": "..."}`
/// - On failure: `{"valid": false, "errors": [{"type": "...", "field": "...", "message": "..."}]}`
#[cfg(feature = "pyo3")]
#[pyfunction]
#[pyo3(name = "validate_params")]
fn py_validate_params(params_json: &str) -> PyResult<String> {
    Ok(ffi::types::validation_report(params_json).to_string())
}

#[cfg(feature = "pyo3")]
#[pymodule]
fn kit_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::service::PyScenarioService>()?;
    m.add_function(wrap_pyfunction!(py_validate_params, m)?)?;
    Ok(())
}
