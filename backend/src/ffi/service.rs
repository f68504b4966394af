//! PyO3 wrapper for ScenarioService
//!
//! This module provides the Python interface to the simulation service.

use pyo3::prelude::*;

use super::types::{parse_flight_filter, parse_params, service_error_to_py, to_json};
use crate::dataset::ReferenceDataset;
use crate::service::ScenarioService as RustScenarioService;
use std::sync::Arc;

/// Python wrapper for Rust ScenarioService
///
/// # Example (from Python)
///
/// ```python
/// import json
/// from kit_simulator_core_rs import ScenarioService
///
/// service = ScenarioService()
/// params = json.loads(service.default_params())
/// params["biases"]["F"] = 1.4
///
/// result = json.loads(service.run_simulation(json.dumps(params)))
/// print(result["current"]["penalties"])
/// ```
#[pyclass(name = "ScenarioService")]
pub struct PyScenarioService {
    inner: RustScenarioService,
}

#[pymethods]
impl PyScenarioService {
    /// Create a service over the built-in catalog
    #[new]
    fn new() -> Self {
        PyScenarioService {
            inner: RustScenarioService::builtin(),
        }
    }

    /// Create a service over a dataset JSON string
    ///
    /// # Errors
    ///
    /// Raises ValueError if the dataset does not parse or has no
    /// "baseline" scenario figures.
    #[staticmethod]
    fn from_dataset_json(dataset_json: &str) -> PyResult<Self> {
        let dataset = ReferenceDataset::from_json_str(dataset_json).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Failed to load dataset: {}",
                e
            ))
        })?;
        Ok(PyScenarioService {
            inner: RustScenarioService::new(Arc::new(dataset)),
        })
    }

    fn list_scenarios(&self) -> PyResult<String> {
        to_json(&self.inner.list_scenarios())
    }

    /// Dashboard payload; unknown ids get the baseline payload
    fn get_dashboard(&self, scenario_id: &str) -> PyResult<String> {
        to_json(&self.inner.get_dashboard(scenario_id))
    }

    fn get_strategy_summary(&self, scenario_id: &str) -> PyResult<String> {
        to_json(&self.inner.get_strategy_summary(scenario_id))
    }

    fn default_params(&self) -> PyResult<String> {
        to_json(&self.inner.default_params())
    }

    /// Run the simulation transform
    ///
    /// # Errors
    ///
    /// Raises ValueError listing every invalid field.
    fn run_simulation(&self, params_json: &str) -> PyResult<String> {
        let document = parse_params(params_json)?;
        let valid = self
            .inner
            .validate_document(&document)
            .map_err(service_error_to_py)?;
        to_json(&self.inner.simulate(&valid))
    }

    #[pyo3(signature = (filter_json=None))]
    fn list_flights(&self, filter_json: Option<&str>) -> PyResult<String> {
        let filter = parse_flight_filter(filter_json)?;
        to_json(&self.inner.list_flights(&filter))
    }

    fn list_airports(&self) -> PyResult<String> {
        to_json(&self.inner.list_airports())
    }

    /// Raises KeyError for an unknown airport code
    fn get_airport(&self, code: &str) -> PyResult<String> {
        let airport = self.inner.get_airport(code).map_err(service_error_to_py)?;
        to_json(&airport)
    }
}
