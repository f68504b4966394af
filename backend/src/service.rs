//! Scenario Simulation Service
//!
//! Entry point for the surrounding application. Wraps an injected,
//! read-only `ReferenceDataset` and exposes:
//!
//! - `list_scenarios()`
//! - `get_dashboard(scenario_id)`
//! - `run_simulation(params)`
//!
//! plus the catalog queries behind the flights, airports and strategy
//! pages. The service holds no mutable state; clones share the dataset
//! and may be used from any number of threads.

use crate::dataset::{CatalogError, ReferenceDataset};
use crate::models::{
    Airport, ComparisonResult, DashboardPayload, FlightFilter, FlightRow, Scenario,
    StrategySummary,
};
use crate::policy::{validate, ParamsDocument, PolicyParams, ValidParams, ValidationError};
use crate::simulation::{scale_factors, simulate};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced to service callers
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The parameter set was rejected; every problem is listed
    #[error("Invalid policy parameters: {}", join_messages(.0))]
    InvalidParams(Vec<ValidationError>),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl ServiceError {
    /// Field-level problems, when this is a validation failure
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            ServiceError::InvalidParams(errors) => Some(errors),
            ServiceError::Catalog(_) => None,
        }
    }
}

fn reject(errors: Vec<ValidationError>) -> ServiceError {
    warn!(
        problems = errors.len(),
        details = %join_messages(&errors),
        "rejected policy parameters"
    );
    ServiceError::InvalidParams(errors)
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone)]
pub struct ScenarioService {
    dataset: Arc<ReferenceDataset>,
}

impl ScenarioService {
    pub fn new(dataset: Arc<ReferenceDataset>) -> Self {
        Self { dataset }
    }

    /// Service over the built-in catalog
    pub fn builtin() -> Self {
        Self::new(Arc::new(ReferenceDataset::builtin()))
    }

    pub fn dataset(&self) -> &ReferenceDataset {
        &self.dataset
    }

    pub fn list_scenarios(&self) -> Vec<Scenario> {
        self.dataset.list_scenarios()
    }

    /// Dashboard payload for a scenario
    ///
    /// Unknown ids are served the default scenario's payload; the fallback
    /// is logged, never raised.
    pub fn get_dashboard(&self, scenario_id: &str) -> DashboardPayload {
        self.note_fallback(scenario_id);
        self.dataset.get_dashboard(scenario_id)
    }

    pub fn get_strategy_summary(&self, scenario_id: &str) -> StrategySummary {
        self.note_fallback(scenario_id);
        self.dataset.get_strategy_summary(scenario_id)
    }

    pub fn default_params(&self) -> PolicyParams {
        self.dataset.default_params()
    }

    /// Validate a parameter set without running it
    pub fn validate_params(&self, params: &PolicyParams) -> Result<ValidParams, ServiceError> {
        validate(params).map_err(reject)
    }

    /// Validate a JSON parameter document, reporting reading and field
    /// problems together
    pub fn validate_document(
        &self,
        document: &ParamsDocument,
    ) -> Result<ValidParams, ServiceError> {
        document.validate().map_err(reject)
    }

    /// Validate and simulate a parameter set
    ///
    /// # Errors
    ///
    /// `InvalidParams` listing every field-level problem. The transform
    /// itself cannot fail.
    pub fn run_simulation(&self, params: &PolicyParams) -> Result<ComparisonResult, ServiceError> {
        let valid = self.validate_params(params)?;
        Ok(self.simulate(&valid))
    }

    /// Simulate an already validated parameter set
    pub fn simulate(&self, valid: &ValidParams) -> ComparisonResult {
        let fingerprint = PolicyParams::from(valid)
            .fingerprint()
            .unwrap_or_else(|e| format!("unavailable ({})", e));
        let factors = scale_factors(valid);
        debug!(
            params = %fingerprint,
            premium_lift = factors.premium_lift,
            econ_throttle = factors.econ_throttle,
            penalty_scale = factors.penalty_scale,
            operational_scale = factors.operational_scale,
            "scale factors"
        );

        let result = simulate(valid, &self.dataset);
        info!(
            params = %fingerprint,
            episodes = valid.episodes(),
            seed = valid.seed(),
            total_cost = result.current.total_cost,
            penalties = result.current.penalties,
            "simulation complete"
        );
        result
    }

    pub fn list_flights(&self, filter: &FlightFilter) -> Vec<FlightRow> {
        let flights = self.dataset.list_flights(filter);
        debug!(matched = flights.len(), "flight query");
        flights
    }

    pub fn list_airports(&self) -> Vec<Airport> {
        self.dataset.list_airports()
    }

    pub fn get_airport(&self, code: &str) -> Result<Airport, ServiceError> {
        Ok(self.dataset.get_airport(code)?)
    }

    fn note_fallback(&self, scenario_id: &str) {
        let lookup = self.dataset.resolve_scenario(scenario_id);
        if lookup.fell_back {
            warn!(
                requested = scenario_id,
                serving = lookup.id,
                "unknown scenario, serving default"
            );
        }
    }
}
