//! Reference Dataset
//!
//! Fixed figures the simulation scales and the dashboard displays:
//! - baseline / current reference results
//! - per-scenario cost adjustments, penalty breakdowns, KPIs, highlights
//!   and strategy summaries
//! - the scenario catalog, network map, flights and airports
//!
//! # Lifecycle
//!
//! A dataset is built once (`builtin()` or from JSON), wrapped in an `Arc`
//! and shared read-only. Every accessor hands out owned copies, so no
//! caller can alter the shared figures.
//!
//! # Unknown scenarios
//!
//! Scenario lookups never fail. An unknown id resolves to
//! `DEFAULT_SCENARIO` ("baseline"); `resolve_scenario` reports whether that
//! happened so callers can log it.

mod builtin;
pub mod dashboard;

use crate::models::{
    Airport, CostAdjustment, CostPoint, FlightFilter, FlightRow, Kpi, Network, PenaltySlice,
    Scenario, SimulationResult, StrategySummary,
};
use crate::policy::PolicyParams;
use crate::simulation::round_half_up;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Scenario every unknown id falls back to
pub const DEFAULT_SCENARIO: &str = "baseline";

/// Errors raised while loading or querying the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Airport not found: {0}")]
    AirportNotFound(String),

    #[error("Dataset has no figures for default scenario '{}'", DEFAULT_SCENARIO)]
    MissingDefaultScenario,

    #[error("Dataset parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Static figures of one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioFigures {
    /// Multipliers applied to the base cost series
    pub cost_adjustment: CostAdjustment,
    pub penalty_breakdown: Vec<PenaltySlice>,
    pub kpis: Vec<Kpi>,
    pub highlight: String,
    pub strategy: StrategySummary,
}

/// Outcome of resolving a scenario id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioLookup<'a> {
    /// Id whose figures are used
    pub id: &'a str,
    /// True when the requested id was unknown
    pub fell_back: bool,
}

/// Immutable reference dataset
///
/// Every dataset carries figures for `DEFAULT_SCENARIO`; deserialization
/// rejects input without them, so scenario lookups cannot fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RawReferenceDataset", try_from = "RawReferenceDataset")]
pub struct ReferenceDataset {
    scenarios: Vec<Scenario>,
    baseline: SimulationResult,
    reference_current: SimulationResult,
    base_cost_series: Vec<CostPoint>,
    /// Figures of `DEFAULT_SCENARIO`
    default_figures: ScenarioFigures,
    /// Figures of every other scenario
    figures: BTreeMap<String, ScenarioFigures>,
    network: Network,
    flights: Vec<FlightRow>,
    airports: Vec<Airport>,
    default_params: PolicyParams,
}

/// JSON form of a dataset: all scenario figures in one map
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReferenceDataset {
    scenarios: Vec<Scenario>,
    baseline: SimulationResult,
    reference_current: SimulationResult,
    base_cost_series: Vec<CostPoint>,
    figures: BTreeMap<String, ScenarioFigures>,
    network: Network,
    flights: Vec<FlightRow>,
    airports: Vec<Airport>,
    default_params: PolicyParams,
}

impl TryFrom<RawReferenceDataset> for ReferenceDataset {
    type Error = CatalogError;

    fn try_from(mut raw: RawReferenceDataset) -> Result<Self, Self::Error> {
        let default_figures = raw
            .figures
            .remove(DEFAULT_SCENARIO)
            .ok_or(CatalogError::MissingDefaultScenario)?;

        Ok(Self {
            scenarios: raw.scenarios,
            baseline: raw.baseline,
            reference_current: raw.reference_current,
            base_cost_series: raw.base_cost_series,
            default_figures,
            figures: raw.figures,
            network: raw.network,
            flights: raw.flights,
            airports: raw.airports,
            default_params: raw.default_params,
        })
    }
}

impl From<ReferenceDataset> for RawReferenceDataset {
    fn from(dataset: ReferenceDataset) -> Self {
        let mut figures = dataset.figures;
        figures.insert(DEFAULT_SCENARIO.to_string(), dataset.default_figures);

        Self {
            scenarios: dataset.scenarios,
            baseline: dataset.baseline,
            reference_current: dataset.reference_current,
            base_cost_series: dataset.base_cost_series,
            figures,
            network: dataset.network,
            flights: dataset.flights,
            airports: dataset.airports,
            default_params: dataset.default_params,
        }
    }
}

impl ReferenceDataset {
    /// The built-in synthetic catalog
    pub fn builtin() -> Self {
        builtin::dataset()
    }

    /// Load a dataset from its JSON form
    ///
    /// The JSON shape is the dataset's own serde form, so
    /// `serde_json::to_string(&ReferenceDataset::builtin())` is a valid
    /// starting point for a custom file.
    ///
    /// # Errors
    ///
    /// - `Parse` if the JSON does not match the dataset shape
    /// - `MissingDefaultScenario` if there are no "baseline" figures to
    ///   fall back to
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: RawReferenceDataset = serde_json::from_str(json)?;
        let dataset = Self::try_from(raw)?;
        tracing::debug!(
            scenarios = dataset.scenarios.len(),
            flights = dataset.flights.len(),
            airports = dataset.airports.len(),
            "loaded reference dataset"
        );
        Ok(dataset)
    }

    /// Load a dataset from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    // ========================================================================
    // Reference results
    // ========================================================================

    pub fn get_baseline(&self) -> SimulationResult {
        self.baseline.clone()
    }

    pub fn get_reference_current(&self) -> SimulationResult {
        self.reference_current.clone()
    }

    /// Borrowed view of the reference current result, used by the transform
    pub(crate) fn reference_current(&self) -> &SimulationResult {
        &self.reference_current
    }

    // ========================================================================
    // Per-scenario lookups
    // ========================================================================

    /// Resolve a scenario id, falling back to `DEFAULT_SCENARIO`
    pub fn resolve_scenario<'a>(&'a self, scenario_id: &'a str) -> ScenarioLookup<'a> {
        if scenario_id == DEFAULT_SCENARIO || self.figures.contains_key(scenario_id) {
            ScenarioLookup {
                id: scenario_id,
                fell_back: false,
            }
        } else {
            ScenarioLookup {
                id: DEFAULT_SCENARIO,
                fell_back: true,
            }
        }
    }

    fn figures(&self, scenario_id: &str) -> &ScenarioFigures {
        self.figures.get(scenario_id).unwrap_or(&self.default_figures)
    }

    /// Base cost series with the scenario's multipliers applied
    ///
    /// Each component is rounded on its own; `total` is the sum of the
    /// rounded components.
    pub fn get_cost_series(&self, scenario_id: &str) -> Vec<CostPoint> {
        let adjustment = self.figures(scenario_id).cost_adjustment;
        self.base_cost_series
            .iter()
            .map(|point| {
                let operational = round_half_up(point.operational as f64 * adjustment.operational);
                let penalty = round_half_up(point.penalty as f64 * adjustment.penalty);
                CostPoint {
                    round: point.round,
                    operational,
                    penalty,
                    total: operational + penalty,
                }
            })
            .collect()
    }

    pub fn get_penalty_breakdown(&self, scenario_id: &str) -> Vec<PenaltySlice> {
        self.figures(scenario_id).penalty_breakdown.clone()
    }

    pub fn get_kpis(&self, scenario_id: &str) -> Vec<Kpi> {
        self.figures(scenario_id).kpis.clone()
    }

    pub fn get_highlight(&self, scenario_id: &str) -> String {
        self.figures(scenario_id).highlight.clone()
    }

    pub fn get_strategy_summary(&self, scenario_id: &str) -> StrategySummary {
        self.figures(scenario_id).strategy.clone()
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    pub fn list_scenarios(&self) -> Vec<Scenario> {
        self.scenarios.clone()
    }

    pub fn network(&self) -> Network {
        self.network.clone()
    }

    /// Default Policy Parameter Set offered to a fresh strategy session
    pub fn default_params(&self) -> PolicyParams {
        self.default_params.clone()
    }

    /// Flights matching `filter`, in catalog order
    pub fn list_flights(&self, filter: &FlightFilter) -> Vec<FlightRow> {
        self.flights
            .iter()
            .filter(|flight| filter.matches(flight))
            .cloned()
            .collect()
    }

    pub fn list_airports(&self) -> Vec<Airport> {
        self.airports.clone()
    }

    /// Look up one airport by code
    ///
    /// Unlike scenarios, an unknown airport is an error: there is no
    /// sensible default airport to show instead.
    pub fn get_airport(&self, code: &str) -> Result<Airport, CatalogError> {
        self.airports
            .iter()
            .find(|airport| airport.code == code)
            .cloned()
            .ok_or_else(|| CatalogError::AirportNotFound(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CabinClass, FlightStatus};

    #[test]
    fn test_reference_figures() {
        let dataset = ReferenceDataset::builtin();
        let baseline = dataset.get_baseline();
        assert_eq!(baseline.total_cost, 438_917_636);
        assert_eq!(baseline.operational, 438_167_906);
        assert_eq!(baseline.penalties, 749_730);

        let current = dataset.get_reference_current();
        assert_eq!(current.operational, 432_000_000);
        assert_eq!(current.penalties, 610_000);
        assert_eq!(current.breakdown_total(), 43_640);
    }

    #[test]
    fn test_returned_copies_are_independent() {
        let dataset = ReferenceDataset::builtin();
        let mut copy = dataset.get_baseline();
        copy.penalties = 0;
        copy.penalty_breakdown.clear();
        assert_eq!(dataset.get_baseline().penalties, 749_730);
        assert_eq!(dataset.get_baseline().penalty_breakdown.len(), 5);
    }

    #[test]
    fn test_resolve_scenario() {
        let dataset = ReferenceDataset::builtin();
        assert_eq!(
            dataset.resolve_scenario("distance"),
            ScenarioLookup {
                id: "distance",
                fell_back: false
            }
        );
        assert_eq!(
            dataset.resolve_scenario("nonexistent"),
            ScenarioLookup {
                id: DEFAULT_SCENARIO,
                fell_back: true
            }
        );
    }

    #[test]
    fn test_baseline_cost_series_is_unscaled() {
        let series = ReferenceDataset::builtin().get_cost_series("baseline");
        assert_eq!(series.len(), 12);
        assert_eq!(
            series[0],
            CostPoint {
                round: 1,
                operational: 16253,
                penalty: 27,
                total: 16280
            }
        );
    }

    #[test]
    fn test_cost_aware_series_is_scaled() {
        let series = ReferenceDataset::builtin().get_cost_series("costAware");
        // 16253 * 0.98 = 15927.94, 27 * 0.82 = 22.14
        assert_eq!(
            series[0],
            CostPoint {
                round: 1,
                operational: 15928,
                penalty: 22,
                total: 15950
            }
        );
        assert!(series.iter().all(|p| p.total == p.operational + p.penalty));
    }

    #[test]
    fn test_unknown_scenario_lookups_fall_back() {
        let dataset = ReferenceDataset::builtin();
        assert_eq!(dataset.get_kpis("nope"), dataset.get_kpis("baseline"));
        assert_eq!(dataset.get_cost_series("nope"), dataset.get_cost_series("baseline"));
        assert_eq!(
            dataset.get_penalty_breakdown("nope"),
            dataset.get_penalty_breakdown("baseline")
        );
        assert_eq!(dataset.get_highlight("nope"), dataset.get_highlight("baseline"));
    }

    #[test]
    fn test_flights_and_airports() {
        let dataset = ReferenceDataset::builtin();
        assert_eq!(dataset.list_flights(&FlightFilter::default()).len(), 8);

        let ok = dataset.list_flights(&FlightFilter::default().with_outcome(FlightStatus::Ok));
        assert_eq!(ok.len(), 3);

        let long = dataset.list_flights(
            &FlightFilter::default()
                .with_distance(2800, 14000)
                .with_cabin(CabinClass::F),
        );
        assert_eq!(long.len(), 3);
        assert!(long.iter().all(|f| f.id == "AB1001"));

        assert_eq!(dataset.list_airports().len(), 5);
        assert_eq!(dataset.get_airport("ZHVK").unwrap().name, "Airport ZHVK");
        assert!(matches!(
            dataset.get_airport("XXXX"),
            Err(CatalogError::AirportNotFound(code)) if code == "XXXX"
        ));
    }

    #[test]
    fn test_json_round_trip_and_default_requirement() {
        let dataset = ReferenceDataset::builtin();
        let json = serde_json::to_string(&dataset).unwrap();
        assert_eq!(ReferenceDataset::from_json_str(&json).unwrap(), dataset);

        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["figures"]
            .as_object_mut()
            .unwrap()
            .remove(DEFAULT_SCENARIO);
        let err = ReferenceDataset::from_json_str(&value.to_string()).unwrap_err();
        assert!(matches!(err, CatalogError::MissingDefaultScenario));
    }

    #[test]
    fn test_serde_rejects_dataset_without_default_figures() {
        let mut value = serde_json::to_value(ReferenceDataset::builtin()).unwrap();
        value["figures"]
            .as_object_mut()
            .unwrap()
            .remove(DEFAULT_SCENARIO);

        let err = serde_json::from_value::<ReferenceDataset>(value).unwrap_err();
        assert!(err.to_string().contains("default scenario"));
    }

    #[test]
    fn test_default_figures_serialize_under_default_id() {
        let value = serde_json::to_value(ReferenceDataset::builtin()).unwrap();
        let ids: Vec<&String> = value["figures"].as_object().unwrap().keys().collect();
        assert_eq!(ids, vec!["baseline", "costAware", "distance"]);
        assert!(value.get("defaultFigures").is_none());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = ReferenceDataset::from_json_str("{\"scenarios\": 3}").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
