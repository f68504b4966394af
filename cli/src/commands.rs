//! Command implementations
//!
//! Each command turns service output into JSON text. Validation failures
//! are not errors here: they produce a `Rejected` report that the binary
//! prints before exiting with status 2.

use clap::Args;
use kit_simulator_core_rs::models::{
    Airport, CabinClass, ClassMap, ComparisonResult, FlightFilter, FlightStatus, PenaltyDelta,
    StockHealth,
};
use kit_simulator_core_rs::policy::{
    DistanceThresholds, ParamsDocument, PolicyParams, ValidationIssue,
};
use kit_simulator_core_rs::{
    scale_factors, CatalogError, ReferenceDataset, ScaleFactors, ScenarioService, ServiceError,
};
use serde::Serialize;
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid parameter JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Minimum distance {min} km exceeds maximum {max} km")]
    DistanceRange { min: u32, max: u32 },
}

/// What a command produced
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Success(String),
    /// Parameter set rejected; the report lists every problem
    Rejected(String),
}

pub struct Printer {
    pub pretty: bool,
}

impl Printer {
    fn render<T: Serialize>(&self, value: &T) -> Result<String, CliError> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }

    pub fn success<T: Serialize>(&self, value: &T) -> Result<Outcome, CliError> {
        Ok(Outcome::Success(self.render(value)?))
    }

    pub fn rejected<T: Serialize>(&self, value: &T) -> Result<Outcome, CliError> {
        Ok(Outcome::Rejected(self.render(value)?))
    }
}

pub fn load_service(dataset: Option<&Path>) -> Result<ScenarioService, CliError> {
    let dataset = match dataset {
        Some(path) => {
            info!(path = %path.display(), "loading dataset");
            ReferenceDataset::from_path(path)?
        }
        None => ReferenceDataset::builtin(),
    };
    Ok(ScenarioService::new(Arc::new(dataset)))
}

/// Parameter source plus per-field overrides
///
/// Overrides are applied on top of the loaded (or default) parameter set,
/// each producing a new parameter value.
#[derive(Args, Debug, Default)]
pub struct ParamOverrides {
    /// Parameter set JSON file ("-" reads stdin); defaults to the dataset's defaults
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Class bias, e.g. --bias F=1.4 (repeatable)
    #[arg(long = "bias", value_parser = parse_class_value::<f64>)]
    pub biases: Vec<(CabinClass, f64)>,

    /// Cost alpha, e.g. --cost-alpha Y=0.9 (repeatable)
    #[arg(long = "cost-alpha", value_parser = parse_class_value::<f64>)]
    pub cost_alpha: Vec<(CabinClass, f64)>,

    /// Long-haul hold flag, e.g. --hold Y=false (repeatable)
    #[arg(long = "hold", value_parser = parse_class_value::<bool>)]
    pub hold_on_long: Vec<(CabinClass, bool)>,

    /// Distance thresholds as SHORT,MEDIUM,LONG (km)
    #[arg(long, value_parser = parse_thresholds)]
    pub thresholds: Option<DistanceThresholds>,

    #[arg(long, allow_negative_numbers = true)]
    pub episodes: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,
}

fn parse_class_value<T: std::str::FromStr>(raw: &str) -> Result<(CabinClass, T), String> {
    let (class, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CLASS=VALUE, got '{}'", raw))?;
    let class: CabinClass = class.parse()?;
    let value = value
        .trim()
        .parse::<T>()
        .map_err(|_| format!("invalid value '{}' for class {}", value, class))?;
    Ok((class, value))
}

fn parse_thresholds(raw: &str) -> Result<DistanceThresholds, String> {
    let parts: Vec<f64> = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid threshold list '{}': {}", raw, e))?;
    match parts.as_slice() {
        [short, medium, long] => Ok(DistanceThresholds {
            short: *short,
            medium: *medium,
            long: *long,
        }),
        _ => Err(format!("expected SHORT,MEDIUM,LONG, got '{}'", raw)),
    }
}

impl ParamOverrides {
    /// Load the base parameter document and apply every override
    pub fn resolve(&self, service: &ScenarioService) -> Result<ParamsDocument, CliError> {
        let base = match &self.params {
            Some(path) => read_params(path)?,
            None => ParamsDocument::from(service.default_params()),
        };
        Ok(base.edit(&self.fields(), |params| self.apply(params)))
    }

    /// Wire paths the overrides supply
    fn fields(&self) -> Vec<String> {
        let mut fields = Vec::new();
        fields.extend(self.biases.iter().map(|(class, _)| format!("biases.{}", class)));
        fields.extend(self.cost_alpha.iter().map(|(class, _)| format!("costAlpha.{}", class)));
        fields.extend(self.hold_on_long.iter().map(|(class, _)| format!("holdOnLong.{}", class)));
        if self.thresholds.is_some() {
            fields.push("distanceThresholds".to_string());
        }
        if self.episodes.is_some() {
            fields.push("episodes".to_string());
        }
        if self.seed.is_some() {
            fields.push("seed".to_string());
        }
        fields
    }

    fn apply(&self, base: PolicyParams) -> PolicyParams {
        let mut params = base;
        for &(class, value) in &self.biases {
            params = params.with_bias(class, value);
        }
        for &(class, value) in &self.cost_alpha {
            params = params.with_cost_alpha(class, value);
        }
        for &(class, hold) in &self.hold_on_long {
            params = params.with_hold_on_long(class, hold);
        }
        if let Some(thresholds) = self.thresholds {
            params = params.with_distance_thresholds(thresholds);
        }
        if let Some(episodes) = self.episodes {
            params = params.with_episodes(episodes);
        }
        if let Some(seed) = self.seed {
            params = params.with_seed(seed);
        }
        params
    }
}

fn read_params(path: &Path) -> Result<ParamsDocument, CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };

    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(io_error)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(io_error)?
    };
    debug!(bytes = text.len(), "read parameter set");
    Ok(ParamsDocument::from_json_str(&text)?)
}

fn rejection(errors: &[kit_simulator_core_rs::ValidationError]) -> serde_json::Value {
    let issues: Vec<ValidationIssue> = errors.iter().map(ValidationIssue::from).collect();
    json!({ "valid": false, "errors": issues })
}

pub fn validate(
    service: &ScenarioService,
    overrides: &ParamOverrides,
    out: &Printer,
) -> Result<Outcome, CliError> {
    let document = overrides.resolve(service)?;
    match service.validate_document(&document) {
        Ok(_) => out.success(&json!({
            "valid": true,
            "fingerprint": document.params().fingerprint()?,
        })),
        Err(ServiceError::InvalidParams(errors)) => out.rejected(&rejection(&errors)),
        Err(e) => Err(e.into()),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub fingerprint: String,
    pub factors: ScaleFactors,
    #[serde(flatten)]
    pub comparison: ComparisonResult,
    pub penalty_delta_pct: Option<f64>,
    pub total_cost_delta_pct: Option<f64>,
    pub operational_delta_pct: Option<f64>,
    /// Per-category penalty reduction against the baseline
    pub penalty_deltas: Vec<PenaltyDelta>,
}

impl SimulationReport {
    fn new(fingerprint: String, factors: ScaleFactors, comparison: ComparisonResult) -> Self {
        Self {
            fingerprint,
            factors,
            penalty_delta_pct: comparison.penalty_delta_pct(),
            total_cost_delta_pct: comparison.total_cost_delta_pct(),
            operational_delta_pct: comparison.operational_delta_pct(),
            penalty_deltas: comparison.penalty_deltas(),
            comparison,
        }
    }
}

pub fn simulate(
    service: &ScenarioService,
    overrides: &ParamOverrides,
    out: &Printer,
) -> Result<Outcome, CliError> {
    let document = overrides.resolve(service)?;
    let valid = match service.validate_document(&document) {
        Ok(valid) => valid,
        Err(ServiceError::InvalidParams(errors)) => return out.rejected(&rejection(&errors)),
        Err(e) => return Err(e.into()),
    };

    let report = SimulationReport::new(
        document.params().fingerprint()?,
        scale_factors(&valid),
        service.simulate(&valid),
    );
    out.success(&report)
}

/// Build a flight filter; the distance range is only set when a bound is given
pub fn flight_filter(
    airport: Option<String>,
    cabin: Option<CabinClass>,
    min_distance: Option<u32>,
    max_distance: Option<u32>,
    outcome: Option<FlightStatus>,
) -> Result<FlightFilter, CliError> {
    let distance = match (min_distance, max_distance) {
        (None, None) => None,
        (min, max) => {
            let (min, max) = (min.unwrap_or(0), max.unwrap_or(u32::MAX));
            if min > max {
                return Err(CliError::DistanceRange { min, max });
            }
            Some((min, max))
        }
    };

    Ok(FlightFilter {
        airport,
        distance,
        cabin,
        outcome,
    })
}

/// Airport with derived stock figures
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportReport {
    #[serde(flatten)]
    pub airport: Airport,
    pub health: ClassMap<StockHealth>,
    pub net_flow: i64,
    pub total_stock: i64,
    pub total_capacity: i64,
}

impl From<&Airport> for AirportReport {
    fn from(airport: &Airport) -> Self {
        Self {
            health: airport.health(),
            net_flow: airport.net_flow(),
            total_stock: airport.total_stock(),
            total_capacity: airport.total_capacity(),
            airport: airport.clone(),
        }
    }
}

pub fn airport_reports(airports: &[Airport]) -> Vec<AirportReport> {
    airports.iter().map(AirportReport::from).collect()
}
