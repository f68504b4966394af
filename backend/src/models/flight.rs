//! Flight rows and flight filtering
//!
//! Each row is one operated flight with its per-cabin load outcome.
//! `FlightFilter` narrows the catalog the way the flights page does:
//! every criterion is optional and all given criteria must match.

use super::cabin::CabinClass;
use serde::{Deserialize, Serialize};

/// Outcome of a flight's kit loading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightStatus {
    /// All cabins served
    Ok,
    /// Some passengers unserved
    Warning,
    Critical,
}

impl std::str::FromStr for FlightStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ok" => Ok(FlightStatus::Ok),
            "warning" => Ok(FlightStatus::Warning),
            "critical" => Ok(FlightStatus::Critical),
            other => Err(format!("unknown flight status '{}'", other)),
        }
    }
}

/// Load outcome for one cabin of a flight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightCabin {
    pub cabin: CabinClass,
    /// Passengers booked
    pub pax: u32,
    /// Kits loaded
    pub loaded: u32,
    /// Unserved passengers
    pub penalty: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRow {
    pub id: String,
    pub origin: String,
    pub destination: String,
    /// Great-circle distance (km)
    pub distance: u32,
    pub aircraft: String,
    pub departure: String,
    pub arrival: String,
    pub operational_cost: i64,
    pub penalty_cost: i64,
    pub cabins: Vec<FlightCabin>,
    pub status: FlightStatus,
    pub explanation: String,
}

impl FlightRow {
    /// Whether the flight touches `airport` as origin or destination
    pub fn serves(&self, airport: &str) -> bool {
        self.origin == airport || self.destination == airport
    }

    pub fn has_cabin(&self, cabin: CabinClass) -> bool {
        self.cabins.iter().any(|c| c.cabin == cabin)
    }

    /// Total unserved passengers across cabins
    pub fn unserved(&self) -> u32 {
        self.cabins.iter().map(|c| c.penalty).sum()
    }
}

/// Flight catalog filter
///
/// # Example
/// ```
/// use kit_simulator_core_rs::models::{CabinClass, FlightFilter};
///
/// let filter = FlightFilter::default()
///     .with_airport("HUB1")
///     .with_cabin(CabinClass::Y)
///     .with_distance(0, 1000);
/// assert!(!filter.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airport: Option<String>,
    /// Inclusive distance range (km)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<(u32, u32)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cabin: Option<CabinClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<FlightStatus>,
}

impl FlightFilter {
    pub fn with_airport(mut self, airport: impl Into<String>) -> Self {
        self.airport = Some(airport.into());
        self
    }

    pub fn with_distance(mut self, min: u32, max: u32) -> Self {
        self.distance = Some((min, max));
        self
    }

    pub fn with_cabin(mut self, cabin: CabinClass) -> Self {
        self.cabin = Some(cabin);
        self
    }

    pub fn with_outcome(mut self, outcome: FlightStatus) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.airport.is_none()
            && self.distance.is_none()
            && self.cabin.is_none()
            && self.outcome.is_none()
    }

    pub fn matches(&self, flight: &FlightRow) -> bool {
        let airport_pass = self.airport.as_deref().map_or(true, |a| flight.serves(a));
        let cabin_pass = self.cabin.map_or(true, |c| flight.has_cabin(c));
        let distance_pass = self
            .distance
            .map_or(true, |(min, max)| flight.distance >= min && flight.distance <= max);
        let outcome_pass = self.outcome.map_or(true, |o| flight.status == o);

        airport_pass && cabin_pass && distance_pass && outcome_pass
    }
}
