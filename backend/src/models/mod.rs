//! Domain models for the kit allocation simulator

pub mod airport;
pub mod cabin;
pub mod flight;
pub mod result;
pub mod scenario;

// Re-exports
pub use airport::{Airport, AirportType, StockHealth};
pub use cabin::{CabinClass, ClassMap};
pub use flight::{FlightCabin, FlightFilter, FlightRow, FlightStatus};
pub use result::{ComparisonResult, PenaltyDelta, PenaltySlice, SimulationResult};
pub use scenario::{
    CostAdjustment, CostPoint, DashboardPayload, Kpi, Network, NetworkEdge, NetworkNode,
    RiskLevel, Scenario, StrategySummary,
};
