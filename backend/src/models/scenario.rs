//! Scenario catalog and dashboard payload types

use serde::{Deserialize, Serialize};

/// Named, predefined operating mode (baseline, cost-aware, distance-averse)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub mode: String,
    pub updated_at: String,
}

/// Headline figure shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: f64,
    /// Change vs. baseline, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper: Option<String>,
}

impl Kpi {
    /// KPI measured in cost units
    pub fn cost(label: &str, value: f64, delta: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
            delta: Some(delta),
            unit: Some("cost".to_string()),
            helper: None,
        }
    }
}

/// One round of the cost series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostPoint {
    pub round: u32,
    pub operational: i64,
    pub penalty: i64,
    pub total: i64,
}

/// Per-scenario multipliers applied to the base cost series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostAdjustment {
    pub operational: f64,
    pub penalty: f64,
}

impl Default for CostAdjustment {
    fn default() -> Self {
        Self {
            operational: 1.0,
            penalty: 1.0,
        }
    }
}

/// Plain-language description of a scenario's allocation strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySummary {
    pub title: String,
    pub description: String,
    pub chips: Vec<String>,
    pub rules: Vec<String>,
}

/// Stock risk of a network node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Airport as drawn on the network map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub code: String,
    pub name: String,
    pub region: String,
    pub stock: i64,
    pub capacity: i64,
    pub imbalance: i64,
    /// Normalized map coordinates
    pub x: f64,
    pub y: f64,
    pub risk: RiskLevel,
}

/// Kit flow between two airports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub from: String,
    pub to: String,
    pub volume: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Network {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}

/// Everything the dashboard page shows for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub kpis: Vec<Kpi>,
    pub cost_series: Vec<CostPoint>,
    pub penalty_breakdown: Vec<super::PenaltySlice>,
    pub network: Network,
    pub strategy: StrategySummary,
    pub highlight: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_wire_names() {
        let scenario = Scenario {
            id: "baseline".to_string(),
            name: "Baseline".to_string(),
            description: "Even allocation".to_string(),
            tag: None,
            mode: "Deterministic".to_string(),
            updated_at: "12 min ago".to_string(),
        };
        let json = serde_json::to_value(&scenario).unwrap();
        assert_eq!(json["updatedAt"], "12 min ago");
        assert!(json.get("tag").is_none());
    }

    #[test]
    fn test_risk_level_lowercase() {
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"medium\"");
    }

    #[test]
    fn test_cost_adjustment_default_is_identity() {
        let adj = CostAdjustment::default();
        assert_eq!(adj.operational, 1.0);
        assert_eq!(adj.penalty, 1.0);
    }
}
