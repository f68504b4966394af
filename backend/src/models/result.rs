//! Simulation result types
//!
//! A `SimulationResult` is one named outcome (cost, penalties, breakdown).
//! A `ComparisonResult` pairs the fixed baseline with the outcome computed
//! from a policy parameter set.
//!
//! CRITICAL: All cost and penalty figures are i64 (whole units, rounded)

use serde::{Deserialize, Serialize};

/// One category of penalty points (e.g. "Economy unserved")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltySlice {
    /// Category label
    #[serde(rename = "type")]
    pub category: String,

    /// Penalty points attributed to this category
    pub value: i64,

    /// Optional display color (hex)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl PenaltySlice {
    pub fn new(category: impl Into<String>, value: i64, color: Option<&str>) -> Self {
        Self {
            category: category.into(),
            value,
            color: color.map(str::to_string),
        }
    }
}

/// Named simulation outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub name: String,
    pub total_cost: i64,
    pub operational: i64,
    pub penalties: i64,
    pub penalty_breakdown: Vec<PenaltySlice>,
    pub insight: String,
}

impl SimulationResult {
    /// Sum of the breakdown values
    ///
    /// The breakdown is a display split and is not required to add up to
    /// `penalties`.
    pub fn breakdown_total(&self) -> i64 {
        self.penalty_breakdown.iter().map(|slice| slice.value).sum()
    }

    /// Category labels in breakdown order
    pub fn breakdown_categories(&self) -> Vec<&str> {
        self.penalty_breakdown
            .iter()
            .map(|slice| slice.category.as_str())
            .collect()
    }
}

/// Change of one penalty category from baseline to current
///
/// Positive values are an improvement (fewer penalty points).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyDelta {
    #[serde(rename = "type")]
    pub category: String,
    pub delta: i64,
}

/// Baseline vs. current outcome, produced fresh on every simulation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub baseline: SimulationResult,
    pub current: SimulationResult,
}

impl ComparisonResult {
    /// Penalty change of `current` relative to `baseline`, in percent
    ///
    /// Returns `None` when the baseline carries no penalties.
    pub fn penalty_delta_pct(&self) -> Option<f64> {
        pct_change(self.baseline.penalties, self.current.penalties)
    }

    /// Total cost change of `current` relative to `baseline`, in percent
    pub fn total_cost_delta_pct(&self) -> Option<f64> {
        pct_change(self.baseline.total_cost, self.current.total_cost)
    }

    /// Operational cost change of `current` relative to `baseline`, in percent
    pub fn operational_delta_pct(&self) -> Option<f64> {
        pct_change(self.baseline.operational, self.current.operational)
    }

    /// Per-category penalty change, in baseline breakdown order
    ///
    /// A category missing from the current breakdown counts as unchanged.
    pub fn penalty_deltas(&self) -> Vec<PenaltyDelta> {
        self.baseline
            .penalty_breakdown
            .iter()
            .map(|base| {
                let current = self
                    .current
                    .penalty_breakdown
                    .iter()
                    .find(|slice| slice.category == base.category)
                    .map_or(base.value, |slice| slice.value);
                PenaltyDelta {
                    category: base.category.clone(),
                    delta: base.value - current,
                }
            })
            .collect()
    }
}

fn pct_change(from: i64, to: i64) -> Option<f64> {
    if from == 0 {
        return None;
    }
    Some((to - from) as f64 / from as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, total: i64, penalties: i64) -> SimulationResult {
        SimulationResult {
            name: name.to_string(),
            total_cost: total,
            operational: total - penalties,
            penalties,
            penalty_breakdown: vec![
                PenaltySlice::new("Economy unserved", penalties / 2, Some("#38bdf8")),
                PenaltySlice::new("Other adjustments", penalties / 2, None),
            ],
            insight: String::new(),
        }
    }

    #[test]
    fn test_penalty_slice_wire_shape() {
        let slice = PenaltySlice::new("First unserved", 1565, Some("#a855f7"));
        let json = serde_json::to_value(&slice).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "First unserved", "value": 1565, "color": "#a855f7"})
        );

        let bare: PenaltySlice = serde_json::from_str(r#"{"type": "X", "value": 3}"#).unwrap();
        assert_eq!(bare.color, None);
        assert!(!serde_json::to_string(&bare).unwrap().contains("color"));
    }

    #[test]
    fn test_simulation_result_uses_camel_case() {
        let json = serde_json::to_value(result("Baseline", 1000, 200)).unwrap();
        assert!(json.get("totalCost").is_some());
        assert!(json.get("penaltyBreakdown").is_some());
    }

    #[test]
    fn test_deltas() {
        let comparison = ComparisonResult {
            baseline: result("Baseline", 1000, 200),
            current: result("Tuned", 900, 150),
        };
        assert_eq!(comparison.penalty_delta_pct(), Some(-25.0));
        assert_eq!(comparison.total_cost_delta_pct(), Some(-10.0));
    }

    #[test]
    fn test_operational_delta() {
        let comparison = ComparisonResult {
            baseline: result("Baseline", 1000, 200),
            current: result("Tuned", 1000, 100),
        };
        // 800 -> 900
        assert_eq!(comparison.operational_delta_pct(), Some(12.5));
    }

    #[test]
    fn test_penalty_deltas_fall_back_to_unchanged() {
        let mut current = result("Tuned", 900, 150);
        current.penalty_breakdown.truncate(1);
        let comparison = ComparisonResult {
            baseline: result("Baseline", 1000, 200),
            current,
        };

        assert_eq!(
            comparison.penalty_deltas(),
            vec![
                PenaltyDelta {
                    category: "Economy unserved".to_string(),
                    delta: 25,
                },
                PenaltyDelta {
                    category: "Other adjustments".to_string(),
                    delta: 0,
                },
            ]
        );
    }

    #[test]
    fn test_delta_with_zero_baseline() {
        let comparison = ComparisonResult {
            baseline: result("Baseline", 0, 0),
            current: result("Tuned", 10, 0),
        };
        assert_eq!(comparison.penalty_delta_pct(), None);
        assert_eq!(comparison.total_cost_delta_pct(), None);
    }
}
