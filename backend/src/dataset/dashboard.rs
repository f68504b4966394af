//! Dashboard payload assembly
//!
//! Combines the per-scenario lookups into the single payload the
//! dashboard page renders. Unknown scenario ids follow the dataset's
//! fallback policy, so the payload for an unknown id equals the payload
//! for `DEFAULT_SCENARIO`.

use super::ReferenceDataset;
use crate::models::DashboardPayload;

impl ReferenceDataset {
    pub fn get_dashboard(&self, scenario_id: &str) -> DashboardPayload {
        DashboardPayload {
            kpis: self.get_kpis(scenario_id),
            cost_series: self.get_cost_series(scenario_id),
            penalty_breakdown: self.get_penalty_breakdown(scenario_id),
            network: self.network(),
            strategy: self.get_strategy_summary(scenario_id),
            highlight: self.get_highlight(scenario_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dataset::ReferenceDataset;

    #[test]
    fn test_distance_dashboard() {
        let payload = ReferenceDataset::builtin().get_dashboard("distance");
        assert_eq!(payload.strategy.title, "Distance-Averse FC-Priority");
        assert_eq!(payload.penalty_breakdown[0].value, 31000);
        assert_eq!(payload.kpis[2].value, 520_000.0);
        assert_eq!(payload.network.nodes.len(), 8);
        assert_eq!(payload.network.edges.len(), 8);
        // 16253 * 0.97 = 15765.41, 27 * 0.76 = 20.52
        assert_eq!(payload.cost_series[0].operational, 15765);
        assert_eq!(payload.cost_series[0].penalty, 21);
    }

    #[test]
    fn test_unknown_dashboard_equals_baseline() {
        let dataset = ReferenceDataset::builtin();
        assert_eq!(dataset.get_dashboard("nonexistent"), dataset.get_dashboard("baseline"));
    }
}
