//! Built-in synthetic catalog
//!
//! Three scenarios over a small hub-and-spoke network: HUB1 feeding seven
//! regional outstations.

use super::{ReferenceDataset, ScenarioFigures};
use crate::models::{
    Airport, AirportType, CabinClass, ClassMap, CostAdjustment, CostPoint, FlightCabin,
    FlightRow, FlightStatus, Kpi, Network, NetworkEdge, NetworkNode, PenaltySlice, RiskLevel,
    Scenario, SimulationResult, StrategySummary,
};
use crate::policy::PolicyParams;
use std::collections::BTreeMap;

const ECONOMY_COLOR: &str = "#38bdf8";
const PREMIUM_ECONOMY_COLOR: &str = "#22c55e";
const BUSINESS_COLOR: &str = "#f97316";
const FIRST_COLOR: &str = "#a855f7";
const OTHER_COLOR: &str = "#eab308";

pub(super) fn dataset() -> ReferenceDataset {
    let default_figures = ScenarioFigures {
        cost_adjustment: CostAdjustment::default(),
        penalty_breakdown: breakdown([42325, 3343, 2749, 1565, 620]),
        kpis: vec![
            Kpi::cost("Total Cost", 438_917_636.0, 0.0),
            Kpi::cost("Operational Cost", 438_167_906.0, 0.0),
            Kpi::cost("Penalties", 749_730.0, 0.0),
            Kpi::cost("Avg Cost / Flight", 60_233.0, 0.0),
        ],
        highlight: "Penalties spike on long-haul economy; feeders lean on HUB1 buffers."
            .to_string(),
        strategy: summary(
            "Baseline",
            "Greedy allocation without cost sensitivity; relies on proximity.",
            &["Neutral bias", "Distance only", "No penalty shaping"],
            &[
                "Allocate kits to earliest flights first",
                "No class-level prioritization",
                "Minimal validation on negative inventory",
            ],
        ),
    };

    let mut figures = BTreeMap::new();
    figures.insert(
        "costAware".to_string(),
        ScenarioFigures {
            cost_adjustment: CostAdjustment {
                operational: 0.98,
                penalty: 0.82,
            },
            penalty_breakdown: breakdown([36200, 3200, 2400, 1300, 540]),
            kpis: vec![
                Kpi::cost("Total Cost", 418_100_000.0, -4.8),
                Kpi::cost("Operational Cost", 432_000_000.0, -1.4),
                Kpi::cost("Penalties", 610_000.0, -18.6),
                Kpi::cost("Avg Cost / Flight", 57_375.0, -4.7),
            ],
            highlight: "Premium cabins protected; penalties trimmed with modest operational shift."
                .to_string(),
            strategy: summary(
                "Cost-Aware Heuristic",
                "Balances marginal penalty vs operational spend; favors premium cabins and keeps buffers at hubs.",
                &["Premium bias", "Penalty-first on long-haul", "Hub buffers"],
                &[
                    "Block Economy if penalty < cost * 0.75 on >3200km",
                    "Push FC/Business to 95% coverage before others",
                    "Cap outbound stock at 90% to protect hub buffers",
                ],
            ),
        },
    );
    figures.insert(
        "distance".to_string(),
        ScenarioFigures {
            cost_adjustment: CostAdjustment {
                operational: 0.97,
                penalty: 0.76,
            },
            penalty_breakdown: breakdown([31000, 2900, 2100, 1200, 520]),
            kpis: vec![
                Kpi::cost("Total Cost", 409_500_000.0, -6.7),
                Kpi::cost("Operational Cost", 430_000_000.0, -1.9),
                Kpi::cost("Penalties", 520_000.0, -30.7),
                Kpi::cost("Avg Cost / Flight", 56_200.0, -6.7),
            ],
            highlight: "Distance gating slashes penalties; watch lean outstations like ZDQP."
                .to_string(),
            strategy: summary(
                "Distance-Averse FC-Priority",
                "Reduces long-haul kit movement; aggressive FC/Business priority with distance-aware throttling.",
                &["FC hard-priority", "Distance gating", "Penalty smoothing"],
                &[
                    "Route FC/Business first on all flights",
                    "Throttle Economy on >2800km unless penalty > cost * 1.2",
                    "Prefer rebalancing to hubs before outstations",
                ],
            ),
        },
    );

    ReferenceDataset {
        scenarios: scenarios(),
        baseline: SimulationResult {
            name: "Baseline".to_string(),
            total_cost: 438_917_636,
            operational: 438_167_906,
            penalties: 749_730,
            penalty_breakdown: breakdown([42325, 3343, 2749, 1565, 620]),
            insight: "Baseline keeps movements simple but absorbs large economy penalties on long-haul."
                .to_string(),
        },
        reference_current: SimulationResult {
            name: "Current".to_string(),
            total_cost: 418_100_000,
            operational: 432_000_000,
            penalties: 610_000,
            penalty_breakdown: breakdown([36200, 3200, 2400, 1300, 540]),
            insight: "Penalty-aware tuning trims unserved cabins while keeping operational spend close to baseline."
                .to_string(),
        },
        base_cost_series: base_cost_series(),
        default_figures,
        figures,
        network: network(),
        flights: flights(),
        airports: airports(),
        default_params: PolicyParams::default(),
    }
}

/// Penalty slices in display order: Y, W, J, F, other
fn breakdown([economy, premium, business, first, other]: [i64; 5]) -> Vec<PenaltySlice> {
    let unserved = |class: CabinClass, value: i64, color: &str| {
        PenaltySlice::new(format!("{} unserved", class.label()), value, Some(color))
    };

    vec![
        unserved(CabinClass::Y, economy, ECONOMY_COLOR),
        unserved(CabinClass::W, premium, PREMIUM_ECONOMY_COLOR),
        unserved(CabinClass::J, business, BUSINESS_COLOR),
        unserved(CabinClass::F, first, FIRST_COLOR),
        PenaltySlice::new("Other adjustments", other, Some(OTHER_COLOR)),
    ]
}

fn summary(title: &str, description: &str, chips: &[&str], rules: &[&str]) -> StrategySummary {
    StrategySummary {
        title: title.to_string(),
        description: description.to_string(),
        chips: chips.iter().map(|s| s.to_string()).collect(),
        rules: rules.iter().map(|s| s.to_string()).collect(),
    }
}

fn scenarios() -> Vec<Scenario> {
    let scenario = |id: &str, name: &str, description: &str, tag: &str, mode: &str, updated: &str| {
        Scenario {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            tag: Some(tag.to_string()),
            mode: mode.to_string(),
            updated_at: updated.to_string(),
        }
    };

    vec![
        scenario(
            "baseline",
            "Baseline",
            "Even allocation policy without cost awareness.",
            "Reference",
            "Deterministic",
            "12 min ago",
        ),
        scenario(
            "costAware",
            "Cost-Aware Heuristic",
            "Penalty-aware thresholding with premium class bias.",
            "Live",
            "Heuristic",
            "3 min ago",
        ),
        scenario(
            "distance",
            "Distance-Averse FC-Priority",
            "Avoids long-haul economy moves while protecting FC/Business.",
            "Aggressive",
            "Exploratory",
            "just now",
        ),
    ]
}

fn base_cost_series() -> Vec<CostPoint> {
    [
        (16253, 27, 16280),
        (18336, 24, 18360),
        (13811, 23, 13834),
        (9351, 11, 9361),
        (13802, 22, 13824),
        (14138, 22, 14160),
        (13573, 18, 13592),
        (17852, 38, 17889),
        (18321, 23, 18344),
        (13762, 25, 13787),
        (9341, 17, 9357),
        (13758, 23, 13781),
    ]
    .into_iter()
    .zip(1..)
    .map(|((operational, penalty, total), round)| CostPoint {
        round,
        operational,
        penalty,
        total,
    })
    .collect()
}

/// Code, name, region, imbalance and map position of each network node
const NODES: [(&str, &str, &str, i64, (f64, f64)); 8] = [
    ("HUB1", "Main Hub Airport", "Core", -1200, (0.1, 0.2)),
    ("ZHVK", "Airport ZHVK", "Regional", -90, (0.18, 0.2)),
    ("WPUE", "Airport WPUE", "Regional", -70, (0.26, 0.2)),
    ("UIVJ", "Airport UIVJ", "Regional", -40, (0.34, 0.2)),
    ("EEUQ", "Airport EEUQ", "Regional", -60, (0.1, 0.35)),
    ("ZDQP", "Airport ZDQP", "Regional", -120, (0.18, 0.35)),
    ("KLZQ", "Airport KLZQ", "Regional", -80, (0.26, 0.35)),
    ("INFQ", "Airport INFQ", "Regional", -50, (0.34, 0.35)),
];

/// Per-class stock and capacity of each network node, in `NODES` order
const NODE_INVENTORY: [([i64; 4], [i64; 4]); 8] = [
    ([1659, 5184, 2668, 23651], [18109, 18109, 9818, 95075]),
    ([158, 105, 135, 304], [445, 445, 290, 803]),
    ([136, 189, 127, 581], [496, 496, 319, 1408]),
    ([144, 110, 105, 412], [428, 428, 293, 975]),
    ([150, 144, 144, 168], [264, 264, 397, 632]),
    ([119, 100, 99, 187], [525, 525, 305, 825]),
    ([122, 104, 92, 121], [399, 399, 363, 544]),
    ([138, 182, 104, 298], [424, 424, 317, 1762]),
];

fn network() -> Network {
    let nodes = NODES
        .iter()
        .zip(NODE_INVENTORY)
        .map(|(&(code, name, region, imbalance, (x, y)), (stock, capacity))| NetworkNode {
            code: code.to_string(),
            name: name.to_string(),
            region: region.to_string(),
            stock: stock.iter().sum(),
            capacity: capacity.iter().sum(),
            imbalance,
            x,
            y,
            risk: RiskLevel::Low,
        })
        .collect();
    let edge = |from: &str, to: &str, volume: i64| NetworkEdge {
        from: from.to_string(),
        to: to.to_string(),
        volume,
    };

    Network {
        nodes,
        edges: vec![
            edge("HUB1", "ZHVK", 64),
            edge("HUB1", "WPUE", 42),
            edge("HUB1", "UIVJ", 38),
            edge("HUB1", "EEUQ", 26),
            edge("ZHVK", "HUB1", 58),
            edge("WPUE", "HUB1", 40),
            edge("UIVJ", "HUB1", 32),
            edge("ZDQP", "HUB1", 24),
        ],
    }
}

const GAP_EXPLANATION: &str = "Gap between planned and loaded kits reflected as penalty surrogate.";
const SERVED_EXPLANATION: &str = "All cabins served";

/// (pax, loaded, penalty) per cabin in F, J, W, Y order
type CabinLoads = [(u32, u32, u32); 4];

/// Id, origin, destination, departure and arrival of a scheduled leg
type Leg = (&'static str, &'static str, &'static str, &'static str, &'static str);

const OUTBOUND: Leg = ("AB1000", "HUB1", "ZHVK", "15:00", "16:00");
const INBOUND: Leg = ("AB1001", "ZHVK", "HUB1", "21:00", "01:00");

fn flights() -> Vec<FlightRow> {
    vec![
        flight(OUTBOUND, 736, (16192, 300), [(20, 20, 0), (1, 1, 0), (28, 28, 0), (163, 143, 20)]),
        flight(OUTBOUND, 736, (16192, 0), [(6, 6, 0), (31, 32, 0), (14, 15, 0), (265, 312, 0)]),
        flight(OUTBOUND, 736, (16192, 225), [(13, 13, 0), (63, 62, 1), (17, 15, 2), (109, 97, 12)]),
        flight(OUTBOUND, 758, (16676, 75), [(1, 1, 0), (37, 38, 0), (14, 15, 0), (116, 111, 5)]),
        flight(OUTBOUND, 736, (16192, 165), [(6, 6, 0), (21, 21, 0), (6, 6, 0), (77, 66, 11)]),
        flight(INBOUND, 2946, (64812, 90), [(6, 6, 0), (54, 55, 0), (14, 14, 0), (52, 46, 6)]),
        flight(INBOUND, 2946, (64812, 0), [(0, 0, 0), (9, 9, 0), (3, 3, 0), (127, 150, 0)]),
        flight(INBOUND, 3152, (69344, 0), [(6, 6, 0), (45, 45, 0), (14, 14, 0), (164, 172, 0)]),
    ]
}

/// Build a flight row; costs are (operational, penalty)
fn flight(
    (id, origin, destination, departure, arrival): Leg,
    distance: u32,
    (operational_cost, penalty_cost): (i64, i64),
    loads: CabinLoads,
) -> FlightRow {
    let cabins: Vec<FlightCabin> = CabinClass::ALL
        .into_iter()
        .zip(loads)
        .map(|(cabin, (pax, loaded, penalty))| FlightCabin {
            cabin,
            pax,
            loaded,
            penalty,
        })
        .collect();
    let served = cabins.iter().all(|c| c.penalty == 0);

    FlightRow {
        id: id.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        distance,
        aircraft: "A/C".to_string(),
        departure: departure.to_string(),
        arrival: arrival.to_string(),
        operational_cost,
        penalty_cost,
        cabins,
        status: if served { FlightStatus::Ok } else { FlightStatus::Warning },
        explanation: (if served { SERVED_EXPLANATION } else { GAP_EXPLANATION }).to_string(),
    }
}

fn airports() -> Vec<Airport> {
    let airport = |code: &str,
                   name: &str,
                   airport_type: AirportType,
                   capacity: [i64; 4],
                   stock: [i64; 4],
                   trend: &[i64],
                   inbound: &[i64],
                   outbound: &[i64],
                   tags: &[&str]| {
        let [cf, cj, cw, cy] = capacity;
        let [sf, sj, sw, sy] = stock;
        Airport {
            code: code.to_string(),
            name: name.to_string(),
            airport_type,
            capacity: ClassMap::new(cf, cj, cw, cy),
            stock: ClassMap::new(sf, sj, sw, sy),
            trend: trend.to_vec(),
            inbound: inbound.to_vec(),
            outbound: outbound.to_vec(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    };

    vec![
        airport(
            "HUB1",
            "Main Hub Airport",
            AirportType::Hub,
            [18109, 18109, 9818, 95075],
            [1659, 5184, 2668, 23651],
            &[5200, 5400, 5600, 6000, 6200, 6400, 6800, 7100, 7300, 7600],
            &[420, 380, 450, 460, 500, 520],
            &[360, 340, 410, 390, 430, 440],
            &["Primary hub", "Low risk"],
        ),
        airport(
            "ZHVK",
            "Airport ZHVK",
            AirportType::Outstation,
            [445, 445, 290, 803],
            [158, 105, 135, 304],
            &[220, 240, 260, 255, 270, 280, 290, 300, 304, 310],
            &[38, 32, 28, 30, 34, 36],
            &[36, 34, 32, 30, 28, 26],
            &["Feeder", "Economy-heavy"],
        ),
        airport(
            "WPUE",
            "Airport WPUE",
            AirportType::Outstation,
            [496, 496, 319, 1408],
            [136, 189, 127, 581],
            &[260, 270, 285, 300, 310, 320, 340, 360, 370, 390],
            &[36, 32, 40, 38, 34, 42],
            &[30, 36, 34, 32, 30, 28],
            &["Steady", "Mixed cabins"],
        ),
        airport(
            "UIVJ",
            "Airport UIVJ",
            AirportType::Outstation,
            [428, 428, 293, 975],
            [144, 110, 105, 412],
            &[230, 240, 250, 255, 262, 270, 280, 292, 300, 310],
            &[28, 30, 32, 26, 30, 34],
            &[24, 26, 28, 30, 32, 28],
            &["Stable", "Premium buffer"],
        ),
        airport(
            "ZDQP",
            "Airport ZDQP",
            AirportType::Outstation,
            [525, 525, 305, 825],
            [119, 100, 99, 187],
            &[180, 182, 184, 186, 188, 190, 192, 194, 196, 198],
            &[20, 22, 24, 26, 20, 18],
            &[16, 18, 20, 20, 18, 16],
            &["Lean", "Watch stock"],
        ),
    ]
}
