#![allow(dead_code)]

use std::collections::HashMap;
use trailgraph::{Graph, GraphKind, Vertex};

/// Road segments between 20 cities (u, v, km)
pub const ROADS: [(Vertex, Vertex, f64); 23] = [
    (13, 20, 71.0),
    (20, 1, 75.0),
    (13, 16, 151.0),
    (1, 16, 140.0),
    (1, 17, 118.0),
    (17, 10, 111.0),
    (10, 11, 70.0),
    (11, 4, 75.0),
    (4, 3, 120.0),
    (16, 15, 80.0),
    (15, 3, 146.0),
    (16, 6, 99.0),
    (15, 14, 97.0),
    (3, 14, 138.0),
    (6, 2, 211.0),
    (14, 2, 101.0),
    (2, 7, 90.0),
    (2, 18, 85.0),
    (18, 19, 142.0),
    (19, 9, 92.0),
    (9, 12, 87.0),
    (18, 8, 98.0),
    (8, 5, 161.0),
];

/// Straight-line distance from each city (1-based) to city 2
pub const STRAIGHT_LINE_TO_2: [f64; 20] = [
    366.0, 0.0, 160.0, 242.0, 161.0, 176.0, 77.0, 151.0, 226.0, 244.0, 241.0, 234.0, 380.0,
    100.0, 193.0, 253.0, 329.0, 80.0, 199.0, 374.0,
];

pub struct RoadMap {
    pub graph: Graph,
    pub km: HashMap<(Vertex, Vertex), f64>,
}

impl RoadMap {
    pub fn build(kind: GraphKind) -> Self {
        let mut graph = Graph::new(kind);
        for _ in 0..STRAIGHT_LINE_TO_2.len() {
            graph.add_vertex();
        }
        let mut km = HashMap::new();
        for &(u, v, d) in &ROADS {
            graph.add_edge(u, v).unwrap();
            km.insert((u, v), d);
            if !kind.is_directed() {
                km.insert((v, u), d);
            }
        }
        Self { graph, km }
    }

    pub fn distance(&self, u: Vertex, v: Vertex) -> f64 {
        self.km.get(&(u, v)).copied().unwrap_or(f64::INFINITY)
    }
}

pub fn straight_line_to_2(v: Vertex) -> f64 {
    STRAIGHT_LINE_TO_2[v - 1]
}
