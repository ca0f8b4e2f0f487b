mod common;

use common::{straight_line_to_2, RoadMap};
use trailgraph::config::EngineConfig;
use trailgraph::graph::algos::{MapPathState, WithHeuristic};
use trailgraph::graph::ShortestPaths;
use trailgraph::{GraphKind, LabeledGraph, Vertex};

fn a_star_to_2(kind: GraphKind) {
    let map = RoadMap::build(kind);
    let road = |u: Vertex, v: Vertex| map.distance(u, v);
    let weights = WithHeuristic::new(road, straight_line_to_2);
    let mut sp = ShortestPaths::with_destination(&map.graph, 1, 2, weights).unwrap();
    sp.set_paths().unwrap();

    assert_eq!(sp.path().unwrap(), vec![1, 16, 15, 14, 2]);
    assert_eq!(sp.weight(2), 418.0);

    // The search stops at 2 before expanding past it or down the 17 branch
    assert_eq!(sp.predecessor(18), None);
    assert_eq!(sp.predecessor(10), None);
    assert!(!sp.is_settled(17));
}

#[test]
fn test_a_star_directed_road_map() {
    a_star_to_2(GraphKind::Directed);
}

#[test]
fn test_a_star_undirected_road_map() {
    a_star_to_2(GraphKind::Undirected);
}

#[test]
fn test_a_star_matches_dijkstra_weight() {
    let map = RoadMap::build(GraphKind::Undirected);

    let road = |u: Vertex, v: Vertex| map.distance(u, v);

    let mut plain = ShortestPaths::new(&map.graph, 1, road).unwrap();
    plain.set_paths().unwrap();

    let weights = WithHeuristic::new(road, straight_line_to_2);
    let mut guided = ShortestPaths::with_destination(&map.graph, 1, 2, weights).unwrap();
    guided.set_paths().unwrap();

    assert_eq!(plain.weight(2), guided.weight(2));
    assert_eq!(plain.path_to(2).unwrap(), guided.path().unwrap());
    // Without a destination every city in the connected map settles
    assert!(map.graph.vertices().all(|v| plain.is_settled(v)));
}

#[derive(Debug, Clone, Copy)]
struct Town {
    x: f64,
    y: f64,
}

fn euclid(a: Town, b: Town) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

#[test]
fn test_labeled_road_map_with_euclidean_heuristic() {
    let mut map: LabeledGraph<Town, f64> = LabeledGraph::new(GraphKind::Undirected);
    let a = map.add_vertex(Town { x: 0.0, y: 0.0 });
    let b = map.add_vertex(Town { x: 3.0, y: 0.0 });
    let c = map.add_vertex(Town { x: 3.0, y: 4.0 });
    let d = map.add_vertex(Town { x: 0.0, y: 4.0 });
    let e = map.add_vertex(Town { x: -6.0, y: 0.0 });
    for (u, v) in [(a, b), (b, c), (a, d), (d, c), (a, e)] {
        let length = euclid(*map.label(u).unwrap(), *map.label(v).unwrap());
        map.add_edge(u, v, length).unwrap();
    }
    // The direct a - c road is slower than its length suggests
    map.add_edge(a, c, 9.0).unwrap();

    let target = *map.label(c).unwrap();
    let weights = WithHeuristic::new(
        |u: Vertex, v: Vertex| map.edge_label(u, v).copied().unwrap_or(f64::INFINITY),
        |v: Vertex| map.label(v).map_or(0.0, |t| euclid(*t, target)),
    );
    let mut sp =
        ShortestPaths::with_state(&map, a, Some(c), weights, MapPathState::new()).unwrap();
    sp.set_paths().unwrap();

    assert_eq!(sp.weight(c), 7.0);
    assert_eq!(sp.path().unwrap(), vec![a, b, c]);
    assert!(!sp.is_settled(e));
}

#[test]
fn test_search_config_disables_weight_validation() {
    let config = EngineConfig::from_toml("[search]\nvalidate_weights = false\n").unwrap();
    let map = RoadMap::build(GraphKind::Directed);

    let mut sp = ShortestPaths::new(&map.graph, 1, |_: Vertex, _: Vertex| -1.0)
        .unwrap()
        .configure(&config.search);
    sp.set_paths().unwrap();
    assert!(sp.weight(16) < 0.0);
}
