//! Unit tests for the affinity graph builder.

use mst_vrp::distance::build_leg_distances;
use mst_vrp::graph::{build_graph, AffinityGraph};
use mst_vrp::load::{parse_loads, LoadId, LoadTable};

/// Creates a table of `n` loads on a line, load `i` with leg length `i + 1`.
fn create_test_table(n: usize) -> LoadTable {
    let lines: Vec<String> = (0..n)
        .map(|i| format!("{} ({},0) ({},0)", i, i * 10, i * 10 + i + 1))
        .collect();
    parse_loads(lines)
}

#[test]
fn test_empty_graph() {
    let table = LoadTable::new();
    let graph = build_graph(&table, &build_leg_distances(&table));

    assert!(graph.is_empty());
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_single_load_has_no_edges() {
    let table = parse_loads(["L1 (0,0) (3,4)"]);
    let graph = build_graph(&table, &build_leg_distances(&table));

    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_graph_is_complete() {
    for n in 1..8 {
        let table = create_test_table(n);
        let graph = build_graph(&table, &build_leg_distances(&table));

        assert_eq!(graph.node_count(), n);
        assert_eq!(graph.edge_count(), n * (n - 1) / 2);
    }
}

#[test]
fn test_edge_weight_is_sum_of_legs() {
    let table = create_test_table(5);
    let legs = build_leg_distances(&table);
    let graph = build_graph(&table, &legs);

    for (a, b, weight) in graph.edges() {
        assert_ne!(a, b);
        assert!(weight >= 0.0);
        assert!((weight - (legs[a] + legs[b])).abs() < 1e-9);
    }
}

#[test]
fn test_two_loads_scenario() {
    let table = parse_loads(["L1 (0,0) (3,4)", "L2 (10,10) (10,14)"]);
    let graph = build_graph(&table, &build_leg_distances(&table));

    let l1 = LoadId::new("L1");
    let l2 = LoadId::new("L2");
    assert_eq!(graph.edge_count(), 1);
    assert!((graph.weight(&l1, &l2).unwrap() - 9.0).abs() < 1e-9);
    assert_eq!(graph.weight(&l1, &l2), graph.weight(&l2, &l1));
}

#[test]
fn test_edges_follow_table_order() {
    let table = parse_loads(["c (0,0) (1,0)", "a (0,0) (1,0)", "b (0,0) (1,0)"]);
    let graph = build_graph(&table, &build_leg_distances(&table));

    let pairs: Vec<(&str, &str)> = graph
        .edges()
        .map(|(a, b, _)| (a.as_str(), b.as_str()))
        .collect();
    assert_eq!(pairs, vec![("c", "a"), ("c", "b"), ("a", "b")]);
}

#[test]
fn test_build_is_deterministic() {
    let table = create_test_table(6);
    let legs = build_leg_distances(&table);

    let first: Vec<_> = build_graph(&table, &legs)
        .edges()
        .map(|(a, b, w)| (a.clone(), b.clone(), w))
        .collect();
    let second: Vec<_> = build_graph(&table, &legs)
        .edges()
        .map(|(a, b, w)| (a.clone(), b.clone(), w))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_manual_graph_rejects_self_loops_and_unknown_loads() {
    let mut graph = AffinityGraph::new();
    let a = LoadId::new("a");
    let b = LoadId::new("b");

    let node = graph.add_load(a.clone());
    assert_eq!(graph.add_load(a.clone()), node);
    graph.add_load(b.clone());

    assert!(graph.add_edge(&a, &a, 1.0).is_none());
    assert!(graph.add_edge(&a, &LoadId::new("zzz"), 1.0).is_none());
    assert!(graph.add_edge(&a, &b, 2.0).is_some());

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.load_id(node), &a);
}

#[test]
fn test_load_without_leg_distance_weighs_zero() {
    let table = parse_loads(["L1 (0,0) (3,4)", "L2 (10,10) (10,14)", "L3 (0,0) (1,0)"]);
    let mut legs = build_leg_distances(&table);
    legs.remove(&LoadId::new("L3"));

    let graph = build_graph(&table, &legs);
    let l1 = LoadId::new("L1");
    let l2 = LoadId::new("L2");
    let l3 = LoadId::new("L3");

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert!((graph.weight(&l1, &l2).unwrap() - 9.0).abs() < 1e-9);
    assert!((graph.weight(&l1, &l3).unwrap() - 5.0).abs() < 1e-9);
    assert!((graph.weight(&l2, &l3).unwrap() - 4.0).abs() < 1e-9);
}
