//! Unit tests for the per-load distance maps.

use mst_vrp::distance::{build_leg_distances, build_origin_distances, DistanceIndex};
use mst_vrp::load::{parse_loads, LoadId, LoadTable};

/// Creates a small table with known distances.
fn create_test_table() -> LoadTable {
    parse_loads([
        "L1 (0,0) (3,4)",     // leg 5, origin 0
        "L2 (10,10) (10,14)", // leg 4, origin sqrt(200)
        "L3 (-6,8) (-6,8)",   // leg 0, origin 10
    ])
}

#[test]
fn test_leg_distances() {
    let legs = build_leg_distances(&create_test_table());

    assert_eq!(legs.len(), 3);
    assert!((legs[&LoadId::new("L1")] - 5.0).abs() < 1e-9);
    assert!((legs[&LoadId::new("L2")] - 4.0).abs() < 1e-9);
    assert_eq!(legs[&LoadId::new("L3")], 0.0);
}

#[test]
fn test_origin_distances() {
    let origins = build_origin_distances(&create_test_table());

    assert_eq!(origins.len(), 3);
    assert_eq!(origins[&LoadId::new("L1")], 0.0);
    assert!((origins[&LoadId::new("L2")] - 200f64.sqrt()).abs() < 1e-9);
    assert!((origins[&LoadId::new("L3")] - 10.0).abs() < 1e-9);
}

#[test]
fn test_index_holds_both_maps() {
    let table = create_test_table();
    let index = DistanceIndex::new(&table);

    assert_eq!(index.len(), table.len());
    assert_eq!(index.origin.len(), table.len());
    assert_eq!(index.leg_distance(&LoadId::new("L1")), Some(5.0));
    assert_eq!(index.origin_distance(&LoadId::new("L3")), Some(10.0));
    assert_eq!(index.leg_distance(&LoadId::new("missing")), None);
}

#[test]
fn test_empty_table() {
    let index = DistanceIndex::new(&LoadTable::new());
    assert!(index.is_empty());
    assert!(index.origin.is_empty());
}
