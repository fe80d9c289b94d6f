//! Per-load distances derived from the load table.

use crate::geometry::{distance, Point};
use crate::load::{LoadId, LoadTable};
use std::collections::HashMap;

/// Distance per load id.
pub type DistanceMap = HashMap<LoadId, f64>;

/// Pickup to dropoff distance for every load.
pub fn build_leg_distances(table: &LoadTable) -> DistanceMap {
    table
        .iter()
        .map(|load| (load.id.clone(), distance(load.pickup, load.dropoff)))
        .collect()
}

/// Origin to pickup distance for every load.
pub fn build_origin_distances(table: &LoadTable) -> DistanceMap {
    table
        .iter()
        .map(|load| (load.id.clone(), distance(Point::ORIGIN, load.pickup)))
        .collect()
}

/// Both distance maps for one load table. Rebuilt whenever the table changes.
#[derive(Debug, Clone, Default)]
pub struct DistanceIndex {
    /// Pickup to dropoff, the only input to the affinity graph.
    pub leg: DistanceMap,
    /// Origin to pickup, used for cost accounting only.
    pub origin: DistanceMap,
}

impl DistanceIndex {
    /// Compute both distance maps.
    pub fn new(table: &LoadTable) -> Self {
        DistanceIndex {
            leg: build_leg_distances(table),
            origin: build_origin_distances(table),
        }
    }

    pub fn leg_distance(&self, id: &LoadId) -> Option<f64> {
        self.leg.get(id).copied()
    }

    pub fn origin_distance(&self, id: &LoadId) -> Option<f64> {
        self.origin.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.leg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leg.is_empty()
    }
}
