//! Affinity graph over loads.
//!
//! The weight of the edge between two loads is the sum of their individual
//! pickup to dropoff distances. It is not the distance between the loads.

use crate::distance::DistanceMap;
use crate::load::{LoadId, LoadTable};
use itertools::Itertools;
use log::{debug, warn};
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Undirected weighted graph whose nodes are load ids.
#[derive(Debug, Clone, Default)]
pub struct AffinityGraph {
    graph: UnGraph<LoadId, f64>,
    nodes: HashMap<LoadId, NodeIndex>,
}

impl AffinityGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        AffinityGraph::default()
    }

    /// Add a node for a load. Adding an existing id returns its node.
    pub fn add_load(&mut self, id: LoadId) -> NodeIndex {
        if let Some(&node) = self.nodes.get(&id) {
            return node;
        }
        let node = self.graph.add_node(id.clone());
        self.nodes.insert(id, node);
        node
    }

    /// Add an edge between two known loads. Self-loops and unknown ids are rejected.
    pub fn add_edge(&mut self, a: &LoadId, b: &LoadId, weight: f64) -> Option<EdgeIndex> {
        if a == b {
            return None;
        }
        let (&na, &nb) = (self.nodes.get(a)?, self.nodes.get(b)?);
        Some(self.graph.add_edge(na, nb, weight))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn node(&self, id: &LoadId) -> Option<NodeIndex> {
        self.nodes.get(id).copied()
    }

    /// The load id stored at a node.
    pub fn load_id(&self, node: NodeIndex) -> &LoadId {
        &self.graph[node]
    }

    /// Weight of the edge between two loads, if there is one.
    pub fn weight(&self, a: &LoadId, b: &LoadId) -> Option<f64> {
        let edge = self.graph.find_edge(self.node(a)?, self.node(b)?)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Edges in insertion order as `(a, b, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (&LoadId, &LoadId, f64)> {
        self.graph.edge_references().map(move |edge| {
            (
                &self.graph[edge.source()],
                &self.graph[edge.target()],
                *edge.weight(),
            )
        })
    }

    /// The underlying petgraph graph.
    pub fn inner(&self) -> &UnGraph<LoadId, f64> {
        &self.graph
    }
}

/// Build the complete affinity graph over every load in the table.
///
/// Pairs are enumerated in table order, `(i, j)` with `i < j`, so the edge
/// sequence is identical across runs for the same input.
pub fn build_graph(table: &LoadTable, leg_distances: &DistanceMap) -> AffinityGraph {
    let mut graph = AffinityGraph::new();

    let ids: Vec<&LoadId> = table.ids().collect();
    let legs: Vec<f64> = ids
        .iter()
        .map(|&id| match leg_distances.get(id) {
            Some(&leg) => leg,
            None => {
                warn!("No leg distance for load {}, weighting it as 0", id);
                0.0
            }
        })
        .collect();

    for &id in &ids {
        graph.add_load(id.clone());
    }

    for (i, j) in (0..ids.len()).tuple_combinations() {
        graph.add_edge(ids[i], ids[j], legs[i] + legs[j]);
    }

    debug!(
        "affinity graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    graph
}
