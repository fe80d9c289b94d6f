//! Minimum spanning forest and its split into driver schedules.

use crate::config::ScheduleRetention;
use crate::graph::AffinityGraph;
use crate::load::LoadId;
use crate::solution::DriverSchedule;
use log::debug;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::VecDeque;

/// Union-find over `0..n` with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Create `n` singleton sets.
    pub fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `x`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Point every node on the path straight at the root
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merge the sets of `a` and `b`. Returns false if they were already one set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }

        true
    }
}

/// Minimum spanning forest of an affinity graph.
///
/// Holds every node of the source graph, at the same indices, so loads left
/// without forest edges still show up as their own component.
#[derive(Debug, Clone)]
pub struct SpanningForest {
    forest: UnGraph<LoadId, f64>,
    weight: f64,
}

impl SpanningForest {
    pub fn node_count(&self) -> usize {
        self.forest.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.forest.edge_count()
    }

    /// Total weight of the forest edges.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Forest edges in the order Kruskal accepted them.
    pub fn edges(&self) -> impl Iterator<Item = (&LoadId, &LoadId, f64)> {
        self.forest.edge_references().map(move |edge| {
            (
                &self.forest[edge.source()],
                &self.forest[edge.target()],
                *edge.weight(),
            )
        })
    }

    /// Connected components, isolated nodes included.
    ///
    /// Components come in order of their lowest node index and list their
    /// loads in node index order, which is load table order.
    pub fn components(&self) -> Vec<Vec<LoadId>> {
        connected_components(&self.forest)
            .into_iter()
            .map(|nodes| nodes.into_iter().map(|n| self.forest[n].clone()).collect())
            .collect()
    }

    /// Turn the components into driver schedules.
    pub fn schedules(&self, retention: ScheduleRetention) -> Vec<DriverSchedule> {
        let mut components = self.components();

        if retention == ScheduleRetention::LastComponentOnly && components.len() > 1 {
            debug!("keeping only the last of {} components", components.len());
            if let Some(last) = components.pop() {
                components = vec![last];
            }
        }

        components.into_iter().map(DriverSchedule::new).collect()
    }
}

/// Kruskal's algorithm over the affinity graph.
///
/// Edges are sorted by weight with a stable sort, so equal weights keep the
/// graph's enumeration order. Edges heavier than `max_edge_weight` are skipped.
pub fn spanning_forest(graph: &AffinityGraph, max_edge_weight: Option<f64>) -> SpanningForest {
    let inner = graph.inner();
    let n = inner.node_count();

    let mut forest = UnGraph::with_capacity(n, n.saturating_sub(1));
    for node in inner.node_indices() {
        forest.add_node(inner[node].clone());
    }

    let mut edges: Vec<_> = inner
        .edge_references()
        .filter(|edge| max_edge_weight.map_or(true, |max| *edge.weight() <= max))
        .collect();
    edges.sort_by(|a, b| a.weight().total_cmp(b.weight()));

    let mut sets = DisjointSet::new(n);
    let mut weight = 0.0;

    for edge in edges {
        if forest.edge_count() + 1 >= n {
            break;
        }
        if sets.union(edge.source().index(), edge.target().index()) {
            forest.add_edge(edge.source(), edge.target(), *edge.weight());
            weight += *edge.weight();
        }
    }

    debug!(
        "spanning forest: {} edges, weight {:.2}",
        forest.edge_count(),
        weight
    );

    SpanningForest { forest, weight }
}

/// Connected components of an undirected graph by breadth-first search.
///
/// Each component is sorted by node index.
pub fn connected_components<N, E>(graph: &UnGraph<N, E>) -> Vec<Vec<NodeIndex>> {
    let mut visited = vec![false; graph.node_count()];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for start in graph.node_indices() {
        if visited[start.index()] {
            continue;
        }

        visited[start.index()] = true;
        queue.push_back(start);
        let mut component = Vec::new();

        while let Some(node) = queue.pop_front() {
            component.push(node);
            for neighbor in graph.neighbors(node) {
                if !visited[neighbor.index()] {
                    visited[neighbor.index()] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        component.sort();
        components.push(component);
    }

    components
}

/// Split the affinity graph into driver schedules.
pub fn partition(graph: &AffinityGraph, retention: ScheduleRetention) -> Vec<DriverSchedule> {
    partition_with_limit(graph, retention, None)
}

/// Like [`partition`], leaving edges heavier than `max_edge_weight` out of the forest.
pub fn partition_with_limit(
    graph: &AffinityGraph,
    retention: ScheduleRetention,
    max_edge_weight: Option<f64>,
) -> Vec<DriverSchedule> {
    spanning_forest(graph, max_edge_weight).schedules(retention)
}
