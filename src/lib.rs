//! # MST-VRP
//!
//! Assigns point-to-point delivery loads to drivers.
//!
//! Every load gets a leg distance (pickup to dropoff). A complete graph is
//! built over the loads where the edge between two loads weighs the sum of
//! their leg distances. A minimum spanning forest is taken over that graph and
//! each of its connected components becomes the schedule of one driver.
//!
//! ```
//! use mst_vrp::{config::Config, load::parse_loads, solve};
//!
//! let loads = parse_loads(["1 (0,0) (3,4)", "2 (10,10) (10,14)"]);
//! let solution = solve(&loads, &Config::new());
//! assert_eq!(solution.schedules.len(), 1);
//! assert_eq!(solution.schedules[0].to_string(), "[1,2]");
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod load;
pub mod partition;
pub mod solution;
pub mod utils;

use crate::config::Config;
use crate::distance::DistanceIndex;
use crate::graph::{build_graph, AffinityGraph};
use crate::load::LoadTable;
use crate::partition::spanning_forest;
use crate::solution::Solution;

use log::info;
use std::time::{Duration, Instant};

/// Runs the pipeline over one load table and keeps every intermediate result.
pub struct Dispatcher {
    pub loads: LoadTable,
    pub config: Config,
    pub distances: DistanceIndex,
    pub graph: AffinityGraph,
    pub solution: Option<Solution>,
    pub run_time: Duration,
}

impl Dispatcher {
    /// Create a dispatcher for the given loads and configuration.
    pub fn new(loads: LoadTable, config: Config) -> Self {
        Dispatcher {
            loads,
            config,
            distances: DistanceIndex::default(),
            graph: AffinityGraph::new(),
            solution: None,
            run_time: Duration::from_secs(0),
        }
    }

    /// Compute distances, graph, forest and schedules.
    ///
    /// Every stage is rebuilt from the load table, so running twice gives the
    /// same solution.
    pub fn run(&mut self) -> &Solution {
        let start_time = Instant::now();

        self.distances = DistanceIndex::new(&self.loads);
        self.graph = build_graph(&self.loads, &self.distances.leg);

        let forest = spanning_forest(&self.graph, self.config.max_edge_weight);
        let schedules = forest.schedules(self.config.retention);

        let mut solution = Solution::new(schedules, forest.weight());
        solution.evaluate(&self.loads, &self.distances, self.config.driver_cost);

        self.run_time = start_time.elapsed();

        info!(
            "{} loads, {} drivers, {:.2} driven minutes, cost {:.2}",
            self.loads.len(),
            solution.get_driver_count(),
            solution.driven_minutes,
            solution.cost
        );

        self.solution.insert(solution)
    }
}

/// Solve a load table in one call.
pub fn solve(loads: &LoadTable, config: &Config) -> Solution {
    let mut dispatcher = Dispatcher::new(loads.clone(), config.clone());
    dispatcher.run().clone()
}
