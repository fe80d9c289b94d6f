//! Configuration parameters for a solve.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which connected components of the spanning forest become schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleRetention {
    /// Every component becomes a driver schedule.
    #[default]
    #[value(name = "all")]
    AllComponents,
    /// Only the last processed component survives and every other route is
    /// dropped. Matches the output of earlier releases.
    #[value(name = "last")]
    LastComponentOnly,
}

/// Configuration settings for a solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Components kept as schedules
    pub retention: ScheduleRetention,
    /// Edges heavier than this are left out of the spanning forest
    pub max_edge_weight: Option<f64>,
    /// Fixed cost per driver in the cost report
    pub driver_cost: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            retention: ScheduleRetention::AllComponents,
            max_edge_weight: None,
            driver_cost: 500.0,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the component retention policy.
    pub fn with_retention(mut self, retention: ScheduleRetention) -> Self {
        self.retention = retention;
        self
    }

    /// Set the maximum weight of an edge kept in the spanning forest.
    pub fn with_max_edge_weight(mut self, weight: f64) -> Self {
        self.max_edge_weight = Some(weight);
        self
    }

    /// Set the fixed cost per driver.
    pub fn with_driver_cost(mut self, cost: f64) -> Self {
        self.driver_cost = cost;
        self
    }
}
