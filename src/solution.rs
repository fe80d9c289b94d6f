//! Driver schedules and their evaluation.

use crate::distance::DistanceIndex;
use crate::geometry::{distance, Point};
use crate::load::{LoadId, LoadTable};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Total cost of a plan: a fixed cost per driver plus every driven minute.
pub fn total_cost(number_of_drivers: usize, driven_minutes: f64, driver_cost: f64) -> f64 {
    driver_cost * number_of_drivers as f64 + driven_minutes
}

/// The loads assigned to one driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverSchedule {
    /// Load ids in the order they are served
    pub loads: Vec<LoadId>,
    /// Driven minutes, including the trips from and back to the origin
    #[serde(skip)]
    pub minutes: f64,
}

impl DriverSchedule {
    /// Create a schedule over the given loads.
    pub fn new(loads: Vec<LoadId>) -> Self {
        DriverSchedule {
            loads,
            minutes: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.loads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    pub fn contains(&self, id: &LoadId) -> bool {
        self.loads.contains(id)
    }

    /// Calculate the driven minutes of this schedule.
    ///
    /// The driver leaves the origin, serves every load pickup then dropoff in
    /// order, and returns to the origin. One distance unit is one minute.
    pub fn calculate_minutes(&mut self, table: &LoadTable, distances: &DistanceIndex) {
        let mut total = 0.0;
        let mut position: Option<Point> = None;

        for id in &self.loads {
            let Some(load) = table.get(id) else {
                continue;
            };

            total += match position {
                None => distances
                    .origin_distance(id)
                    .unwrap_or_else(|| distance(Point::ORIGIN, load.pickup)),
                Some(from) => distance(from, load.pickup),
            };
            total += distances
                .leg_distance(id)
                .unwrap_or_else(|| distance(load.pickup, load.dropoff));

            position = Some(load.dropoff);
        }

        if let Some(last) = position {
            total += distance(last, Point::ORIGIN);
        }

        self.minutes = total;
    }
}

impl fmt::Display for DriverSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.loads.iter().join(","))
    }
}

/// Result of one solve.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Solution {
    /// One schedule per driver
    pub schedules: Vec<DriverSchedule>,
    /// Total weight of the spanning forest the schedules were cut from
    pub forest_weight: f64,
    /// Sum of the driven minutes over all schedules
    pub driven_minutes: f64,
    /// Cost of the plan, see [`total_cost`]
    pub cost: f64,
}

impl Solution {
    /// Create a solution from schedules, not yet evaluated.
    pub fn new(schedules: Vec<DriverSchedule>, forest_weight: f64) -> Self {
        Solution {
            schedules,
            forest_weight,
            driven_minutes: 0.0,
            cost: 0.0,
        }
    }

    /// Evaluate the solution, calculating driven minutes and cost.
    pub fn evaluate(&mut self, table: &LoadTable, distances: &DistanceIndex, driver_cost: f64) {
        let mut driven_minutes = 0.0;

        for schedule in &mut self.schedules {
            schedule.calculate_minutes(table, distances);
            driven_minutes += schedule.minutes;
        }

        self.driven_minutes = driven_minutes;
        self.cost = total_cost(self.schedules.len(), driven_minutes, driver_cost);
    }

    /// Get the number of drivers.
    pub fn get_driver_count(&self) -> usize {
        self.schedules.len()
    }

    /// Get the number of loads assigned across all schedules.
    pub fn get_assigned_load_count(&self) -> usize {
        self.schedules.iter().map(DriverSchedule::len).sum()
    }
}

impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution:")?;
        writeln!(f, "  Cost: {:.2}", self.cost)?;
        writeln!(f, "  Driven Minutes: {:.2}", self.driven_minutes)?;
        writeln!(f, "  Forest Weight: {:.2}", self.forest_weight)?;
        writeln!(f, "  Drivers: {}", self.schedules.len())?;

        for (i, schedule) in self.schedules.iter().enumerate() {
            writeln!(
                f,
                "  Driver {}: {} (Minutes: {:.2})",
                i, schedule, schedule.minutes
            )?;
        }

        Ok(())
    }
}
