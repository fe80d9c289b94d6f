//! Output helpers for solved schedules.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::solution::{DriverSchedule, Solution};

/// How a schedule is written, one schedule per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `[1,2,3]`
    #[default]
    Plain,
    /// `["1","2","3"]`
    Json,
}

/// Format a duration as seconds with millisecond precision.
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    format!("{}.{:03}s", millis / 1000, millis % 1000)
}

/// Render one schedule as a single line.
pub fn format_schedule(
    schedule: &DriverSchedule,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Plain => Ok(schedule.to_string()),
        OutputFormat::Json => serde_json::to_string(&schedule.loads),
    }
}

/// Write every schedule of a solution, one per line.
pub fn write_schedules<W: Write>(
    solution: &Solution,
    format: OutputFormat,
    mut out: W,
) -> io::Result<()> {
    for schedule in &solution.schedules {
        writeln!(out, "{}", format_schedule(schedule, format)?)?;
    }
    out.flush()
}

/// Save a solution to a file.
pub fn save_schedules<P: AsRef<Path>>(
    solution: &Solution,
    format: OutputFormat,
    path: P,
) -> io::Result<()> {
    let file = File::create(path)?;
    write_schedules(solution, format, io::BufWriter::new(file))
}

/// Summary of one run.
pub struct RunStatistics {
    pub loads: usize,
    pub drivers: usize,
    pub forest_weight: f64,
    pub driven_minutes: f64,
    pub cost: f64,
    pub runtime: Duration,
}

impl RunStatistics {
    pub fn new(loads: usize, solution: &Solution, runtime: Duration) -> Self {
        RunStatistics {
            loads,
            drivers: solution.get_driver_count(),
            forest_weight: solution.forest_weight,
            driven_minutes: solution.driven_minutes,
            cost: solution.cost,
            runtime,
        }
    }

    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        format!(
            "Run Statistics:
- Loads: {}
- Drivers: {}
- Forest Weight: {:.2}
- Driven Minutes: {:.2}
- Total Cost: {:.2}
- Runtime: {}",
            self.loads,
            self.drivers,
            self.forest_weight,
            self.driven_minutes,
            self.cost,
            format_duration(self.runtime)
        )
    }
}
