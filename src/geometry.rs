//! Planar points and the Euclidean metric used for every distance in the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The depot every driver starts from and returns to.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Calculate the Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        distance(*self, *other)
    }
}

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Error returned when a point token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointParseError {
    pub token: String,
}

impl fmt::Display for PointParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid point '{}', expected (x,y)", self.token)
    }
}

impl std::error::Error for PointParseError {}

impl FromStr for Point {
    type Err = PointParseError;

    /// Parses `(x,y)` or a bare `x,y`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PointParseError {
            token: s.to_string(),
        };

        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix('(') {
            Some(rest) => rest.strip_suffix(')').ok_or_else(err)?,
            None => trimmed,
        };

        let (x, y) = inner.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse::<f64>().map_err(|_| err())?;
        let y = y.trim().parse::<f64>().map_err(|_| err())?;

        Ok(Point::new(x, y))
    }
}
