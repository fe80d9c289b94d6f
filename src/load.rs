//! Loads and the load table they are read into.

use crate::error::{Error, LineError, Result};
use crate::geometry::Point;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Opaque load identifier, taken verbatim from the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadId(String);

impl LoadId {
    pub fn new(id: impl Into<String>) -> Self {
        LoadId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LoadId {
    fn from(id: &str) -> Self {
        LoadId::new(id)
    }
}

impl From<String> for LoadId {
    fn from(id: String) -> Self {
        LoadId(id)
    }
}

/// A single pickup-then-dropoff delivery task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    pub id: LoadId,
    pub pickup: Point,
    pub dropoff: Point,
}

impl Load {
    /// Create a new load.
    pub fn new(id: impl Into<LoadId>, pickup: Point, dropoff: Point) -> Self {
        Load {
            id: id.into(),
            pickup,
            dropoff,
        }
    }
}

/// Mapping from load identifier to load, in insertion order.
///
/// Insertion order only matters for tie-breaking and output order. Inserting
/// an id that is already present replaces the record in its original slot.
#[derive(Debug, Clone, Default)]
pub struct LoadTable {
    loads: Vec<Load>,
    index: HashMap<LoadId, usize>,
}

impl LoadTable {
    /// Create an empty table.
    pub fn new() -> Self {
        LoadTable::default()
    }

    /// Insert a load, returning the record it replaced, if any.
    pub fn insert(&mut self, load: Load) -> Option<Load> {
        match self.index.get(&load.id) {
            Some(&slot) => Some(std::mem::replace(&mut self.loads[slot], load)),
            None => {
                self.index.insert(load.id.clone(), self.loads.len());
                self.loads.push(load);
                None
            }
        }
    }

    pub fn get(&self, id: &LoadId) -> Option<&Load> {
        self.index.get(id).map(|&slot| &self.loads[slot])
    }

    /// Position of a load in insertion order.
    pub fn position(&self, id: &LoadId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.loads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Iterate over the loads in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Load> + Clone {
        self.loads.iter()
    }

    /// Iterate over the load ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &LoadId> + Clone {
        self.loads.iter().map(|load| &load.id)
    }

    /// Read a table from a reader. Only read failures are fatal.
    ///
    /// A line that is not valid UTF-8 is skipped like any other bad record.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut lines = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| Error::io(None, e))?;
            if read == 0 {
                break;
            }

            match String::from_utf8(std::mem::take(&mut buf)) {
                Ok(line) => lines.push(line),
                Err(_) => {
                    warn!(
                        "Skipping invalid line {}: {}",
                        lines.len() + 1,
                        LineError::InvalidEncoding
                    );
                    // Keep later line numbers in step with the input
                    lines.push(String::new());
                }
            }
        }

        Ok(parse_loads(lines))
    }

    /// Load a table from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(Some(path.to_path_buf()), e))?;

        LoadTable::from_reader(BufReader::new(file)).map_err(|err| match err {
            Error::Io { source, .. } => Error::io(Some(path.to_path_buf()), source),
        })
    }
}

impl FromIterator<Load> for LoadTable {
    fn from_iter<I: IntoIterator<Item = Load>>(iter: I) -> Self {
        let mut table = LoadTable::new();
        for load in iter {
            table.insert(load);
        }
        table
    }
}

/// Parse a single record of the form `<id> <pickup> <dropoff>`.
///
/// Returns `Ok(None)` for blank lines. Tokens past the third are ignored.
pub fn parse_line(line: &str) -> std::result::Result<Option<Load>, LineError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(LineError::TooFewFields {
            found: fields.len(),
        });
    }

    let pickup: Point = fields[1].parse()?;
    let dropoff: Point = fields[2].parse()?;

    Ok(Some(Load::new(fields[0], pickup, dropoff)))
}

/// Build a load table from text records, skipping the ones that do not parse.
pub fn parse_loads<I, S>(lines: I) -> LoadTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = LoadTable::new();

    for (i, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        match parse_line(line) {
            Ok(Some(load)) => {
                if let Some(previous) = table.insert(load) {
                    debug!("line {}: load {} redefined", i + 1, previous.id);
                }
            }
            Ok(None) => {}
            Err(err) => warn!("Skipping invalid line {} '{}': {}", i + 1, line.trim(), err),
        }
    }

    table
}
