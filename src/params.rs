//! Cave generation parameters and configuration

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CaveError;

/// Default map width when none is given (one terminal line)
pub const DEFAULT_WIDTH: usize = 80;
/// Default map height when none is given
pub const DEFAULT_HEIGHT: usize = 30;
/// Default number of smoothing passes
pub const DEFAULT_ITERATIONS: usize = 5;
/// Default probability that a cell is seeded as wall
pub const DEFAULT_FILL_RATIO: f64 = 0.45;
/// Width and height must be strictly greater than this
pub const MIN_DIMENSION: usize = 2;

/// Which 8 positions count as a cell's neighborhood
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighborSet {
    /// The full Moore neighborhood
    #[default]
    Moore,
    /// Counts the lower-left neighbor twice and never looks at the lower-right one.
    /// Reproduces maps from older generators bit for bit.
    Legacy,
}

impl NeighborSet {
    pub fn all() -> &'static [Self] {
        &[Self::Moore, Self::Legacy]
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Moore => "All 8 surrounding cells",
            Self::Legacy => "Lower-left counted twice, lower-right skipped",
        }
    }

    /// Neighbor offsets `(dx, dy)`: row above, same row, row below.
    pub fn offsets(&self) -> &'static [(i64, i64); 8] {
        match self {
            Self::Moore => &MOORE_OFFSETS,
            Self::Legacy => &LEGACY_OFFSETS,
        }
    }
}

#[rustfmt::skip]
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0), (1, 0),
    (-1, 1), (0, 1), (1, 1),
];

#[rustfmt::skip]
const LEGACY_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0), (1, 0),
    (-1, 1), (0, 1), (-1, 1),
];

impl std::fmt::Display for NeighborSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Moore => write!(f, "moore"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for NeighborSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "moore" => Ok(Self::Moore),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("unknown neighbor set '{}' (expected moore or legacy)", other)),
        }
    }
}

/// Parameters for one cave generation run.
///
/// Fields missing from a JSON config file fall back to [`CaveParams::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveParams {
    /// Map width in cells (must be > 2)
    pub width: usize,
    /// Map height in cells (must be > 2)
    pub height: usize,
    /// Number of smoothing passes (0 = raw random seed)
    pub iterations: usize,
    /// Initial probability that a cell is wall (0.0-1.0)
    pub fill_ratio: f64,
    /// Neighborhood used by the 4-5 rule
    pub neighbors: NeighborSet,
}

impl Default for CaveParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            iterations: DEFAULT_ITERATIONS,
            fill_ratio: DEFAULT_FILL_RATIO,
            neighbors: NeighborSet::default(),
        }
    }
}

impl CaveParams {
    /// Default iterations and fill ratio at the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_fill_ratio(mut self, fill_ratio: f64) -> Self {
        self.fill_ratio = fill_ratio;
        self
    }

    pub fn with_neighbors(mut self, neighbors: NeighborSet) -> Self {
        self.neighbors = neighbors;
        self
    }

    /// Check the generation preconditions.
    pub fn validate(&self) -> Result<(), CaveError> {
        if self.width <= MIN_DIMENSION {
            return Err(CaveError::InvalidWidth(self.width));
        }
        if self.height <= MIN_DIMENSION {
            return Err(CaveError::InvalidHeight(self.height));
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(CaveError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        // NaN fails the range check too
        if !(0.0..=1.0).contains(&self.fill_ratio) {
            return Err(CaveError::InvalidFillRatio(self.fill_ratio));
        }
        Ok(())
    }

    /// Load parameters from a JSON file. The result is not validated.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CaveError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, CaveError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, CaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
