//! Cellular-automata cave generation
//!
//! A cave starts as random noise: every cell is independently seeded as wall
//! with probability `fill_ratio`. Each smoothing pass then applies the 4-5
//! rule to every cell at once:
//!
//! - a wall stays a wall if more than 3 of its neighbors are walls
//! - a floor becomes a wall if more than 4 of its neighbors are walls
//!
//! Positions outside the map always count as walls, so caves close up
//! towards the edges.

use crate::ascii;
use crate::error::CaveError;
use crate::params::{CaveParams, NeighborSet};
use crate::random::{seeded_rng, UniformSource};
use crate::tilemap::Tilemap;

/// A wall survives with more than this many wall neighbors
pub const SURVIVAL_THRESHOLD: u8 = 3;
/// A floor turns to wall with more than this many wall neighbors
pub const BIRTH_THRESHOLD: u8 = 4;

/// A finished cave: `true` cells are wall, `false` cells are open floor.
#[derive(Clone, Debug, PartialEq)]
pub struct CaveMap {
    cells: Tilemap<bool>,
    params: CaveParams,
}

impl CaveMap {
    pub fn width(&self) -> usize {
        self.cells.width
    }

    pub fn height(&self) -> usize {
        self.cells.height
    }

    /// Parameters this map was generated with.
    pub fn params(&self) -> &CaveParams {
        &self.params
    }

    pub fn cells(&self) -> &Tilemap<bool> {
        &self.cells
    }

    /// Panics if `(x, y)` is outside the map.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        *self.cells.get(x, y)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.as_slice().iter().filter(|&&c| c).count()
    }

    pub fn open_count(&self) -> usize {
        self.cells.len() - self.filled_count()
    }

    /// Share of wall cells, 0-100.
    pub fn fill_percentage(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        100.0 * self.filled_count() as f64 / self.cells.len() as f64
    }

    /// Iterate over rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.rows()
    }

    /// ASCII rendering, one line per row, no trailing newline.
    pub fn render(&self) -> String {
        ascii::render_ascii_map(&self.cells)
    }
}

impl std::fmt::Display for CaveMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Generates caves for a fixed, validated set of parameters.
#[derive(Clone, Debug)]
pub struct CaveGenerator {
    params: CaveParams,
}

impl CaveGenerator {
    pub fn new(params: CaveParams) -> Result<Self, CaveError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &CaveParams {
        &self.params
    }

    /// Seed from `source`, then run every smoothing pass.
    pub fn generate<S: UniformSource + ?Sized>(&self, source: &mut S) -> CaveMap {
        let p = &self.params;
        let mut cells = seed_grid(p.width, p.height, p.fill_ratio, source);
        for _ in 0..p.iterations {
            cells = smooth_pass(&cells, p.neighbors);
        }
        CaveMap {
            cells,
            params: p.clone(),
        }
    }

    /// Generate with a ChaCha RNG seeded from `seed`.
    pub fn generate_seeded(&self, seed: u64) -> CaveMap {
        let mut rng = seeded_rng(seed);
        self.generate(&mut rng)
    }
}

/// Validate `params` and generate a cave from `source`.
pub fn generate<S: UniformSource + ?Sized>(
    params: &CaveParams,
    source: &mut S,
) -> Result<CaveMap, CaveError> {
    Ok(CaveGenerator::new(params.clone())?.generate(source))
}

/// Random initial grid. Draws happen in row-major order, one per cell.
pub fn seed_grid<S: UniformSource + ?Sized>(
    width: usize,
    height: usize,
    fill_ratio: f64,
    source: &mut S,
) -> Tilemap<bool> {
    Tilemap::from_fn(width, height, |_, _| source.next_unit() < fill_ratio)
}

/// One smoothing pass. Every cell of the result is computed from `grid` as it
/// was before the pass.
pub fn smooth_pass(grid: &Tilemap<bool>, neighbors: NeighborSet) -> Tilemap<bool> {
    Tilemap::from_fn(grid.width, grid.height, |x, y| {
        let count = count_filled_neighbors(grid, x, y, neighbors);
        next_state(*grid.get(x, y), count)
    })
}

/// Number of wall cells around `(x, y)`, 0-8. Off-map positions count as wall.
pub fn count_filled_neighbors(
    grid: &Tilemap<bool>,
    x: usize,
    y: usize,
    neighbors: NeighborSet,
) -> u8 {
    let (x, y) = (x as i64, y as i64);
    neighbors
        .offsets()
        .iter()
        .filter(|&&(dx, dy)| grid.get_signed(x + dx, y + dy).copied().unwrap_or(true))
        .count() as u8
}

/// The 4-5 rule.
pub fn next_state(filled: bool, filled_neighbors: u8) -> bool {
    if filled {
        filled_neighbors > SURVIVAL_THRESHOLD
    } else {
        filled_neighbors > BIRTH_THRESHOLD
    }
}
