//! Random draws used to seed a cave.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A provider of uniform values in `[0, 1)`.
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> UniformSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Deterministic RNG for a given seed.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Use the given seed, or pick a fresh one so the run can still be reproduced.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// Replays a fixed list of draws.
///
/// Built with [`SequenceSource::new`], the list must cover every draw: asking
/// for one more panics, since a short script means the caller miscounted cells.
/// [`SequenceSource::cycling`] repeats the list instead.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    values: Vec<f64>,
    pos: usize,
    cycle: bool,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            pos: 0,
            cycle: false,
        }
    }

    /// Repeat `values` forever. Panics if `values` is empty.
    pub fn cycling(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "cycling sequence needs at least one draw");
        Self {
            values,
            pos: 0,
            cycle: true,
        }
    }
}

impl UniformSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        let Some(&value) = self.values.get(self.pos) else {
            panic!("sequence exhausted after {} draws", self.values.len());
        };
        self.pos += 1;
        if self.cycle && self.pos == self.values.len() {
            self.pos = 0;
        }
        value
    }
}
