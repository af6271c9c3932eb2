//! Cellular-automata cave generation library
//!
//! Re-exports modules for use by binaries and tools.

pub mod ascii;
pub mod cave;
pub mod error;
pub mod map_export;
pub mod params;
pub mod random;
pub mod tilemap;

pub use cave::{CaveGenerator, CaveMap};
pub use error::CaveError;
pub use params::{
    CaveParams, NeighborSet, DEFAULT_FILL_RATIO, DEFAULT_HEIGHT, DEFAULT_ITERATIONS,
    DEFAULT_WIDTH,
};
pub use random::{SequenceSource, UniformSource};

/// Generate a cave with the default iterations and fill ratio and return it as ASCII.
pub fn generate_cave_text(width: usize, height: usize) -> Result<String, CaveError> {
    generate_cave_text_with(width, height, DEFAULT_ITERATIONS, DEFAULT_FILL_RATIO)
}

/// Generate a cave and return it as ASCII, one line per row.
pub fn generate_cave_text_with(
    width: usize,
    height: usize,
    iterations: usize,
    fill_ratio: f64,
) -> Result<String, CaveError> {
    let params = CaveParams::new(width, height)
        .with_iterations(iterations)
        .with_fill_ratio(fill_ratio);
    let map = cave::generate(&params, &mut rand::thread_rng())?;
    Ok(map.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_shape() {
        let text = generate_cave_text(80, 30).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 30);
        assert!(lines.iter().all(|l| l.len() == 80));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_text_extremes() {
        assert_eq!(
            generate_cave_text_with(10, 5, 0, 0.0).unwrap(),
            vec![".........."; 5].join("\n")
        );
        assert_eq!(
            generate_cave_text_with(10, 5, 0, 1.0).unwrap(),
            vec!["##########"; 5].join("\n")
        );
    }

    #[test]
    fn test_text_rejects_bad_arguments() {
        assert!(generate_cave_text(2, 30).unwrap_err().is_invalid_argument());
        assert!(generate_cave_text(80, 1).unwrap_err().is_invalid_argument());
        assert_eq!(
            generate_cave_text_with(10, 10, 5, 1.5),
            Err(CaveError::InvalidFillRatio(1.5))
        );
    }

    #[test]
    fn test_text_rejects_oversized_map() {
        let err = generate_cave_text(usize::MAX / 2, 3).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(err, CaveError::InvalidSize { .. }));
        assert!(generate_cave_text_with(usize::MAX, usize::MAX, 0, 0.5).is_err());
    }
}
