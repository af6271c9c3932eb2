//! ASCII rendering and export module for cave maps
//!
//! Provides functions to render caves as ASCII text and export them to files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::cave::CaveMap;
use crate::error::CaveError;
use crate::tilemap::Tilemap;

/// Glyph for a wall (filled) cell
pub const WALL_CHAR: char = '#';
/// Glyph for an open floor cell
pub const FLOOR_CHAR: char = '.';

/// Get ASCII character for a cell
pub fn cell_char(filled: bool) -> char {
    if filled {
        WALL_CHAR
    } else {
        FLOOR_CHAR
    }
}

/// Render a cave grid to an ASCII string.
///
/// Rows are joined by `\n`; there is no trailing newline.
pub fn render_ascii_map(cells: &Tilemap<bool>) -> String {
    let mut result = String::with_capacity((cells.width + 1) * cells.height);

    for (y, row) in cells.rows().enumerate() {
        if y > 0 {
            result.push('\n');
        }
        result.extend(row.iter().map(|&c| cell_char(c)));
    }

    result
}

/// Generate legend for cave characters
pub fn cave_legend() -> String {
    format!(
        "=== LEGEND ===\n  {} Wall\n  {} Floor\n",
        WALL_CHAR, FLOOR_CHAR
    )
}

/// Write the full cave report: header, map, legend and statistics.
/// With `verbose`, per-row wall counts are appended.
pub fn write_cave_report<W: Write>(
    out: &mut W,
    map: &CaveMap,
    seed: Option<u64>,
    verbose: bool,
) -> Result<(), CaveError> {
    let params = map.params();
    let total = map.width() * map.height();

    // Header
    writeln!(out, "=== CAVE GENERATOR MAP FILE ===")?;
    match seed {
        Some(seed) => writeln!(out, "Seed: {}", seed)?,
        None => writeln!(out, "Seed: (external source)")?,
    }
    writeln!(out, "Size: {}x{}", map.width(), map.height())?;
    writeln!(out, "Iterations: {}", params.iterations)?;
    writeln!(out, "Fill ratio: {:.2}", params.fill_ratio)?;
    writeln!(out, "Neighbors: {}", params.neighbors)?;
    writeln!(out, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out)?;

    writeln!(out, "=== MAP ===")?;
    writeln!(out, "{}", map.render())?;
    writeln!(out)?;

    write!(out, "{}", cave_legend())?;
    writeln!(out)?;

    // Statistics
    let walls = map.filled_count();
    let floors = map.open_count();
    writeln!(out, "=== STATISTICS ===")?;
    writeln!(out, "Total tiles: {}", total)?;
    writeln!(out, "Wall: {} ({:.1}%)", walls, 100.0 * walls as f64 / total as f64)?;
    writeln!(out, "Floor: {} ({:.1}%)", floors, 100.0 * floors as f64 / total as f64)?;
    writeln!(out)?;

    if verbose {
        writeln!(out, "=== ROW DATA ===")?;
        writeln!(out, "[row,walls,floors]")?;
        for (y, row) in map.rows().enumerate() {
            let row_walls = row.iter().filter(|&&c| c).count();
            writeln!(out, "{},{},{}", y, row_walls, row.len() - row_walls)?;
        }
    }

    Ok(())
}

/// Export a cave to an ASCII report file
pub fn export_cave_file<P: AsRef<Path>>(
    map: &CaveMap,
    seed: Option<u64>,
    path: P,
    verbose: bool,
) -> Result<(), CaveError> {
    let mut file = BufWriter::new(File::create(path)?);
    write_cave_report(&mut file, map, seed, verbose)?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cave::generate;
    use crate::params::CaveParams;
    use crate::random::SequenceSource;

    fn small_map() -> CaveMap {
        // 4x3, first row wall, rest floor
        let draws = vec![0.0, 0.0, 0.0, 0.0, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9];
        let params = CaveParams::new(4, 3).with_iterations(0);
        generate(&params, &mut SequenceSource::new(draws)).unwrap()
    }

    #[test]
    fn test_render_has_no_trailing_newline() {
        let text = render_ascii_map(small_map().cells());
        assert_eq!(text, "####\n....\n....");
    }

    #[test]
    fn test_render_is_stable() {
        let map = small_map();
        assert_eq!(map.render(), map.render());
    }

    #[test]
    fn test_cell_chars() {
        assert_eq!(cell_char(true), '#');
        assert_eq!(cell_char(false), '.');
        assert!(cave_legend().contains("# Wall"));
    }

    #[test]
    fn test_report_contents() {
        let mut buf = Vec::new();
        write_cave_report(&mut buf, &small_map(), Some(42), true).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("=== CAVE GENERATOR MAP FILE ===\nSeed: 42\nSize: 4x3\n"));
        assert!(text.contains("Neighbors: moore"));
        assert!(text.contains("=== MAP ===\n####\n....\n....\n"));
        assert!(text.contains("Wall: 4 (33.3%)"));
        assert!(text.contains("Floor: 8 (66.7%)"));
        assert!(text.contains("[row,walls,floors]\n0,4,0\n1,0,4\n2,0,4\n"));
    }

    #[test]
    fn test_report_without_seed_or_rows() {
        let mut buf = Vec::new();
        write_cave_report(&mut buf, &small_map(), None, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Seed: (external source)"));
        assert!(!text.contains("ROW DATA"));
    }

    #[test]
    fn test_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cave.txt");
        export_cave_file(&small_map(), Some(7), &path, false).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Seed: 7"));
        assert!(text.contains("####\n....\n...."));
    }

    #[test]
    fn test_export_to_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("cave.txt");
        let err = export_cave_file(&small_map(), None, &path, false).unwrap_err();
        assert!(matches!(err, CaveError::Io(_)));
    }
}
