use clap::Parser;

use cave_generator::ascii;
use cave_generator::cave::CaveGenerator;
use cave_generator::map_export;
use cave_generator::params::{CaveParams, NeighborSet, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use cave_generator::random::resolve_seed;
use cave_generator::CaveError;

#[derive(Parser, Debug)]
#[command(name = "cave_generator")]
#[command(about = "Generate cave-like ASCII maps with cellular automata")]
struct Args {
    /// Map width and height. Exactly two values, otherwise 80x30 is used
    #[arg(value_name = "WIDTH HEIGHT")]
    dims: Vec<usize>,

    /// Number of smoothing iterations (default: 5)
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Initial ratio of wall cells, 0.0-1.0 (default: 0.45)
    #[arg(short, long)]
    fill: Option<f64>,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Neighborhood for the smoothing rule: moore or legacy
    #[arg(short, long)]
    neighbors: Option<NeighborSet>,

    /// Load parameters from a JSON file; command-line values take precedence
    #[arg(long)]
    config: Option<String>,

    /// Export the map with header and statistics to a text file
    #[arg(long)]
    export: Option<String>,

    /// Export the map to a PNG image
    #[arg(long)]
    png: Option<String>,

    /// Pixels per cell for PNG export
    #[arg(long, default_value = "8")]
    scale: u32,

    /// Print progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Defaults, then the config file, then explicit arguments.
fn build_params(args: &Args) -> Result<CaveParams, CaveError> {
    let mut params = match args.config {
        Some(ref path) => CaveParams::from_json_file(path)?,
        None => CaveParams::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
    };

    if let [width, height] = args.dims.as_slice() {
        params.width = *width;
        params.height = *height;
    }
    if let Some(iterations) = args.iterations {
        params.iterations = iterations;
    }
    if let Some(fill) = args.fill {
        params.fill_ratio = fill;
    }
    if let Some(neighbors) = args.neighbors {
        params.neighbors = neighbors;
    }

    Ok(params)
}

fn run(args: &Args) -> Result<(), CaveError> {
    let params = build_params(args)?;
    let generator = CaveGenerator::new(params)?;
    let params = generator.params();

    let seed = resolve_seed(args.seed);
    if args.verbose {
        eprintln!("Generating cave with seed: {}", seed);
        eprintln!("Map size: {}x{}", params.width, params.height);
        eprintln!(
            "Smoothing: {} iterations, fill ratio {:.2}, {} neighbors",
            params.iterations, params.fill_ratio, params.neighbors
        );
    }

    let map = generator.generate_seeded(seed);
    if args.verbose {
        eprintln!(
            "Walls: {} ({:.1}%), floor: {}",
            map.filled_count(),
            map.fill_percentage(),
            map.open_count()
        );
    }

    println!("{}", map.render());

    if let Some(ref path) = args.export {
        ascii::export_cave_file(&map, Some(seed), path, args.verbose)?;
        if args.verbose {
            eprintln!("Exported map file to {}", path);
        }
    }

    if let Some(ref path) = args.png {
        let (width, height) = map_export::export_cave_image(&map, path, args.scale)?;
        if args.verbose {
            eprintln!("Exported image to {} ({}x{} pixels)", path, width, height);
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
