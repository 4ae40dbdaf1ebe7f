use std::{
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand, ValueEnum};
use planar_graphs::{
    build_mst, build_mst_with_heap,
    points::{load_points, random_points},
    render::{render_svg, CanvasConfig},
    report::{time_trial, Algorithm, TrialReport},
    solve_tsp, Error, InvalidInputError, Point,
};
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use tracing::{error, info, warn, Level};

/// Beyond this many points the exhaustive tour search takes minutes to hours
const TSP_FEASIBLE_POINTS: usize = 10;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Opt {
    #[command(subcommand)]
    trial: Trial,

    /// Number of random points to generate
    #[arg(short = 'n', long = "points", default_value_t = 10, global = true)]
    points: usize,

    /// Seed for the point generator, else seeded from the OS
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// A JSON array of {"x", "y"} points to use instead of random ones
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Output SVG path (overwrites old files); with `both`, "-mst" and "-tsp" are appended to the file stem
    #[arg(short, long, global = true)]
    out: Option<PathBuf>,

    /// JSON file overriding canvas size, colors, and stroke widths
    #[arg(long, global = true)]
    canvas_config: Option<PathBuf>,

    /// How to print results to stdout
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Which minimum spanning tree algorithm to run
    #[arg(long, value_enum, default_value_t = MstAlgorithm::Bridge, global = true)]
    mst_algorithm: MstAlgorithm,

    /// Log debugging output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Trial {
    /// Euclidean minimum spanning tree
    Mst,
    /// Exact Euclidean traveling salesperson tour
    Tsp,
    /// Run both at once on the same points
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MstAlgorithm {
    /// O(n^3) scan for the shortest bridge edge
    Bridge,
    /// O(n^2 log(n)) Prim's algorithm with a priority queue
    Heap,
}

fn main() -> ExitCode {
    let opt = Opt::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if opt.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    match run(opt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(opt: Opt) -> Result<(), Error> {
    let config = match &opt.canvas_config {
        Some(path) => CanvasConfig::load(path)?,
        None => CanvasConfig::default(),
    };

    let points = match &opt.input {
        Some(path) => {
            info!("Reading points from {}", path.display());
            load_points(path)?
        }
        None => {
            info!("generating n={} points...", opt.points);
            match opt.seed {
                Some(seed) => random_points(opt.points, &mut StdRng::seed_from_u64(seed)),
                None => random_points(opt.points, &mut thread_rng()),
            }
        }
    };

    let reports = match opt.trial {
        Trial::Mst => vec![mst_trial(&points, opt.mst_algorithm)?],
        Trial::Tsp => vec![tsp_trial(&points)?],
        Trial::Both => {
            let (mst, tsp) = rayon::join(
                || mst_trial(&points, opt.mst_algorithm),
                || tsp_trial(&points),
            );
            vec![mst?, tsp?]
        }
    };

    match opt.format {
        Format::Text => {
            for report in &reports {
                println!("{}", report);
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(io::stdout(), &reports)?;
            println!();
        }
    }

    if let Some(out) = &opt.out {
        for report in &reports {
            let path = match (reports.len(), report.algorithm) {
                (1, _) => out.clone(),
                (_, Algorithm::ExactTsp) => with_stem_suffix(out, "tsp"),
                _ => with_stem_suffix(out, "mst"),
            };
            render_svg(&path, &points, (&report.result).into(), &config)?;
            info!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn mst_trial(points: &[Point], algorithm: MstAlgorithm) -> Result<TrialReport, InvalidInputError> {
    let message = "minimum spanning tree...";
    let (edges, elapsed, algorithm) = match algorithm {
        MstAlgorithm::Bridge => {
            let (edges, elapsed) = time_trial(message, points, build_mst)?;
            (edges, elapsed, Algorithm::BridgeMst)
        }
        MstAlgorithm::Heap => {
            let (edges, elapsed) = time_trial(message, points, build_mst_with_heap)?;
            (edges, elapsed, Algorithm::HeapMst)
        }
    };
    Ok(TrialReport::tree(algorithm, points.len(), elapsed, edges))
}

fn tsp_trial(points: &[Point]) -> Result<TrialReport, InvalidInputError> {
    if points.len() > TSP_FEASIBLE_POINTS {
        warn!(
            "Exhaustive search over {}! orderings of {} points may not finish",
            points.len(),
            points.len()
        );
    }
    let (cycle, elapsed) = time_trial("traveling salesperson...", points, solve_tsp)?;
    Ok(TrialReport::cycle(points.len(), elapsed, cycle))
}

/// `out/trial.svg` with suffix `mst` becomes `out/trial-mst.svg`
fn with_stem_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut file_name = format!("{}-{}", stem, suffix);
    if let Some(extension) = path.extension() {
        file_name.push('.');
        file_name.push_str(&extension.to_string_lossy());
    }
    path.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::with_stem_suffix;

    #[test]
    fn test_stem_suffix_keeps_extension() {
        assert_eq!(
            with_stem_suffix(Path::new("out/trial.svg"), "mst"),
            PathBuf::from("out/trial-mst.svg")
        );
        assert_eq!(
            with_stem_suffix(Path::new("trial"), "tsp"),
            PathBuf::from("trial-tsp")
        );
    }
}
