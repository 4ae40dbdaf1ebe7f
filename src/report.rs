use std::{
    fmt::{self, Display},
    time::Instant,
};

use serde::Serialize;
use tracing::info;

use crate::{
    error::InvalidInputError,
    graph::{mst::tree_weight, tsp::cycle_weight},
    point::{Edge, Point},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// [crate::graph::mst::build_mst]
    BridgeMst,
    /// [crate::graph::mst::build_mst_with_heap]
    HeapMst,
    /// [crate::graph::tsp::solve_tsp]
    ExactTsp,
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::BridgeMst => "minimum spanning tree (bridge search)",
            Algorithm::HeapMst => "minimum spanning tree (priority queue)",
            Algorithm::ExactTsp => "traveling salesperson (exhaustive search)",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrialResult {
    Edges(Vec<Edge>),
    Cycle(Vec<Point>),
}

/// The outcome of running one algorithm over one point set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialReport {
    pub algorithm: Algorithm,
    pub n: usize,
    pub elapsed_seconds: f64,
    pub total_weight: f64,
    #[serde(flatten)]
    pub result: TrialResult,
}

impl TrialReport {
    pub fn tree(algorithm: Algorithm, n: usize, elapsed_seconds: f64, edges: Vec<Edge>) -> Self {
        Self {
            algorithm,
            n,
            elapsed_seconds,
            total_weight: tree_weight(&edges),
            result: TrialResult::Edges(edges),
        }
    }

    pub fn cycle(n: usize, elapsed_seconds: f64, cycle: Vec<Point>) -> Self {
        Self {
            algorithm: Algorithm::ExactTsp,
            n,
            elapsed_seconds,
            total_weight: cycle_weight(&cycle),
            result: TrialResult::Cycle(cycle),
        }
    }
}

impl Display for TrialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}, n = {}", self.algorithm, self.n)?;
        writeln!(f, "elapsed time = {} seconds", self.elapsed_seconds)?;
        write!(f, "total weight = {}", self.total_weight)?;
        match &self.result {
            TrialResult::Edges(edges) => {
                for edge in edges {
                    write!(f, "\n{}", edge)?;
                }
            }
            TrialResult::Cycle(cycle) => {
                for (i, point) in cycle.iter().enumerate() {
                    write!(f, "\n{}: {}", i, point)?;
                }
            }
        }
        Ok(())
    }
}

/// Run `func` over the points and measure how long it takes.
///
/// Returns the output along with the elapsed wall-clock time in seconds.
pub fn time_trial<T, F>(
    message: &str,
    points: &[Point],
    func: F,
) -> Result<(T, f64), InvalidInputError>
where
    F: FnOnce(&[Point]) -> Result<T, InvalidInputError>,
{
    info!("{}", message);
    let start = Instant::now();
    let output = func(points)?;
    let elapsed = start.elapsed().as_secs_f64();
    info!("elapsed time = {} seconds", elapsed);
    Ok((output, elapsed))
}
