//! Runner: one A* tour search over a cost matrix, timed.
//!
//! The runner owns start selection and timing; the search itself is the
//! generic [`astar_search`] driven by [`CheapestEdgeHeuristic`].

use std::time::{Duration, Instant};

use cpu_time::ProcessTime;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsp_kernel::graph::{Cost, CostMatrix, NodeId};
use tsp_kernel::hash::ContentHash;
use tsp_search::search::{astar_search, SearchStats};

use crate::config::{RunConfig, StartNode};
use crate::error::HarnessError;
use crate::heuristic::CheapestEdgeHeuristic;
use crate::instance::{load_cost_matrix, read_cost_matrix};
use crate::oracle::verify_cost;
use crate::problem::TourProblem;
use crate::report::{TourReport, TourSummary};

/// Outcome of a successful tour search.
#[derive(Debug, Clone)]
pub struct TourRun {
    /// Node the tour starts and ends at.
    pub start: NodeId,
    /// Visit order after `start`, ending with `start`.
    pub tour: Vec<NodeId>,
    /// Tour cost (the goal node's path cost).
    pub cost: Cost,
    /// States in the explored set when the goal was popped.
    pub expanded: u64,
    /// Full expansion counters.
    pub stats: SearchStats,
    /// Process CPU time spent in the search.
    pub cpu_runtime: Duration,
    /// Wall-clock time spent in the search.
    pub real_runtime: Duration,
    /// Digest of the searched matrix.
    pub matrix_digest: ContentHash,
}

/// Resolve a [`StartNode`] to a concrete node of a `node_count`-node instance.
///
/// # Errors
///
/// Returns [`HarnessError::StartOutOfRange`] for a fixed start outside
/// `[0, node_count)` or when `node_count` is zero.
pub fn choose_start(start: StartNode, node_count: usize) -> Result<NodeId, HarnessError> {
    if node_count == 0 {
        return Err(HarnessError::StartOutOfRange {
            start: 0,
            node_count,
        });
    }
    match start {
        StartNode::Fixed(node) if node < node_count => Ok(node),
        StartNode::Fixed(node) => Err(HarnessError::StartOutOfRange {
            start: node,
            node_count,
        }),
        StartNode::Random { seed: Some(seed) } => {
            Ok(StdRng::seed_from_u64(seed).gen_range(0..node_count))
        }
        StartNode::Random { seed: None } => Ok(rand::thread_rng().gen_range(0..node_count)),
    }
}

/// Run A* with the cheapest-edge heuristic from `start`.
///
/// # Errors
///
/// - [`HarnessError::StartOutOfRange`] if `start >= N`.
/// - [`HarnessError::Search`] on an internal search failure.
/// - [`HarnessError::SearchExhausted`] if no tour was closed.
/// - [`HarnessError::Clock`] if process CPU time cannot be read.
pub fn run_tour_search(matrix: &CostMatrix, start: NodeId) -> Result<TourRun, HarnessError> {
    let problem = TourProblem::new(matrix.clone(), start)?;
    let heuristic = CheapestEdgeHeuristic::new(matrix);

    tracing::info!(
        node_count = matrix.node_count(),
        start,
        matrix_digest = %matrix.digest(),
        "starting tour search"
    );

    let cpu_started = ProcessTime::try_now().map_err(HarnessError::Clock)?;
    let wall_started = Instant::now();
    let result = astar_search(&problem, &heuristic)?;
    let real_runtime = wall_started.elapsed();
    let cpu_runtime = cpu_started.try_elapsed().map_err(HarnessError::Clock)?;

    let Some(goal) = result.goal_node() else {
        tracing::warn!(expanded = result.expanded_count, "frontier exhausted");
        return Err(HarnessError::SearchExhausted {
            expanded: result.expanded_count,
        });
    };

    let run = TourRun {
        start,
        tour: result.tree.solution(goal.node_id),
        cost: goal.path_cost,
        expanded: result.expanded_count,
        stats: result.stats,
        cpu_runtime,
        real_runtime,
        matrix_digest: matrix.digest(),
    };
    tracing::info!(
        cost = run.cost,
        expanded = run.expanded,
        cpu_secs = run.cpu_runtime.as_secs_f64(),
        real_secs = run.real_runtime.as_secs_f64(),
        "tour search finished"
    );
    Ok(run)
}

/// Load the instance named by `config`, search it, and write the results.
///
/// Returns the run and its report line. The report file is always written;
/// the JSON summary only when `config.json` is set.
///
/// # Errors
///
/// Any [`HarnessError`] from loading, searching, verifying, or writing.
pub fn execute(config: &RunConfig) -> Result<(TourRun, TourReport), HarnessError> {
    let matrix = match &config.input {
        Some(path) => load_cost_matrix(path)?,
        None => read_cost_matrix(std::io::stdin().lock(), "<stdin>")?,
    };
    let start = choose_start(config.start, matrix.node_count())?;
    let run = run_tour_search(&matrix, start)?;

    let verified = if config.verify {
        let optimal = verify_cost(&matrix, start, run.cost)?;
        tracing::info!(optimal_cost = optimal.cost, "search cost verified");
        Some(optimal.cost)
    } else {
        None
    };

    let report = TourReport::from(&run);
    report.write_to(&config.output)?;
    if let Some(json) = &config.json {
        TourSummary::new(&run, verified).write_to(json)?;
    }
    Ok((run, report))
}
