//! Cheapest-edge completion estimate for partial tours.
//!
//! For an open tour with `k` of `N` nodes visited, the estimate is the sum
//! of the `N - k` cheapest edges `(x, y)`, `x < y`, that touch at least one
//! unvisited node. Edge weights are read as `matrix[x][y]`. Connectivity
//! and node degree are ignored.
//!
//! On symmetric non-negative matrices this never exceeds the true
//! completion cost: any completion uses `N - k + 1` distinct such edges.
//! On asymmetric matrices it can overestimate, because the completion may
//! use cheaper `matrix[y][x]` entries the estimate never looks at.

use tsp_kernel::graph::{Cost, CostMatrix, NodeId};
use tsp_kernel::tour::TourState;
use tsp_search::heuristic::Heuristic;

use crate::problem::TourProblem;

/// Cheapest-edge heuristic bound to one cost matrix.
///
/// The upper-triangle edges are sorted once at construction; each estimate
/// is then a single filtered scan that stops after `N - k` qualifying edges.
#[derive(Debug, Clone)]
pub struct CheapestEdgeHeuristic {
    /// `(weight, x, y)` with `x < y`, ascending.
    edges: Vec<(Cost, NodeId, NodeId)>,
}

impl CheapestEdgeHeuristic {
    /// Precompute the sorted edge list for `matrix`.
    #[must_use]
    pub fn new(matrix: &CostMatrix) -> Self {
        let n = matrix.node_count();
        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for x in 0..n {
            for y in x + 1..n {
                edges.push((matrix.edge_weight(x, y), x, y));
            }
        }
        edges.sort_unstable();
        Self { edges }
    }

    /// Estimated cost to complete the tour from `state`.
    #[must_use]
    pub fn completion_estimate(&self, matrix: &CostMatrix, state: &TourState) -> Cost {
        let n = matrix.node_count();
        let k = state.visited_count();
        if k > n {
            return 0;
        }
        if k == n {
            return matrix.edge_weight(state.last(), state.start());
        }
        self.edges
            .iter()
            .filter(|&&(_, x, y)| !state.contains(x) || !state.contains(y))
            .take(n - k)
            .map(|&(w, _, _)| w)
            .sum()
    }
}

impl Heuristic<TourProblem> for CheapestEdgeHeuristic {
    fn estimate(&self, problem: &TourProblem, state: &TourState) -> Cost {
        self.completion_estimate(problem.matrix(), state)
    }
}
