//! Brute-force tour oracle for verifying search results on small instances.
//!
//! Enumerates every ordering of the unvisited nodes, so cost grows as
//! `(N - 1)!`. Refuses instances above [`ORACLE_NODE_LIMIT`].

use tsp_kernel::graph::{Cost, CostMatrix, NodeId};
use tsp_kernel::tour::TourState;

use crate::error::HarnessError;

/// Largest instance the oracle will enumerate.
pub const ORACLE_NODE_LIMIT: usize = 10;

/// An optimal closed tour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimalTour {
    /// Total cost, including the return to start.
    pub cost: Cost,
    /// Visit order after the start node, ending with the start node.
    pub tour: Vec<NodeId>,
}

/// The cheapest closed tour from `start`.
///
/// Among equally cheap tours the lexicographically smallest visit order wins.
///
/// # Errors
///
/// Returns [`HarnessError::OracleTooLarge`] above [`ORACLE_NODE_LIMIT`] nodes
/// and [`HarnessError::Tour`] if `start` is out of range.
pub fn brute_force_tour(matrix: &CostMatrix, start: NodeId) -> Result<OptimalTour, HarnessError> {
    check_size(matrix)?;
    let state = TourState::initial(start, matrix.node_count())?;
    let mut remaining: Vec<NodeId> = state.unvisited().collect();
    let (cost, tour) = cheapest_completion(matrix, start, start, &mut remaining);
    Ok(OptimalTour { cost, tour })
}

/// The exact cheapest cost to finish the tour from `state`.
///
/// # Errors
///
/// Returns [`HarnessError::OracleTooLarge`] above [`ORACLE_NODE_LIMIT`] nodes.
pub fn optimal_completion(matrix: &CostMatrix, state: &TourState) -> Result<Cost, HarnessError> {
    check_size(matrix)?;
    if state.is_closed() {
        return Ok(0);
    }
    let mut remaining: Vec<NodeId> = state.unvisited().collect();
    Ok(cheapest_completion(matrix, state.last(), state.start(), &mut remaining).0)
}

/// Check a search cost against the brute-force optimum.
///
/// # Errors
///
/// Returns [`HarnessError::VerificationFailed`] on disagreement, or any
/// error from [`brute_force_tour`].
pub fn verify_cost(
    matrix: &CostMatrix,
    start: NodeId,
    search_cost: Cost,
) -> Result<OptimalTour, HarnessError> {
    let optimal = brute_force_tour(matrix, start)?;
    if optimal.cost != search_cost {
        return Err(HarnessError::VerificationFailed {
            search_cost,
            optimal_cost: optimal.cost,
        });
    }
    Ok(optimal)
}

fn check_size(matrix: &CostMatrix) -> Result<(), HarnessError> {
    if matrix.node_count() > ORACLE_NODE_LIMIT {
        return Err(HarnessError::OracleTooLarge {
            limit: ORACLE_NODE_LIMIT,
            node_count: matrix.node_count(),
        });
    }
    Ok(())
}

/// Cheapest walk `at -> (all of remaining) -> start`. `remaining` is restored
/// before returning.
fn cheapest_completion(
    matrix: &CostMatrix,
    at: NodeId,
    start: NodeId,
    remaining: &mut Vec<NodeId>,
) -> (Cost, Vec<NodeId>) {
    (0..remaining.len())
        .map(|i| {
            let next = remaining.remove(i);
            let (rest_cost, rest) = cheapest_completion(matrix, next, start, remaining);
            remaining.insert(i, next);
            let mut tour = Vec::with_capacity(rest.len() + 1);
            tour.push(next);
            tour.extend(rest);
            (matrix.edge_weight(at, next) + rest_cost, tour)
        })
        .min_by_key(|(cost, _)| *cost)
        .unwrap_or_else(|| (matrix.edge_weight(at, start), vec![start]))
}
