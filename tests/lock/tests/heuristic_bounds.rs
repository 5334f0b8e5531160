//! Cheapest-edge heuristic lock tests.
//!
//! Proves, over every reachable state of small instances:
//! 1. The estimate is never negative on non-negative matrices
//! 2. Symmetric matrices: the estimate never exceeds the exact completion cost
//! 3. Symmetric matrices: the estimate is consistent along every edge
//! 4. Closed tours estimate to zero; full open tours estimate the return edge
//! 5. Asymmetric matrices: the estimate can overestimate

use std::collections::BTreeSet;

use lock_tests::{lopsided_triangle, random_asymmetric, random_symmetric, square_symmetric};
use tsp_harness::heuristic::CheapestEdgeHeuristic;
use tsp_harness::oracle::optimal_completion;
use tsp_harness::problem::TourProblem;
use tsp_kernel::graph::CostMatrix;
use tsp_kernel::tour::TourState;
use tsp_search::contract::SearchProblem;

/// Every state reachable from `start`, in ascending order.
fn reachable_states(problem: &TourProblem) -> BTreeSet<TourState> {
    let mut seen = BTreeSet::new();
    let mut pending = vec![problem.initial_state()];
    while let Some(state) = pending.pop() {
        for action in problem.actions(&state) {
            let next = problem.result(&state, &action).unwrap();
            if !seen.contains(&next) {
                pending.push(next);
            }
        }
        seen.insert(state);
    }
    seen
}

fn admissible_everywhere(matrix: &CostMatrix) {
    let heuristic = CheapestEdgeHeuristic::new(matrix);
    for start in 0..matrix.node_count() {
        let problem = TourProblem::new(matrix.clone(), start).unwrap();
        for state in reachable_states(&problem) {
            let h = heuristic.completion_estimate(matrix, &state);
            let exact = optimal_completion(matrix, &state).unwrap();
            assert!(h >= 0, "negative estimate {h} at {state:?}");
            assert!(h <= exact, "estimate {h} > exact {exact} at {state:?}");
        }
    }
}

#[test]
fn symmetric_estimates_are_admissible() {
    admissible_everywhere(&square_symmetric());
    for seed in 0..6 {
        admissible_everywhere(&random_symmetric(6, seed, 40));
    }
}

#[test]
fn symmetric_estimates_are_consistent() {
    let matrix = random_symmetric(6, 7, 40);
    let heuristic = CheapestEdgeHeuristic::new(&matrix);
    let problem = TourProblem::new(matrix.clone(), 2).unwrap();
    for state in reachable_states(&problem) {
        let h = heuristic.completion_estimate(&matrix, &state);
        for action in problem.actions(&state) {
            let next = problem.result(&state, &action).unwrap();
            let step = problem.path_cost(0, &state, &action, &next);
            let h_next = heuristic.completion_estimate(&matrix, &next);
            assert!(h <= step + h_next, "inconsistent at {state:?} -> {action}");
        }
    }
}

#[test]
fn asymmetric_estimates_are_non_negative() {
    let matrix = random_asymmetric(5, 3, 30);
    let heuristic = CheapestEdgeHeuristic::new(&matrix);
    let problem = TourProblem::new(matrix.clone(), 0).unwrap();
    for state in reachable_states(&problem) {
        assert!(heuristic.completion_estimate(&matrix, &state) >= 0);
    }
}

#[test]
fn boundary_estimates() {
    let matrix = square_symmetric();
    let heuristic = CheapestEdgeHeuristic::new(&matrix);
    let full = TourState::initial(0, 4)
        .and_then(|s| s.with_visit(1))
        .and_then(|s| s.with_visit(2))
        .and_then(|s| s.with_visit(3))
        .unwrap();
    assert_eq!(heuristic.completion_estimate(&matrix, &full), 4);
    let closed = full.with_visit(0).unwrap();
    assert_eq!(heuristic.completion_estimate(&matrix, &closed), 0);
}

#[test]
fn lopsided_triangle_overestimates() {
    let matrix = lopsided_triangle();
    let heuristic = CheapestEdgeHeuristic::new(&matrix);
    let initial = TourState::initial(0, 3).unwrap();
    assert_eq!(heuristic.completion_estimate(&matrix, &initial), 20);
    assert_eq!(optimal_completion(&matrix, &initial).unwrap(), 12);
}
