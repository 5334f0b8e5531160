//! Heuristic estimate types and traits.

use crate::contract::SearchProblem;

/// Estimate of the remaining cost from a state to a goal.
///
/// Implementations must be pure: the same `(problem, state)` always yields
/// the same estimate. The driver caches `g + h` on each node and compares
/// cached values, so a stateful heuristic would silently corrupt
/// replace-on-improve decisions.
pub trait Heuristic<P: SearchProblem + ?Sized> {
    /// Estimated cost to complete from `state`. Must be non-negative.
    fn estimate(&self, problem: &P, state: &P::State) -> i64;
}

/// Heuristic that always estimates zero, turning A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<P: SearchProblem + ?Sized> Heuristic<P> for ZeroHeuristic {
    fn estimate(&self, _problem: &P, _state: &P::State) -> i64 {
        0
    }
}
