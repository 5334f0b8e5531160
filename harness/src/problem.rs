//! `TourProblem`: the travelling-salesman problem as a search problem.
//!
//! States are partial tours. From an open tour every unvisited node is an
//! action; once all `N` nodes are visited the only action is returning to
//! `start`, which closes the tour and reaches the goal.

use tsp_kernel::graph::{Cost, CostMatrix, NodeId};
use tsp_kernel::tour::TourState;
use tsp_search::contract::SearchProblem;
use tsp_search::error::SearchError;

use crate::error::HarnessError;

/// Tour search over a cost matrix from a fixed start node.
#[derive(Debug, Clone)]
pub struct TourProblem {
    matrix: CostMatrix,
    initial: TourState,
}

impl TourProblem {
    /// Create the problem of touring `matrix` from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::StartOutOfRange`] if `start >= N`.
    /// Returns [`HarnessError::Tour`] if the initial tour cannot be built.
    pub fn new(matrix: CostMatrix, start: NodeId) -> Result<Self, HarnessError> {
        if start >= matrix.node_count() {
            return Err(HarnessError::StartOutOfRange {
                start,
                node_count: matrix.node_count(),
            });
        }
        let initial = TourState::initial(start, matrix.node_count())?;
        Ok(Self { matrix, initial })
    }

    /// The cost matrix being toured.
    #[must_use]
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// The start node.
    #[must_use]
    pub fn start(&self) -> NodeId {
        self.initial.start()
    }

    /// Number of nodes `N`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.matrix.node_count()
    }
}

impl SearchProblem for TourProblem {
    type State = TourState;
    type Action = NodeId;

    fn initial_state(&self) -> TourState {
        self.initial.clone()
    }

    fn actions(&self, state: &TourState) -> Vec<NodeId> {
        let n = self.node_count();
        match state.visited_count() {
            k if k < n => state.unvisited().collect(),
            k if k == n => vec![state.start()],
            _ => Vec::new(),
        }
    }

    fn result(&self, state: &TourState, action: &NodeId) -> Result<TourState, SearchError> {
        state
            .with_visit(*action)
            .map_err(|e| SearchError::InvalidAction {
                detail: e.to_string(),
            })
    }

    fn goal_test(&self, state: &TourState) -> bool {
        state.visited_count() == self.node_count() + 1
    }

    fn path_cost(&self, g: Cost, from: &TourState, action: &NodeId, _to: &TourState) -> Cost {
        g + self.matrix.edge_weight(from.last(), *action)
    }
}
