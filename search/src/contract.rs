//! Search problem contract trait.

use std::fmt::Debug;

use crate::error::SearchError;

/// A formal problem the driver can search.
///
/// # Contract
///
/// - `actions` must be deterministic: same state → same actions in the same
///   order.
/// - `result` must accept every action returned by `actions` for that state;
///   any other action may be rejected with [`SearchError::InvalidAction`].
/// - States are values: `result` returns a new state and never mutates its
///   input.
/// - `path_cost` is the cost of the path ending in `to`, given cost `g` up
///   to `from`.
pub trait SearchProblem {
    /// A point in the state space. Ordering breaks frontier ties.
    type State: Clone + Ord + Debug;
    /// A transition label recorded on each node.
    type Action: Clone + Debug;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Actions executable in `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by executing `action` in `state`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidAction`] if `action` is not legal in `state`.
    fn result(
        &self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, SearchError>;

    /// Whether `state` is a goal.
    fn goal_test(&self, state: &Self::State) -> bool;

    /// Cost of reaching `to` from `from` via `action`, given cost `g` up to
    /// `from`. Defaults to unit step cost.
    fn path_cost(
        &self,
        g: i64,
        _from: &Self::State,
        _action: &Self::Action,
        _to: &Self::State,
    ) -> i64 {
        g + 1
    }
}
