//! Search entry points and expansion loop.

use std::collections::BTreeSet;

use crate::contract::SearchProblem;
use crate::error::SearchError;
use crate::frontier::PriorityFrontier;
use crate::heuristic::{Heuristic, ZeroHeuristic};
use crate::node::{NodeId, SearchNode, SearchTree};

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A node whose state passes the goal test was popped from the frontier.
    GoalReached { node_id: NodeId },
    /// The frontier drained without reaching a goal.
    FrontierExhausted,
}

/// Counters collected over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States added to the explored set.
    pub expanded: u64,
    /// Child nodes created by expansion.
    pub generated: u64,
    /// Children inserted into the frontier as new entries.
    pub inserted: u64,
    /// Children that replaced a worse frontier entry for the same state.
    pub replaced: u64,
    /// Children dropped because their state was explored or already queued
    /// at least as cheaply.
    pub discarded: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

/// Result of a search execution.
///
/// Holds the complete node tree regardless of how the search terminated.
/// Check [`SearchResult::is_goal_reached`] or inspect `termination_reason`
/// to determine the outcome.
#[derive(Debug, Clone)]
pub struct SearchResult<S, A> {
    /// Every node created during the search, indexed by `node_id`.
    pub tree: SearchTree<S, A>,
    /// Why the search stopped.
    pub termination_reason: TerminationReason,
    /// Number of states in the explored set at termination.
    pub expanded_count: u64,
    /// Expansion counters.
    pub stats: SearchStats,
}

impl<S: Clone, A: Clone> SearchResult<S, A> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination_reason, TerminationReason::GoalReached { .. })
    }

    /// The goal node, if one was reached.
    #[must_use]
    pub fn goal_node(&self) -> Option<&SearchNode<S, A>> {
        match self.termination_reason {
            TerminationReason::GoalReached { node_id } => self.tree.get(node_id),
            TerminationReason::FrontierExhausted => None,
        }
    }

    /// Actions from the root to the goal, if one was reached.
    #[must_use]
    pub fn solution(&self) -> Option<Vec<A>> {
        self.goal_node().map(|goal| self.tree.solution(goal.node_id))
    }

    /// Path cost of the goal node, if one was reached.
    #[must_use]
    pub fn path_cost(&self) -> Option<i64> {
        self.goal_node().map(|goal| goal.path_cost)
    }
}

/// Search the nodes with the lowest `f` first.
///
/// `f` is evaluated at most once per node; the value is cached on the node
/// and that cached value is what replace-on-improve compares against.
///
/// Each iteration pops the minimum entry, stops if its state is a goal,
/// otherwise marks the state explored and expands it. A child is inserted
/// if its state is neither explored nor queued, replaces the queued entry
/// for its state if its `f` is strictly lower, and is discarded otherwise.
/// Explored states are never reopened.
///
/// # Errors
///
/// Propagates internal-consistency failures ([`SearchError::InvalidAction`]
/// from the problem, frontier errors). Draining the frontier is not an error;
/// it yields [`TerminationReason::FrontierExhausted`].
pub fn best_first_search<P, F>(
    problem: &P,
    f: F,
) -> Result<SearchResult<P::State, P::Action>, SearchError>
where
    P: SearchProblem + ?Sized,
    F: Fn(&SearchNode<P::State, P::Action>) -> i64,
{
    let mut tree = SearchTree::new(problem.initial_state());
    let mut frontier = PriorityFrontier::new();
    let mut explored: BTreeSet<P::State> = BTreeSet::new();
    let mut stats = SearchStats::default();

    let root = tree.root();
    frontier.insert(root.state.clone(), root.evaluation(&f), root.node_id)?;

    let termination_reason = loop {
        if frontier.is_empty() {
            break TerminationReason::FrontierExhausted;
        }

        let current = frontier.pop_min()?;
        if problem.goal_test(&current.state) {
            break TerminationReason::GoalReached {
                node_id: current.node_id,
            };
        }
        tracing::trace!(
            node_id = current.node_id,
            f_cost = current.f_cost,
            frontier = frontier.len(),
            "expanding"
        );

        let children = tree.expand(current.node_id, problem)?;
        explored.insert(current.state);
        stats.generated += children.len() as u64;

        for child_id in children {
            let Some(child) = tree.get(child_id) else {
                return Err(SearchError::KeyNotFound {
                    state: format!("node #{child_id}"),
                });
            };
            if explored.contains(&child.state) {
                stats.discarded += 1;
            } else if !frontier.contains(&child.state) {
                frontier.insert(child.state.clone(), child.evaluation(&f), child_id)?;
                stats.inserted += 1;
            } else if child.evaluation(&f) < frontier.lookup(&child.state)? {
                frontier.remove(&child.state)?;
                frontier.insert(child.state.clone(), child.evaluation(&f), child_id)?;
                stats.replaced += 1;
            } else {
                stats.discarded += 1;
            }
        }
    };

    let expanded_count = explored.len() as u64;
    stats.expanded = expanded_count;
    stats.frontier_high_water = frontier.high_water() as u64;

    tracing::debug!(
        ?termination_reason,
        expanded = stats.expanded,
        generated = stats.generated,
        replaced = stats.replaced,
        discarded = stats.discarded,
        nodes = tree.len(),
        "search finished"
    );

    Ok(SearchResult {
        tree,
        termination_reason,
        expanded_count,
        stats,
    })
}

/// A* search: best-first with `f(node) = path_cost + heuristic(state)`.
///
/// # Errors
///
/// See [`best_first_search`].
pub fn astar_search<P, H>(
    problem: &P,
    heuristic: &H,
) -> Result<SearchResult<P::State, P::Action>, SearchError>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    best_first_search(problem, |node| {
        node.path_cost + heuristic.estimate(problem, &node.state)
    })
}

/// Uniform-cost search: A* with a zero heuristic.
///
/// # Errors
///
/// See [`best_first_search`].
pub fn uniform_cost_search<P>(problem: &P) -> Result<SearchResult<P::State, P::Action>, SearchError>
where
    P: SearchProblem + ?Sized,
{
    astar_search(problem, &ZeroHeuristic)
}
