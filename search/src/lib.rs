//! TSP Search: deterministic best-first / A* graph search.
//!
//! The engine is generic over any [`SearchProblem`](contract::SearchProblem);
//! the tour problem itself lives in `tsp_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! tsp_search  ←  tsp_harness  →  tsp_kernel
//! (engine)       (tour world)     (matrix, tour state)
//! ```
//!
//! # Key types
//!
//! - [`SearchProblem`](contract::SearchProblem) -- states, actions, goal test, path cost
//! - [`SearchNode`](node::SearchNode) / [`SearchTree`](node::SearchTree) -- arena-backed search tree
//! - [`PriorityFrontier`](frontier::PriorityFrontier) -- min-ordered open set, one entry per state
//! - [`Heuristic`](heuristic::Heuristic) -- remaining-cost estimate for A*
//! - [`SearchResult`](search::SearchResult) -- node tree, termination reason, expanded count

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod search;
