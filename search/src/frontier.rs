//! Priority frontier: the open set of a best-first search.
//!
//! Entries are ordered by `(evaluation key, state)`: lowest key first, ties
//! broken by state order. Because at most one entry exists per state, that
//! order is total and pops are fully deterministic.
//!
//! Uses an ordered map plus a state → key index (not a scanned heap), so
//! membership, lookup, and removal are O(log n). `BTreeMap` keeps iteration
//! order deterministic.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::error::SearchError;
use crate::node::NodeId;

/// The ordering key of a frontier entry: lower `f_cost` first, then lower state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierKey<S> {
    f_cost: i64,
    state: S,
}

/// An entry removed from the frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry<S> {
    /// The evaluation key the entry was inserted with.
    pub f_cost: i64,
    /// The entry's state.
    pub state: S,
    /// The search tree node the entry refers to.
    pub node_id: NodeId,
}

/// Min-ordered frontier with at most one entry per state.
#[derive(Debug, Clone)]
pub struct PriorityFrontier<S> {
    ordered: BTreeMap<FrontierKey<S>, NodeId>,
    index: BTreeMap<S, i64>,
    high_water: usize,
}

impl<S: Clone + Ord + Debug> PriorityFrontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ordered: BTreeMap::new(),
            index: BTreeMap::new(),
            high_water: 0,
        }
    }

    /// Insert `state` with evaluation key `f_cost`, referring to `node_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::DuplicateState`] if `state` already has an
    /// entry; the frontier is left unchanged.
    pub fn insert(&mut self, state: S, f_cost: i64, node_id: NodeId) -> Result<(), SearchError> {
        if self.index.contains_key(&state) {
            return Err(SearchError::DuplicateState {
                state: format!("{state:?}"),
            });
        }
        self.index.insert(state.clone(), f_cost);
        self.ordered.insert(FrontierKey { f_cost, state }, node_id);
        self.high_water = self.high_water.max(self.ordered.len());
        Ok(())
    }

    /// Remove and return the entry with the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyFrontier`] if there are no entries.
    pub fn pop_min(&mut self) -> Result<FrontierEntry<S>, SearchError> {
        let (key, node_id) = self.ordered.pop_first().ok_or(SearchError::EmptyFrontier)?;
        self.index.remove(&key.state);
        Ok(FrontierEntry {
            f_cost: key.f_cost,
            state: key.state,
            node_id,
        })
    }

    /// Whether some entry has `state`.
    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    /// The evaluation key of the entry for `state`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::KeyNotFound`] if `state` has no entry.
    pub fn lookup(&self, state: &S) -> Result<i64, SearchError> {
        self.index
            .get(state)
            .copied()
            .ok_or_else(|| SearchError::KeyNotFound {
                state: format!("{state:?}"),
            })
    }

    /// Delete the entry for `state` and return it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::KeyNotFound`] if `state` has no entry.
    pub fn remove(&mut self, state: &S) -> Result<FrontierEntry<S>, SearchError> {
        let not_found = || SearchError::KeyNotFound {
            state: format!("{state:?}"),
        };
        let f_cost = self.index.remove(state).ok_or_else(not_found)?;
        let key = FrontierKey {
            f_cost,
            state: state.clone(),
        };
        let (key, node_id) = self.ordered.remove_entry(&key).ok_or_else(not_found)?;
        Ok(FrontierEntry {
            f_cost: key.f_cost,
            state: key.state,
            node_id,
        })
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<S: Clone + Ord + Debug> Default for PriorityFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}
