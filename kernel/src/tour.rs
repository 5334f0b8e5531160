//! Partial-tour state: which nodes have been visited, where the walk
//! currently stands, and where it started.
//!
//! The visited set is a bitset over the fixed node universe `[0, N)`, so a
//! transition copies `N / 64` words instead of the whole visit history.
//! Closing the tour (returning to `start` once every node is visited) sets
//! a flag rather than inserting a duplicate id.
//!
//! # Observable visited sequence
//!
//! [`TourState::visited`] yields the visited ids in ascending order. Once the
//! tour is closed, `start` is yielded twice, exactly where an ordered insert
//! of the start id would place it. [`TourState::visited_count`] counts that
//! repeat, so a closed tour over `N` nodes has `visited_count() == N + 1`.

use std::cmp::Ordering;

use crate::graph::NodeId;

const WORD_BITS: usize = 64;

/// Typed failure for a tour transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TourError {
    /// The node id is outside the universe `[0, N)`.
    #[error("node {node} is outside node range 0..{node_count}")]
    OutOfRange { node: NodeId, node_count: usize },
    /// The node was already visited and the tour is still open.
    #[error("node {node} already visited")]
    AlreadyVisited { node: NodeId },
    /// The tour has already returned to its start.
    #[error("tour is closed; no further visits allowed")]
    Closed,
}

/// Immutable partial-tour state.
///
/// Equality and hashing cover every field. Ordering is lexicographic on the
/// [`visited`](Self::visited) sequence (a proper prefix sorts first), then
/// `last`, then `start`. States are only ever compared within one instance,
/// where they share `node_count` and therefore bitset width.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TourState {
    words: Box<[u64]>,
    node_count: usize,
    closed: bool,
    last: NodeId,
    start: NodeId,
}

impl TourState {
    /// The initial state: only `start` visited, standing at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::OutOfRange`] if `start >= node_count`.
    pub fn initial(start: NodeId, node_count: usize) -> Result<Self, TourError> {
        if start >= node_count {
            return Err(TourError::OutOfRange {
                node: start,
                node_count,
            });
        }
        let mut words = vec![0u64; node_count.div_ceil(WORD_BITS)].into_boxed_slice();
        words[start / WORD_BITS] |= 1 << (start % WORD_BITS);
        Ok(Self {
            words,
            node_count,
            closed: false,
            last: start,
            start,
        })
    }

    /// Size of the node universe `N`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// The node most recently added.
    #[must_use]
    pub fn last(&self) -> NodeId {
        self.last
    }

    /// The node the tour started from.
    #[must_use]
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Whether the tour has returned to `start` after visiting every node.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether `node` has been visited.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        node < self.node_count && self.words[node / WORD_BITS] & (1 << (node % WORD_BITS)) != 0
    }

    /// Length of the visited sequence, counting the closing return to `start`.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        let distinct: u32 = self.words.iter().map(|w| w.count_ones()).sum();
        distinct as usize + usize::from(self.closed)
    }

    /// Number of nodes not yet visited.
    #[must_use]
    pub fn unvisited_count(&self) -> usize {
        self.node_count - self.visited_count().min(self.node_count)
    }

    /// The visited sequence in ascending order (see module docs).
    pub fn visited(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.members().flat_map(move |node| {
            let repeat = if self.closed && node == self.start { 2 } else { 1 };
            std::iter::repeat(node).take(repeat)
        })
    }

    /// Ids not yet visited, ascending.
    pub fn unvisited(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count).filter(move |&node| !self.contains(node))
    }

    /// The state after walking to `node`.
    ///
    /// Walking to `start` once every node is visited closes the tour.
    ///
    /// # Errors
    ///
    /// - [`TourError::Closed`] if the tour is already closed.
    /// - [`TourError::OutOfRange`] if `node >= N`.
    /// - [`TourError::AlreadyVisited`] if `node` was visited and this is not
    ///   the closing return to `start`.
    pub fn with_visit(&self, node: NodeId) -> Result<Self, TourError> {
        if self.closed {
            return Err(TourError::Closed);
        }
        if node >= self.node_count {
            return Err(TourError::OutOfRange {
                node,
                node_count: self.node_count,
            });
        }
        let mut next = self.clone();
        next.last = node;
        if self.contains(node) {
            if node == self.start && self.visited_count() == self.node_count {
                next.closed = true;
                return Ok(next);
            }
            return Err(TourError::AlreadyVisited { node });
        }
        next.words[node / WORD_BITS] |= 1 << (node % WORD_BITS);
        Ok(next)
    }

    fn members(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.words.iter().enumerate().flat_map(|(index, &word)| {
            let mut remaining = word;
            std::iter::from_fn(move || {
                if remaining == 0 {
                    return None;
                }
                let bit = remaining.trailing_zeros() as usize;
                remaining &= remaining - 1;
                Some(index * WORD_BITS + bit)
            })
        })
    }
}

impl PartialOrd for TourState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TourState {
    fn cmp(&self, other: &Self) -> Ordering {
        self.visited()
            .cmp(other.visited())
            .then(self.last.cmp(&other.last))
            .then(self.start.cmp(&other.start))
    }
}
