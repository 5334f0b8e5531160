//! Graph model: an immutable square cost matrix over nodes `[0, N)`.
//!
//! `matrix[i][j]` is the cost of travelling from `i` to `j`. The matrix is
//! not required to be symmetric.
//!
//! Every weight satisfies `|w| <= weight_limit(N)`, so any sum of up to
//! `2 * (N + 1)` weights (a path cost plus a completion estimate) fits in
//! [`Cost`].

use crate::hash::{canonical_hash, ContentHash, DOMAIN_COST_MATRIX};

/// Node identifier: an index into `[0, N)`.
pub type NodeId = usize;

/// Edge and path cost. Integer so that costs compare exactly.
pub type Cost = i64;

/// Typed failure for cost matrix construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The matrix has no rows.
    #[error("cost matrix is empty")]
    Empty,
    /// A row does not have exactly `N` entries.
    #[error("cost matrix row {row} has {actual} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A weight is too large for path sums over `N` nodes to stay in range.
    #[error("cost matrix weight {weight} at ({row}, {column}) exceeds the limit of +/-{limit} for this size")]
    WeightOutOfRange {
        row: usize,
        column: usize,
        weight: Cost,
        limit: Cost,
    },
}

/// Largest weight magnitude accepted for a matrix of `node_count` nodes:
/// `i64::MAX / (2 * (N + 1))`.
#[must_use]
pub fn weight_limit(node_count: usize) -> Cost {
    let terms = u64::try_from(node_count)
        .unwrap_or(u64::MAX)
        .saturating_add(1)
        .saturating_mul(2);
    Cost::MAX / Cost::try_from(terms).unwrap_or(Cost::MAX)
}

/// Immutable `N x N` cost matrix, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    node_count: usize,
    weights: Vec<Cost>,
}

impl CostMatrix {
    /// Build a matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Empty`] for zero rows,
    /// [`GraphError::NotSquare`] if any row length differs from the row count,
    /// and [`GraphError::WeightOutOfRange`] for a weight beyond
    /// [`weight_limit`].
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Self, GraphError> {
        let node_count = rows.len();
        if node_count == 0 {
            return Err(GraphError::Empty);
        }
        let limit = weight_limit(node_count);
        let mut weights = Vec::with_capacity(node_count * node_count);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != node_count {
                return Err(GraphError::NotSquare {
                    row,
                    expected: node_count,
                    actual: values.len(),
                });
            }
            let too_large = values.iter().position(|w| w.unsigned_abs() > limit.unsigned_abs());
            if let Some(column) = too_large {
                return Err(GraphError::WeightOutOfRange {
                    row,
                    column,
                    weight: values[column],
                    limit,
                });
            }
            weights.extend(values);
        }
        Ok(Self {
            node_count,
            weights,
        })
    }

    /// Number of nodes `N`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Cost of the edge `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics if either id is outside `[0, N)`.
    #[must_use]
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Cost {
        assert!(
            from < self.node_count && to < self.node_count,
            "edge ({from}, {to}) outside node range 0..{}",
            self.node_count
        );
        self.weights[from * self.node_count + to]
    }

    /// The outgoing costs of `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is outside `[0, N)`.
    #[must_use]
    pub fn row(&self, from: NodeId) -> &[Cost] {
        let start = from * self.node_count;
        &self.weights[start..start + self.node_count]
    }

    /// Whether `matrix[i][j] == matrix[j][i]` for every pair.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (0..self.node_count)
            .all(|i| (i + 1..self.node_count).all(|j| self.edge_weight(i, j) == self.edge_weight(j, i)))
    }

    /// Canonical bytes: `N` as u64 LE followed by every weight as i64 LE, row-major.
    #[must_use]
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.weights.len() * 8);
        bytes.extend_from_slice(&(self.node_count as u64).to_le_bytes());
        for w in &self.weights {
            bytes.extend_from_slice(&w.to_le_bytes());
        }
        bytes
    }

    /// Content digest of the matrix, binding reports to their instance.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(DOMAIN_COST_MATRIX, &self.canonical_bytes())
    }

    /// Total cost of the closed tour `start -> tour[0] -> ... -> tour[last]`.
    ///
    /// `tour` is an action sequence as produced by the search, so a closed
    /// tour ends with `start`.
    ///
    /// # Panics
    ///
    /// Panics if any id is outside `[0, N)`.
    #[must_use]
    pub fn walk_cost(&self, start: NodeId, tour: &[NodeId]) -> Cost {
        let mut at = start;
        let mut total = 0;
        for &next in tour {
            total += self.edge_weight(at, next);
            at = next;
        }
        total
    }
}
