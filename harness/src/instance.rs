//! Cost matrix loader.
//!
//! # Text format
//!
//! ```text
//! 3
//! 0, 1, 2
//! 1, 0, 3
//! 2, 3, 0
//! ```
//!
//! The first line is `N`; the next `N` lines each hold `N` integers separated
//! by commas (spaces around them are ignored). Anything after row `N` is
//! ignored.

use std::io::Read;
use std::path::Path;

use tsp_kernel::graph::{Cost, CostMatrix, GraphError};

use crate::error::HarnessError;

/// Typed failure for instance parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstanceError {
    /// The input has no header line.
    #[error("missing node count header")]
    MissingHeader,
    /// The header is not a non-negative integer.
    #[error("invalid node count header: {line:?}")]
    BadHeader { line: String },
    /// Fewer than `N` rows follow the header.
    #[error("expected {expected} matrix rows, found {found}")]
    MissingRow { expected: usize, found: usize },
    /// A row has the wrong number of entries.
    #[error("row {row} has {actual} entries, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// An entry is not an integer.
    #[error("row {row} column {column}: invalid weight {token:?}")]
    BadWeight {
        row: usize,
        column: usize,
        token: String,
    },
    /// The matrix itself is unusable.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Parse a cost matrix from its text form.
///
/// # Errors
///
/// Returns an [`InstanceError`] describing the first malformed line.
pub fn parse_cost_matrix(text: &str) -> Result<CostMatrix, InstanceError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(InstanceError::MissingHeader)?;
    let node_count: usize = header.trim().parse().map_err(|_| InstanceError::BadHeader {
        line: header.to_string(),
    })?;

    // The header is untrusted; size by the lines actually present.
    let mut rows = Vec::with_capacity(node_count.min(text.lines().count()));
    for row in 0..node_count {
        let line = lines.next().ok_or(InstanceError::MissingRow {
            expected: node_count,
            found: row,
        })?;
        let values = parse_row(row, line)?;
        if values.len() != node_count {
            return Err(InstanceError::RowLength {
                row,
                expected: node_count,
                actual: values.len(),
            });
        }
        rows.push(values);
    }

    Ok(CostMatrix::from_rows(rows)?)
}

fn parse_row(row: usize, line: &str) -> Result<Vec<Cost>, InstanceError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Vec::new());
    }
    line.split(',')
        .enumerate()
        .map(|(column, token)| {
            token.trim().parse().map_err(|_| InstanceError::BadWeight {
                row,
                column,
                token: token.trim().to_string(),
            })
        })
        .collect()
}

/// Read and parse a cost matrix from a file.
///
/// # Errors
///
/// Returns [`HarnessError::Io`] if the file cannot be read and
/// [`HarnessError::Instance`] if it does not parse.
pub fn load_cost_matrix(path: &Path) -> Result<CostMatrix, HarnessError> {
    let text = std::fs::read_to_string(path).map_err(|source| HarnessError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_cost_matrix(&text)?)
}

/// Read and parse a cost matrix from any reader (e.g. standard input).
///
/// # Errors
///
/// See [`load_cost_matrix`].
pub fn read_cost_matrix(
    mut reader: impl Read,
    label: &str,
) -> Result<CostMatrix, HarnessError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| HarnessError::Io {
            path: label.to_string(),
            source,
        })?;
    Ok(parse_cost_matrix(&text)?)
}
