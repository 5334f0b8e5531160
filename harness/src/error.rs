//! Harness-level failures.

use tsp_kernel::graph::NodeId;
use tsp_kernel::tour::TourError;
use tsp_search::error::SearchError;

use crate::instance::InstanceError;

/// Typed failure for loading, running, and reporting a tour search.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The instance text did not parse.
    #[error("instance: {0}")]
    Instance(#[from] InstanceError),
    /// The initial tour could not be built.
    #[error("tour: {0}")]
    Tour(#[from] TourError),
    /// The search engine hit an internal-consistency failure.
    #[error("search: {0}")]
    Search(#[from] SearchError),
    /// The requested start node does not exist.
    #[error("start node {start} outside node range 0..{node_count}")]
    StartOutOfRange { start: NodeId, node_count: usize },
    /// The frontier drained without closing a tour.
    #[error("search exhausted after expanding {expanded} states without closing a tour")]
    SearchExhausted { expanded: u64 },
    /// The process CPU clock could not be read.
    #[error("cpu clock unavailable: {0}")]
    Clock(std::io::Error),
    /// Reading input or writing a result failed.
    #[error("i/o on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The JSON summary could not be serialized.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    /// The oracle refused an instance too large to enumerate.
    #[error("brute-force verification limited to {limit} nodes, instance has {node_count}")]
    OracleTooLarge { limit: usize, node_count: usize },
    /// The search result disagrees with the brute-force optimum.
    #[error("search cost {search_cost} differs from brute-force optimum {optimal_cost}")]
    VerificationFailed { search_cost: i64, optimal_cost: i64 },
}
