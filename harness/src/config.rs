//! Run configuration for the `tour-search` binary and the runner.

use std::path::PathBuf;

use tsp_kernel::graph::NodeId;

/// Default result file name.
pub const DEFAULT_OUTPUT: &str = "A_cheapestEdge.csv";

/// How the start node is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartNode {
    /// Use this node.
    Fixed(NodeId),
    /// Uniformly random over `[0, N)`; a seed makes the choice reproducible.
    Random { seed: Option<u64> },
}

impl Default for StartNode {
    fn default() -> Self {
        Self::Random { seed: None }
    }
}

/// Everything one run needs besides the matrix itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Instance file; `None` reads standard input.
    pub input: Option<PathBuf>,
    /// Result file for the report line.
    pub output: PathBuf,
    /// Optional JSON summary path.
    pub json: Option<PathBuf>,
    /// Start node selection.
    pub start: StartNode,
    /// Cross-check the result against brute-force enumeration.
    pub verify: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            json: None,
            start: StartNode::default(),
            verify: false,
        }
    }
}
