//! Result reporting: the one-line text report and the JSON summary.
//!
//! # Text report
//!
//! ```text
//! Cost: <cost> Nodes Expanded: <count> CPU Runtime: <seconds> Real Runtime: <seconds>
//! ```
//!
//! Written without a trailing newline to the result file, and as a line to
//! standard output.

use std::path::Path;

use serde::Serialize;
use tsp_kernel::graph::{Cost, NodeId};
use tsp_kernel::hash::{canonical_hash, DOMAIN_TOUR};

use crate::error::HarnessError;
use crate::runner::TourRun;

/// The four reported fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourReport {
    pub cost: Cost,
    pub nodes_expanded: u64,
    pub cpu_runtime_secs: f64,
    pub real_runtime_secs: f64,
}

impl From<&TourRun> for TourReport {
    fn from(run: &TourRun) -> Self {
        Self {
            cost: run.cost,
            nodes_expanded: run.expanded,
            cpu_runtime_secs: run.cpu_runtime.as_secs_f64(),
            real_runtime_secs: run.real_runtime.as_secs_f64(),
        }
    }
}

impl std::fmt::Display for TourReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cost: {} Nodes Expanded: {} CPU Runtime: {} Real Runtime: {}",
            self.cost, self.nodes_expanded, self.cpu_runtime_secs, self.real_runtime_secs
        )
    }
}

impl TourReport {
    /// Write the report line to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Io`] if the file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<(), HarnessError> {
        std::fs::write(path, self.to_string()).map_err(|source| HarnessError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Machine-readable summary of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourSummary {
    pub matrix_digest: String,
    pub tour_digest: String,
    pub start: NodeId,
    pub tour: Vec<NodeId>,
    pub cost: Cost,
    pub nodes_expanded: u64,
    pub nodes_generated: u64,
    pub frontier_inserted: u64,
    pub frontier_replaced: u64,
    pub discarded: u64,
    pub frontier_high_water: u64,
    pub cpu_runtime_secs: f64,
    pub real_runtime_secs: f64,
    /// Brute-force optimum, when verification ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_optimal_cost: Option<Cost>,
}

impl TourSummary {
    /// Summarize `run`, optionally recording a verified optimum.
    #[must_use]
    pub fn new(run: &TourRun, verified_optimal_cost: Option<Cost>) -> Self {
        Self {
            matrix_digest: run.matrix_digest.as_str().to_string(),
            tour_digest: tour_digest(run.start, &run.tour),
            start: run.start,
            tour: run.tour.clone(),
            cost: run.cost,
            nodes_expanded: run.expanded,
            nodes_generated: run.stats.generated,
            frontier_inserted: run.stats.inserted,
            frontier_replaced: run.stats.replaced,
            discarded: run.stats.discarded,
            frontier_high_water: run.stats.frontier_high_water,
            cpu_runtime_secs: run.cpu_runtime.as_secs_f64(),
            real_runtime_secs: run.real_runtime.as_secs_f64(),
            verified_optimal_cost,
        }
    }

    /// Write the summary as pretty JSON to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Json`] or [`HarnessError::Io`].
    pub fn write_to(&self, path: &Path) -> Result<(), HarnessError> {
        let bytes = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, bytes).map_err(|source| HarnessError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Digest of `start` followed by the visit order, each as u64 LE.
#[must_use]
pub fn tour_digest(start: NodeId, tour: &[NodeId]) -> String {
    let bytes: Vec<u8> = std::iter::once(start)
        .chain(tour.iter().copied())
        .flat_map(|node| (node as u64).to_le_bytes())
        .collect();
    canonical_hash(DOMAIN_TOUR, &bytes).as_str().to_string()
}
