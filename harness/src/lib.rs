//! TSP Harness: the tour world and everything around one search run.
//!
//! The harness formulates the travelling-salesman problem for the generic
//! search engine (`problem`, `heuristic`), loads instances (`instance`),
//! runs and times the search (`runner`), reports results (`report`), and
//! cross-checks small instances by enumeration (`oracle`).
//!
//! The harness does NOT implement search logic; it delegates to
//! `tsp_search`. Matrix and tour-state representation belong to `tsp_kernel`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod heuristic;
pub mod instance;
pub mod oracle;
pub mod problem;
pub mod report;
pub mod runner;
