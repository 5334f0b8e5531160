//! TSP Kernel: the immutable data layer under the tour search.
//!
//! # API Surface
//!
//! - [`graph::CostMatrix`] -- square integer cost matrix with edge lookup
//! - [`tour::TourState`] -- immutable partial-tour state over a fixed node universe
//! - [`hash::canonical_hash`] -- domain-separated SHA-256 content digests
//!
//! # Module Dependency Direction
//!
//! `hash` ← `graph` ← `tour`
//!
//! One-way only. `tour` only borrows the node id type from `graph`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod graph;
pub mod hash;
pub mod tour;
