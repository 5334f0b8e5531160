//! Shared helpers for the tour search benchmark suites.

#![forbid(unsafe_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsp_kernel::graph::{Cost, CostMatrix};
use tsp_kernel::tour::{TourError, TourState};

/// Weight symmetry of a generated instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symmetry {
    Symmetric,
    Asymmetric,
}

/// A named benchmark instance.
pub struct Regime {
    pub name: String,
    pub matrix: CostMatrix,
}

/// A seeded instance with weights in `[1, 100]` and a zero diagonal.
///
/// # Panics
///
/// Panics if `node_count` is zero.
#[must_use]
pub fn generate_instance(node_count: usize, seed: u64, symmetry: Symmetry) -> CostMatrix {
    assert!(node_count > 0, "instances need at least one node");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows: Vec<Vec<Cost>> = vec![vec![0; node_count]; node_count];
    for x in 0..node_count {
        for y in 0..node_count {
            if x == y || (symmetry == Symmetry::Symmetric && y < x) {
                continue;
            }
            let w = rng.gen_range(1..=100);
            rows[x][y] = w;
            if symmetry == Symmetry::Symmetric {
                rows[y][x] = w;
            }
        }
    }
    match CostMatrix::from_rows(rows) {
        Ok(matrix) => matrix,
        Err(e) => panic!("generated matrix is not square: {e}"),
    }
}

/// Symmetric and asymmetric instances for each size in `sizes`.
#[must_use]
pub fn regimes(sizes: &[usize]) -> Vec<Regime> {
    sizes
        .iter()
        .flat_map(|&n| {
            [
                (Symmetry::Symmetric, "sym"),
                (Symmetry::Asymmetric, "asym"),
            ]
            .map(|(symmetry, label)| Regime {
                name: format!("{label}_n{n}"),
                matrix: generate_instance(n, n as u64, symmetry),
            })
        })
        .collect()
}

/// A partial tour of `n` nodes from `0` that has walked `1, 2, ..., depth`.
///
/// # Panics
///
/// Panics if `depth >= n`.
#[must_use]
pub fn partial_tour(n: usize, depth: usize) -> TourState {
    let walk = || -> Result<TourState, TourError> {
        (1..=depth).try_fold(TourState::initial(0, n)?, |state, node| state.with_visit(node))
    };
    walk().unwrap_or_else(|e| panic!("partial tour of depth {depth} over {n} nodes: {e}"))
}
