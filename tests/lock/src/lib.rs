//! Shared instances for the lock tests and the `tour_fixture` binary.

#![forbid(unsafe_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsp_kernel::graph::{Cost, CostMatrix};

/// Three nodes; both tour directions cost 6.
#[must_use]
pub fn triangle() -> CostMatrix {
    square(vec![vec![0, 1, 2], vec![1, 0, 3], vec![2, 3, 0]])
}

/// Four nodes, symmetric. Optimal tour cost 14 (0-1-2-3-0).
#[must_use]
pub fn square_symmetric() -> CostMatrix {
    square(vec![
        vec![0, 3, 9, 4],
        vec![3, 0, 2, 8],
        vec![9, 2, 0, 5],
        vec![4, 8, 5, 0],
    ])
}

/// Four nodes, asymmetric: the cheap direction is 0 -> 1 -> 2 -> 3 -> 0.
#[must_use]
pub fn square_asymmetric() -> CostMatrix {
    square(vec![
        vec![0, 1, 7, 9],
        vec![8, 0, 1, 6],
        vec![5, 9, 0, 1],
        vec![1, 7, 8, 0],
    ])
}

/// Upper triangle 10, lower triangle 1: the cheapest-edge estimate reads
/// only the expensive direction.
#[must_use]
pub fn lopsided_triangle() -> CostMatrix {
    square(vec![vec![0, 10, 10], vec![1, 0, 10], vec![1, 1, 0]])
}

/// Four nodes, asymmetric, where the search settles for cost 14 although
/// 0 -> 1 -> 3 -> 2 -> 0 costs 13.
#[must_use]
pub fn asymmetric_trap() -> CostMatrix {
    square(vec![
        vec![0, 1, 9, 4],
        vec![9, 0, 7, 6],
        vec![1, 2, 0, 9],
        vec![7, 2, 5, 0],
    ])
}

/// A seeded random symmetric instance with zero diagonal.
#[must_use]
pub fn random_symmetric(node_count: usize, seed: u64, max_weight: Cost) -> CostMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = vec![vec![0; node_count]; node_count];
    for x in 0..node_count {
        for y in x + 1..node_count {
            let w = rng.gen_range(1..=max_weight);
            rows[x][y] = w;
            rows[y][x] = w;
        }
    }
    square(rows)
}

/// A seeded random instance with independent weights in each direction.
#[must_use]
pub fn random_asymmetric(node_count: usize, seed: u64, max_weight: Cost) -> CostMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..node_count)
        .map(|x| {
            (0..node_count)
                .map(|y| if x == y { 0 } else { rng.gen_range(1..=max_weight) })
                .collect()
        })
        .collect();
    square(rows)
}

fn square(rows: Vec<Vec<Cost>>) -> CostMatrix {
    match CostMatrix::from_rows(rows) {
        Ok(matrix) => matrix,
        Err(e) => panic!("fixture matrix is not square: {e}"),
    }
}
