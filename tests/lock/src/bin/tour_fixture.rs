//! Binary that searches the fixed lock instances and prints deterministic
//! output lines for cross-process verification.
//!
//! Usage: `tour_fixture`
//!
//! Output: `<instance>.<field>=<value>` lines. Runtimes are left out.

use lock_tests::{asymmetric_trap, random_symmetric, square_symmetric, triangle};
use tsp_harness::report::tour_digest;
use tsp_harness::runner::run_tour_search;
use tsp_kernel::graph::CostMatrix;

fn main() {
    let instances: [(&str, CostMatrix); 4] = [
        ("triangle", triangle()),
        ("square", square_symmetric()),
        ("trap", asymmetric_trap()),
        ("random7", random_symmetric(7, 42, 50)),
    ];
    for (name, matrix) in &instances {
        let run = run_tour_search(matrix, 0).expect("tour search failed");
        let tour: Vec<String> = run.tour.iter().map(ToString::to_string).collect();
        println!("{name}.matrix_digest={}", run.matrix_digest);
        println!("{name}.cost={}", run.cost);
        println!("{name}.tour={}", tour.join(","));
        println!("{name}.tour_digest={}", tour_digest(run.start, &run.tour));
        println!("{name}.expanded={}", run.expanded);
        println!("{name}.generated={}", run.stats.generated);
        println!("{name}.replaced={}", run.stats.replaced);
    }
}
