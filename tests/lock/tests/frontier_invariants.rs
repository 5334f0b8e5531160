//! Priority frontier lock tests.
//!
//! Proves, over arbitrary insert/remove/pop sequences:
//! 1. At most one entry per state
//! 2. `pop_min` returns the least `(f_cost, state)` pair
//! 3. Lookups agree with a reference model
//! 4. The high-water mark is the largest size ever held

use std::collections::BTreeMap;

use proptest::prelude::*;
use tsp_search::error::SearchError;
use tsp_search::frontier::PriorityFrontier;

#[derive(Debug, Clone)]
enum Op {
    Insert { state: u8, f_cost: i64 },
    Remove { state: u8 },
    Pop,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..16, -5i64..20).prop_map(|(state, f_cost)| Op::Insert { state, f_cost }),
        1 => (0u8..16).prop_map(|state| Op::Remove { state }),
        2 => Just(Op::Pop),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn frontier_matches_reference_model(ops in prop::collection::vec(op(), 0..80)) {
        let mut frontier = PriorityFrontier::new();
        let mut model: BTreeMap<u8, (i64, usize)> = BTreeMap::new();
        let mut high_water = 0;

        for (node_id, op) in ops.into_iter().enumerate() {
            match op {
                Op::Insert { state, f_cost } => {
                    let outcome = frontier.insert(state, f_cost, node_id);
                    if model.contains_key(&state) {
                        let is_duplicate = matches!(outcome, Err(SearchError::DuplicateState { .. }));
                        prop_assert!(is_duplicate);
                    } else {
                        prop_assert!(outcome.is_ok());
                        model.insert(state, (f_cost, node_id));
                    }
                }
                Op::Remove { state } => {
                    let outcome = frontier.remove(&state);
                    match model.remove(&state) {
                        Some((f_cost, id)) => {
                            let entry = outcome.unwrap();
                            prop_assert_eq!((entry.f_cost, entry.node_id), (f_cost, id));
                        }
                        None => prop_assert!(outcome.is_err()),
                    }
                }
                Op::Pop => {
                    let expected = model
                        .iter()
                        .min_by_key(|&(state, &(f_cost, _))| (f_cost, *state))
                        .map(|(&state, &(f_cost, id))| (f_cost, state, id));
                    match (frontier.pop_min(), expected) {
                        (Ok(entry), Some((f_cost, state, id))) => {
                            prop_assert_eq!((entry.f_cost, entry.state, entry.node_id), (f_cost, state, id));
                            model.remove(&state);
                        }
                        (Err(SearchError::EmptyFrontier), None) => {}
                        (got, want) => prop_assert!(false, "pop mismatch: {:?} vs {:?}", got, want),
                    }
                }
            }
            high_water = high_water.max(model.len());
            prop_assert_eq!(frontier.len(), model.len());
            for (state, &(f_cost, _)) in &model {
                prop_assert!(frontier.contains(state));
                prop_assert_eq!(frontier.lookup(state).unwrap(), f_cost);
            }
        }
        prop_assert_eq!(frontier.high_water(), high_water);
    }
}
