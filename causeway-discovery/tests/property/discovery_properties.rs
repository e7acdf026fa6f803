//! Property tests for skeleton construction and orientation.

use proptest::prelude::*;

use causeway_core::dataset::Dataset;
use causeway_core::errors::OracleError;
use causeway_core::model::EdgePair;
use causeway_core::traits::IIndependenceOracle;
use causeway_discovery::{EdgeOrienter, SkeletonBuilder};

/// Deterministic pseudo-oracle: the p-value is an FNV-1a hash of the query,
/// so it is a pure function of (x, y, z) with a roughly uniform spread.
struct HashOracle;

fn fnv(parts: &[&str]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for part in parts {
        for byte in part.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
        hash ^= 0xff;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

impl IIndependenceOracle for HashOracle {
    fn p_value(
        &self,
        _data: &Dataset,
        x: &str,
        y: &str,
        conditioning: &[String],
    ) -> Result<f64, OracleError> {
        let mut parts: Vec<&str> = vec![x, y];
        parts.extend(conditioning.iter().map(String::as_str));
        Ok((fnv(&parts) >> 11) as f64 / (1u64 << 53) as f64)
    }
}

fn universe(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("v{i}")).collect()
}

fn all_pairs(variables: &[String]) -> Vec<EdgePair> {
    let mut pairs = Vec::new();
    for (i, a) in variables.iter().enumerate() {
        for b in &variables[i + 1..] {
            pairs.push(EdgePair::new(a.clone(), b.clone()));
        }
    }
    pairs
}

fn placeholder_dataset(variables: &[String]) -> Dataset {
    Dataset::from_columns(
        variables
            .iter()
            .map(|v| (v.clone(), vec![0.0, 1.0, 2.0, 3.0])),
    )
    .unwrap()
}

proptest! {
    // Every candidate edge gets the full power set of the remaining
    // variables, smallest sets first.
    #[test]
    fn every_edge_gets_two_to_the_n_minus_two_records(n in 2_usize..=6) {
        let variables = universe(n);
        let data = placeholder_dataset(&variables);
        let candidates = all_pairs(&variables);

        let oracle = HashOracle;
        let result = SkeletonBuilder::new(&oracle)
            .build(&data, &variables, &candidates)
            .unwrap();

        let expected = 1usize << (n - 2);
        for edge in &candidates {
            let records: Vec<_> = result
                .table
                .records_for(&edge.node_1, &edge.node_2)
                .collect();
            prop_assert_eq!(records.len(), expected);
            prop_assert!(records[0].conditioning.is_empty());
            for window in records.windows(2) {
                prop_assert!(window[0].conditioning.len() <= window[1].conditioning.len());
            }
        }
    }

    // removed = true iff at least one of the edge's records found
    // independence, and the surviving list matches the unremoved rows as an
    // unordered set of pairs.
    #[test]
    fn removal_is_exactly_the_disjunction_of_independence(n in 2_usize..=6) {
        let variables = universe(n);
        let data = placeholder_dataset(&variables);
        let candidates = all_pairs(&variables);

        let oracle = HashOracle;
        let result = SkeletonBuilder::new(&oracle)
            .build(&data, &variables, &candidates)
            .unwrap();
        let alpha = result.table.alpha;

        for edge in &candidates {
            let records: Vec<_> = result
                .table
                .records_for(&edge.node_1, &edge.node_2)
                .collect();
            let any_independent = records
                .iter()
                .any(|r| r.outcome.indicates_independence(alpha));
            let survives = result.surviving.contains(edge);

            prop_assert_eq!(any_independent, !survives);
            for record in records {
                prop_assert_eq!(record.removed, any_independent);
            }
        }

        // Equivalence between the survivor list and the unremoved rows.
        use std::collections::HashSet;
        let from_table: HashSet<EdgePair> = result
            .table
            .records
            .iter()
            .filter(|r| !r.removed)
            .map(|r| r.pair())
            .collect();
        let from_list: HashSet<EdgePair> = result.surviving.iter().cloned().collect();
        // Untested pairs survive without table rows, so the table side is a
        // subset; every tabled survivor must appear in the list.
        prop_assert!(from_table.is_subset(&from_list));
    }

    // The oracle is pure, so rebuilding serializes to the identical table.
    #[test]
    fn rebuilding_is_byte_identical(n in 2_usize..=5) {
        let variables = universe(n);
        let data = placeholder_dataset(&variables);
        let candidates = all_pairs(&variables);

        let oracle = HashOracle;
        let builder = SkeletonBuilder::new(&oracle);
        let first = builder.build(&data, &variables, &candidates).unwrap();
        let second = builder.build(&data, &variables, &candidates).unwrap();

        prop_assert_eq!(
            serde_json::to_string(&first.table).unwrap(),
            serde_json::to_string(&second.table).unwrap()
        );
    }

    // Orientation over any triple never produces self-loops, duplicates, or
    // contradictory directions.
    #[test]
    fn orientation_output_is_consistent(
        n in 3_usize..=5,
        triple in prop::sample::subsequence(vec![0_usize, 1, 2, 3, 4], 3)
    ) {
        prop_assume!(triple.iter().all(|&i| i < n));

        let variables = universe(n);
        let data = placeholder_dataset(&variables);
        let candidates = all_pairs(&variables);

        let oracle = HashOracle;
        let result = SkeletonBuilder::new(&oracle)
            .build(&data, &variables, &candidates)
            .unwrap();

        let (i, j, k) = (triple[0], triple[1], triple[2]);
        let node_pairs = vec![
            EdgePair::new(variables[i].clone(), variables[j].clone()),
            EdgePair::new(variables[i].clone(), variables[k].clone()),
            EdgePair::new(variables[j].clone(), variables[k].clone()),
        ];
        let collider = variables[k].clone();

        let oriented = EdgeOrienter::new()
            .orient(&result.table, &node_pairs, &collider)
            .unwrap();

        let members = [&variables[i], &variables[j], &variables[k]];
        for (idx, edge) in oriented.iter().enumerate() {
            prop_assert_ne!(&edge.from, &edge.to);
            prop_assert!(members.contains(&&edge.from) && members.contains(&&edge.to));
            prop_assert!(!oriented.contains(&edge.to, &edge.from), "contradiction at {}", edge);
            for other in oriented.edges[idx + 1..].iter() {
                prop_assert!(!(other.from == edge.from && other.to == edge.to));
            }
        }
    }
}
