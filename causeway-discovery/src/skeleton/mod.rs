//! Skeleton construction: exhaustive conditional-independence testing over
//! growing conditioning sets, recorded into an append-only audit table.

mod subsets;

pub use subsets::conditioning_sets;

use std::collections::HashSet;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info};

use causeway_core::cancel::CancelToken;
use causeway_core::config::SkeletonConfig;
use causeway_core::dataset::Dataset;
use causeway_core::errors::{DiscoveryError, DiscoveryResult};
use causeway_core::model::{EdgePair, SkeletonResult, SkeletonTable, TestOutcome, TestRecord};
use causeway_core::traits::IIndependenceOracle;

/// One (edge, conditioning set) unit of work.
struct TestUnit {
    node_1: String,
    node_2: String,
    conditioning: Vec<String>,
}

/// Drives the oracle over every candidate edge and every conditioning subset
/// of the remaining variables.
///
/// Removal is a disjunction over all tests of an edge: every subset is still
/// evaluated and recorded after independence is first found, so the table is
/// a complete audit log whichever test triggered the removal.
pub struct SkeletonBuilder<'a> {
    oracle: &'a dyn IIndependenceOracle,
    config: SkeletonConfig,
}

impl<'a> SkeletonBuilder<'a> {
    pub fn new(oracle: &'a dyn IIndependenceOracle) -> Self {
        Self::with_config(oracle, SkeletonConfig::default())
    }

    pub fn with_config(oracle: &'a dyn IIndependenceOracle, config: SkeletonConfig) -> Self {
        Self { oracle, config }
    }

    pub fn config(&self) -> &SkeletonConfig {
        &self.config
    }

    /// Build the skeleton for `candidate_edges` over the `variables`
    /// universe.
    ///
    /// `candidate_edges` controls which pairs are tested; the surviving set
    /// starts as the complete graph over `variables` regardless, so an
    /// untested pair stays present by default.
    pub fn build(
        &self,
        data: &Dataset,
        variables: &[String],
        candidate_edges: &[EdgePair],
    ) -> DiscoveryResult<SkeletonResult> {
        self.run(data, variables, candidate_edges, None)
    }

    /// Like [`build`](Self::build), with a cooperative cancellation token
    /// checked per test.
    pub fn build_with_cancel(
        &self,
        data: &Dataset,
        variables: &[String],
        candidate_edges: &[EdgePair],
        cancel: &CancelToken,
    ) -> DiscoveryResult<SkeletonResult> {
        self.run(data, variables, candidate_edges, Some(cancel))
    }

    fn run(
        &self,
        data: &Dataset,
        variables: &[String],
        candidate_edges: &[EdgePair],
        cancel: Option<&CancelToken>,
    ) -> DiscoveryResult<SkeletonResult> {
        validate(data, variables, candidate_edges)?;

        let start = Instant::now();
        let deadline = self
            .config
            .deadline_ms
            .map(|ms| (start + Duration::from_millis(ms), ms));

        // Enumerate every unit of work up front, in candidate order, subsets
        // smallest first. The joined outcome sequence keeps this order, so
        // parallel and sequential runs assemble identical tables.
        let mut units = Vec::new();
        for edge in candidate_edges {
            let others: Vec<String> = variables
                .iter()
                .filter(|v| !edge.contains(v))
                .cloned()
                .collect();
            let sets = conditioning_sets(&others);
            debug!(edge = %edge.label(), subsets = sets.len(), "testing candidate edge");
            for conditioning in sets {
                units.push(TestUnit {
                    node_1: edge.node_1.clone(),
                    node_2: edge.node_2.clone(),
                    conditioning,
                });
            }
        }

        let evaluate = |unit: &TestUnit| -> DiscoveryResult<TestOutcome> {
            if let Some(token) = cancel {
                if token.is_cancelled() {
                    return Err(DiscoveryError::Cancelled);
                }
            }
            if let Some((at, limit_ms)) = deadline {
                if Instant::now() >= at {
                    return Err(DiscoveryError::DeadlineExceeded { limit_ms });
                }
            }
            match self
                .oracle
                .p_value(data, &unit.node_1, &unit.node_2, &unit.conditioning)
            {
                Ok(value) => Ok(TestOutcome::PValue { value }),
                Err(err) if self.config.strict => Err(err.into()),
                Err(err) => Ok(TestOutcome::NotComputable {
                    reason: err.to_string(),
                }),
            }
        };

        let outcomes: Vec<TestOutcome> = if self.config.parallel {
            units.par_iter().map(evaluate).collect::<DiscoveryResult<_>>()?
        } else {
            units.iter().map(evaluate).collect::<DiscoveryResult<_>>()?
        };

        Ok(self.assemble(variables, units, outcomes))
    }

    /// Fold joined outcomes into the audit table, the surviving-edge list,
    /// and the significant-edge list.
    fn assemble(
        &self,
        variables: &[String],
        units: Vec<TestUnit>,
        outcomes: Vec<TestOutcome>,
    ) -> SkeletonResult {
        let alpha = self.config.alpha;

        // The complete candidate graph over the variable universe.
        let mut surviving: Vec<EdgePair> = Vec::new();
        for (i, a) in variables.iter().enumerate() {
            for b in &variables[i + 1..] {
                surviving.push(EdgePair::new(a.clone(), b.clone()));
            }
        }

        let mut records = Vec::with_capacity(units.len());
        for (unit, outcome) in units.into_iter().zip(outcomes) {
            if outcome.indicates_independence(alpha) {
                surviving.retain(|pair| !pair.matches(&unit.node_1, &unit.node_2));
            }
            records.push(TestRecord {
                node_1: unit.node_1,
                node_2: unit.node_2,
                conditioning: unit.conditioning,
                outcome,
                removed: true,
            });
        }

        for record in &mut records {
            if surviving.iter().any(|p| p.matches(&record.node_1, &record.node_2)) {
                record.removed = false;
            }
        }

        let mut seen = HashSet::new();
        let mut significant = Vec::new();
        for record in &records {
            if record.outcome.indicates_dependence(alpha) {
                let pair = record.pair();
                if seen.insert(pair.clone()) {
                    significant.push(pair);
                }
            }
        }

        info!(
            records = records.len(),
            surviving = surviving.len(),
            significant = significant.len(),
            "skeleton construction complete"
        );

        SkeletonResult {
            table: SkeletonTable {
                alpha,
                variables: variables.to_vec(),
                records,
            },
            significant,
            surviving,
        }
    }
}

/// Fail fast on unknown or degenerate references, before any testing.
fn validate(
    data: &Dataset,
    variables: &[String],
    candidate_edges: &[EdgePair],
) -> DiscoveryResult<()> {
    let mut seen = HashSet::new();
    for variable in variables {
        if !data.contains(variable) {
            return Err(DiscoveryError::InvalidVariableReference {
                variable: variable.clone(),
                context: "dataset".to_string(),
            });
        }
        if !seen.insert(variable.as_str()) {
            return Err(DiscoveryError::DuplicateVariable {
                variable: variable.clone(),
            });
        }
    }

    for edge in candidate_edges {
        if edge.node_1 == edge.node_2 {
            return Err(DiscoveryError::SelfReferentialPair {
                variable: edge.node_1.clone(),
            });
        }
        for name in [&edge.node_1, &edge.node_2] {
            if !variables.contains(name) {
                return Err(DiscoveryError::InvalidVariableReference {
                    variable: name.clone(),
                    context: "candidate edge list".to_string(),
                });
            }
        }
    }

    Ok(())
}
