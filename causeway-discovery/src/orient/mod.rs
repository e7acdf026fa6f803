//! Edge orientation via the collider rule.
//!
//! An independence found while conditioning on a set that excludes the
//! collider, for a pair forming an unshielded triple through it, is the
//! v-structure signature: the endpoints become dependent only once the
//! collider is known, so both must point into it.

mod conflict;

use std::collections::HashSet;

use tracing::debug;

use causeway_core::errors::{DiscoveryError, DiscoveryResult};
use causeway_core::model::{CausalEdge, CausalEdgeList, EdgePair, SkeletonTable};

/// One orientation call: a collider and the node pairs to examine.
///
/// Pass every pair of the triple under scrutiny: the unshielded pair and
/// both spokes. The conflict pass then lets inward v-structure edges beat
/// the outward edges emitted for the spokes.
#[derive(Debug, Clone)]
pub struct OrientationRequest {
    pub collider: String,
    pub node_pairs: Vec<EdgePair>,
}

impl OrientationRequest {
    pub fn new(collider: impl Into<String>, node_pairs: Vec<EdgePair>) -> Self {
        Self {
            collider: collider.into(),
            node_pairs,
        }
    }
}

/// Assigns edge directions from the skeleton audit table.
///
/// Stateless across calls; each call is a linear pipeline from node pairs to
/// candidate directed edges, deduplication, and conflict resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeOrienter;

impl EdgeOrienter {
    pub fn new() -> Self {
        Self
    }

    /// Orient the supplied node pairs around a single collider.
    ///
    /// Uses the significance level the table was built with. Inconclusive
    /// records never satisfy the collider condition.
    pub fn orient(
        &self,
        table: &SkeletonTable,
        node_pairs: &[EdgePair],
        collider: &str,
    ) -> DiscoveryResult<CausalEdgeList> {
        validate(table, node_pairs, collider)?;

        let mut accumulated: Vec<CausalEdge> = Vec::new();
        for pair in node_pairs {
            let v_structure = table
                .records_for(&pair.node_1, &pair.node_2)
                .any(|r| r.outcome.indicates_independence(table.alpha) && !r.conditions_on(collider));

            debug!(pair = %pair.label(), collider, v_structure, "collider rule");

            if v_structure {
                // Independence without the collider: both endpoints point in.
                push_deduplicated(&mut accumulated, CausalEdge::new(pair.node_1.as_str(), collider));
                push_deduplicated(&mut accumulated, CausalEdge::new(pair.node_2.as_str(), collider));
            } else {
                push_deduplicated(&mut accumulated, CausalEdge::new(collider, pair.node_1.as_str()));
                push_deduplicated(&mut accumulated, CausalEdge::new(collider, pair.node_2.as_str()));
            }
        }

        let resolved = conflict::resolve(accumulated, collider);
        Ok(CausalEdgeList::new(resolved))
    }
}

fn push_deduplicated(edges: &mut Vec<CausalEdge>, edge: CausalEdge) {
    if !edges.iter().any(|e| e.connects(&edge.from, &edge.to)) {
        edges.push(edge);
    }
}

/// Fail fast before any pair is processed.
fn validate(
    table: &SkeletonTable,
    node_pairs: &[EdgePair],
    collider: &str,
) -> DiscoveryResult<()> {
    if node_pairs.is_empty() {
        return Err(DiscoveryError::EmptyNodePairs);
    }

    let mut referenced = HashSet::new();
    for pair in node_pairs {
        if pair.node_1 == pair.node_2 {
            return Err(DiscoveryError::SelfReferentialPair {
                variable: pair.node_1.clone(),
            });
        }
        for name in [&pair.node_1, &pair.node_2] {
            if !table.knows_variable(name) {
                return Err(DiscoveryError::InvalidVariableReference {
                    variable: name.clone(),
                    context: "skeleton table".to_string(),
                });
            }
            referenced.insert(name.as_str());
        }
    }

    if !referenced.contains(collider) {
        return Err(DiscoveryError::UnknownCollider {
            collider: collider.to_string(),
        });
    }

    Ok(())
}
