//! Combine per-collider orientation results and validate global consistency.
//!
//! The single-collider conflict priority does not generalize across
//! colliders, so incompatible directions arriving from different calls are
//! surfaced as errors instead of silently tie-broken.

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use causeway_core::errors::{DiscoveryError, DiscoveryResult};
use causeway_core::model::{CausalEdge, CausalEdgeList};

/// Merge orientation results in input order, deduplicating identical
/// (from, to) pairs, then validate the merged set.
///
/// Fails with `ConflictingOrientation` when two results disagree on an
/// edge's direction, and with `CyclicOrientation` when the merged edges form
/// a directed cycle.
pub fn compose(orientations: &[CausalEdgeList]) -> DiscoveryResult<CausalEdgeList> {
    let mut merged: Vec<CausalEdge> = Vec::new();
    for list in orientations {
        for edge in list.iter() {
            if !merged.iter().any(|e| e.connects(&edge.from, &edge.to)) {
                merged.push(edge.clone());
            }
        }
    }

    for (i, edge) in merged.iter().enumerate() {
        if merged[i + 1..]
            .iter()
            .any(|e| e.connects(&edge.to, &edge.from))
        {
            return Err(DiscoveryError::ConflictingOrientation {
                from: edge.from.clone(),
                to: edge.to.clone(),
            });
        }
    }

    detect_cycles(&merged)?;

    Ok(CausalEdgeList::new(merged))
}

/// Tarjan SCC over the merged edges; any component with more than one node
/// is a directed cycle.
fn detect_cycles(edges: &[CausalEdge]) -> DiscoveryResult<()> {
    let mut graph: DiGraph<String, ()> = DiGraph::new();
    let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

    for edge in edges {
        let from = ensure_node(&mut graph, &mut indices, &edge.from);
        let to = ensure_node(&mut graph, &mut indices, &edge.to);
        graph.add_edge(from, to, ());
    }

    if let Some(cycle) = tarjan_scc(&graph).into_iter().find(|scc| scc.len() > 1) {
        let variables = cycle
            .iter()
            .map(|&idx| graph[idx].as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(DiscoveryError::CyclicOrientation { variables });
    }

    Ok(())
}

fn ensure_node<'a>(
    graph: &mut DiGraph<String, ()>,
    indices: &mut HashMap<&'a str, NodeIndex>,
    name: &'a str,
) -> NodeIndex {
    match indices.get(name) {
        Some(&idx) => idx,
        None => {
            let idx = graph.add_node(name.to_string());
            indices.insert(name, idx);
            idx
        }
    }
}
