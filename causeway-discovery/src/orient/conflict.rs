//! Conflict resolution: inward v-structure edges beat outward collider edges.

use causeway_core::model::CausalEdge;

/// Walk the accumulated edges in order and drop every `collider -> target`
/// whose target is itself a `from` endpoint among the rows still present.
///
/// A target that points into something was assigned by the inward rule (or
/// is the collider itself, for a self-edge), and that assignment wins.
/// Earlier rows are examined first, so earlier node pairs win ties.
pub(crate) fn resolve(edges: Vec<CausalEdge>, collider: &str) -> Vec<CausalEdge> {
    let mut keep = vec![true; edges.len()];

    for i in 0..edges.len() {
        if edges[i].from != collider {
            continue;
        }
        let target = edges[i].to.as_str();
        let conflicted = edges
            .iter()
            .enumerate()
            .any(|(j, e)| keep[j] && e.from == target);
        if conflicted {
            keep[i] = false;
        }
    }

    edges
        .into_iter()
        .zip(keep)
        .filter_map(|(edge, kept)| kept.then_some(edge))
        .collect()
}
