//! Edge types: undirected pairs under test and directed causal edges.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// The marker set on every directed edge produced by orientation.
pub const DIRECTION_MARKER: &str = "->";

/// An unordered pair of variables.
///
/// Field order preserves the order the pair was supplied in (and so the
/// order it is tested in); equality and hashing ignore it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgePair {
    pub node_1: String,
    pub node_2: String,
}

impl EdgePair {
    pub fn new(node_1: impl Into<String>, node_2: impl Into<String>) -> Self {
        Self {
            node_1: node_1.into(),
            node_2: node_2.into(),
        }
    }

    /// Whether either endpoint is `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.node_1 == name || self.node_2 == name
    }

    /// Whether this pair is {a, b} in either order.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        (self.node_1 == a && self.node_2 == b) || (self.node_1 == b && self.node_2 == a)
    }

    /// Display label in tested order, e.g. `"x - y"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.node_1, self.node_2)
    }

    fn ordered(&self) -> (&str, &str) {
        if self.node_1 <= self.node_2 {
            (self.node_1.as_str(), self.node_2.as_str())
        } else {
            (self.node_2.as_str(), self.node_1.as_str())
        }
    }
}

impl PartialEq for EdgePair {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Eq for EdgePair {}

impl Hash for EdgePair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}

impl std::fmt::Display for EdgePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A directed causal edge produced by orientation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CausalEdge {
    pub from: String,
    pub to: String,
    /// Always `"->"`; kept explicit so serialized tables read as edge lists.
    pub direction: String,
}

impl CausalEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            direction: DIRECTION_MARKER.to_string(),
        }
    }

    /// Whether this edge is `from -> to` for the given endpoints.
    pub fn connects(&self, from: &str, to: &str) -> bool {
        self.from == from && self.to == to
    }
}

impl std::fmt::Display for CausalEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.from, self.direction, self.to)
    }
}

/// Dense, ordered list of oriented edges plus the equivalent flat tuple view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CausalEdgeList {
    pub edges: Vec<CausalEdge>,
}

impl CausalEdgeList {
    pub fn new(edges: Vec<CausalEdge>) -> Self {
        Self { edges }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|e| e.connects(from, to))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CausalEdge> {
        self.edges.iter()
    }

    /// Flat (from, to) tuples for downstream consumption.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.edges
            .iter()
            .map(|e| (e.from.clone(), e.to.clone()))
            .collect()
    }
}
