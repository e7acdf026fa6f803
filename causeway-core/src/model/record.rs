//! The skeleton audit table: one record per evaluated test.

use serde::{Deserialize, Serialize};

use super::edge::EdgePair;

/// Result of a single conditional-independence test.
///
/// `NotComputable` is a sentinel distinct from any valid p-value: downstream
/// logic treats it as inconclusive, so it neither removes an edge nor counts
/// as a significant dependence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TestOutcome {
    PValue { value: f64 },
    NotComputable { reason: String },
}

impl TestOutcome {
    pub fn p_value(&self) -> Option<f64> {
        match self {
            Self::PValue { value } => Some(*value),
            Self::NotComputable { .. } => None,
        }
    }

    /// True when the test found independence (p-value strictly above alpha).
    pub fn indicates_independence(&self, alpha: f64) -> bool {
        matches!(self, Self::PValue { value } if *value > alpha)
    }

    /// True when the test found a significant dependence (p-value strictly
    /// below alpha).
    pub fn indicates_dependence(&self, alpha: f64) -> bool {
        matches!(self, Self::PValue { value } if *value < alpha)
    }
}

/// One evaluated (edge, conditioning set) combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    pub node_1: String,
    pub node_2: String,
    /// Conditioning set, in enumeration order.
    pub conditioning: Vec<String>,
    pub outcome: TestOutcome,
    /// False only when the edge survives in the final result set.
    pub removed: bool,
}

impl TestRecord {
    /// The tested edge as an unordered pair.
    pub fn pair(&self) -> EdgePair {
        EdgePair::new(self.node_1.clone(), self.node_2.clone())
    }

    /// Display label of the tested edge, e.g. `"x - y"`.
    pub fn edge_label(&self) -> String {
        format!("{} - {}", self.node_1, self.node_2)
    }

    /// Set-membership test on the conditioning set.
    pub fn conditions_on(&self, name: &str) -> bool {
        self.conditioning.iter().any(|v| v == name)
    }
}

/// Complete audit log of every conditional-independence test evaluated
/// during one skeleton construction.
///
/// Built once per invocation and immutable thereafter; the orienter reads
/// but never mutates it. Carries the significance level it was built with so
/// orientation decisions use the same threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkeletonTable {
    pub alpha: f64,
    /// The variable universe the skeleton was built over.
    pub variables: Vec<String>,
    pub records: Vec<TestRecord>,
}

impl SkeletonTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `name` is part of the variable universe.
    pub fn knows_variable(&self, name: &str) -> bool {
        self.variables.iter().any(|v| v == name)
    }

    /// Records whose endpoints match {a, b} in either order.
    pub fn records_for<'a>(
        &'a self,
        a: &'a str,
        b: &'a str,
    ) -> impl Iterator<Item = &'a TestRecord> {
        self.records.iter().filter(move |r| {
            (r.node_1 == a && r.node_2 == b) || (r.node_1 == b && r.node_2 == a)
        })
    }
}

/// Output of skeleton construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkeletonResult {
    pub table: SkeletonTable,
    /// Distinct edges with at least one significant-dependence record,
    /// first occurrence retained, in table order.
    pub significant: Vec<EdgePair>,
    /// Undirected edges not ruled out by any independence test.
    pub surviving: Vec<EdgePair>,
}
