use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Skeleton construction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkeletonConfig {
    /// Significance level for independence decisions. A p-value strictly
    /// above it removes an edge; strictly below it marks a dependence.
    pub alpha: f64,
    /// Abort the whole build on the first oracle failure instead of
    /// recording it as an inconclusive outcome.
    pub strict: bool,
    /// Fan independence tests out across the rayon thread pool.
    pub parallel: bool,
    /// Wall-clock budget for the full test loop (milliseconds).
    pub deadline_ms: Option<u64>,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            alpha: constants::DEFAULT_ALPHA,
            strict: defaults::DEFAULT_STRICT,
            parallel: defaults::DEFAULT_PARALLEL,
            deadline_ms: None,
        }
    }
}
