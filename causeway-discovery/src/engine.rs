//! DiscoveryEngine: owns the oracle and config, coordinates skeleton
//! construction, orientation, and multi-collider composition.

use causeway_core::cancel::CancelToken;
use causeway_core::config::SkeletonConfig;
use causeway_core::dataset::Dataset;
use causeway_core::errors::DiscoveryResult;
use causeway_core::model::{CausalEdgeList, EdgePair, SkeletonResult, SkeletonTable};
use causeway_core::traits::IIndependenceOracle;
use causeway_stats::PartialCorrelationOracle;

use crate::compose;
use crate::orient::{EdgeOrienter, OrientationRequest};
use crate::skeleton::SkeletonBuilder;

/// The main causal discovery engine.
pub struct DiscoveryEngine {
    oracle: Box<dyn IIndependenceOracle>,
    config: SkeletonConfig,
    orienter: EdgeOrienter,
}

impl DiscoveryEngine {
    /// Engine with the partial-correlation oracle and default settings.
    pub fn new() -> Self {
        Self::with_oracle(Box::new(PartialCorrelationOracle::new()))
    }

    /// Engine with a custom oracle and default settings.
    pub fn with_oracle(oracle: Box<dyn IIndependenceOracle>) -> Self {
        Self {
            oracle,
            config: SkeletonConfig::default(),
            orienter: EdgeOrienter::new(),
        }
    }

    /// Engine with a custom oracle and configuration.
    pub fn with_config(oracle: Box<dyn IIndependenceOracle>, config: SkeletonConfig) -> Self {
        Self {
            oracle,
            config,
            orienter: EdgeOrienter::new(),
        }
    }

    pub fn config(&self) -> &SkeletonConfig {
        &self.config
    }

    /// Build the skeleton audit table for `candidate_edges` over
    /// `variables`.
    pub fn build_skeleton(
        &self,
        data: &Dataset,
        variables: &[String],
        candidate_edges: &[EdgePair],
    ) -> DiscoveryResult<SkeletonResult> {
        SkeletonBuilder::with_config(self.oracle.as_ref(), self.config.clone())
            .build(data, variables, candidate_edges)
    }

    /// Like [`build_skeleton`](Self::build_skeleton), with a cancellation
    /// token checked per test.
    pub fn build_skeleton_with_cancel(
        &self,
        data: &Dataset,
        variables: &[String],
        candidate_edges: &[EdgePair],
        cancel: &CancelToken,
    ) -> DiscoveryResult<SkeletonResult> {
        SkeletonBuilder::with_config(self.oracle.as_ref(), self.config.clone())
            .build_with_cancel(data, variables, candidate_edges, cancel)
    }

    /// Orient node pairs around a single collider.
    pub fn orient(
        &self,
        table: &SkeletonTable,
        node_pairs: &[EdgePair],
        collider: &str,
    ) -> DiscoveryResult<CausalEdgeList> {
        self.orienter.orient(table, node_pairs, collider)
    }

    /// Run one orientation call per request and compose the results,
    /// validating global consistency across colliders.
    pub fn orient_all(
        &self,
        table: &SkeletonTable,
        requests: &[OrientationRequest],
    ) -> DiscoveryResult<CausalEdgeList> {
        let mut results = Vec::with_capacity(requests.len());
        for request in requests {
            results.push(self.orienter.orient(table, &request.node_pairs, &request.collider)?);
        }
        compose::compose(&results)
    }
}

impl Default for DiscoveryEngine {
    fn default() -> Self {
        Self::new()
    }
}
