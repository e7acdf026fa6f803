//! # causeway-core
//!
//! Foundation crate for the Causeway causal discovery workspace.
//! Defines the dataset container, the skeleton record model, errors, config,
//! and the independence-oracle contract. Every other crate depends on this.

pub mod cancel;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod errors;
pub mod model;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use cancel::CancelToken;
pub use config::SkeletonConfig;
pub use dataset::Dataset;
pub use errors::{DatasetError, DiscoveryError, DiscoveryResult, OracleError};
pub use model::{
    CausalEdge, CausalEdgeList, EdgePair, SkeletonResult, SkeletonTable, TestOutcome, TestRecord,
};
pub use traits::IIndependenceOracle;
