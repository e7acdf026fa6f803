//! Record model for skeleton construction and edge orientation.

mod edge;
mod record;

pub use edge::{CausalEdge, CausalEdgeList, EdgePair, DIRECTION_MARKER};
pub use record::{SkeletonResult, SkeletonTable, TestOutcome, TestRecord};
