//! # causeway-discovery
//!
//! The two-stage causal discovery engine: skeleton construction via
//! exhaustive conditional-independence testing over growing conditioning
//! sets, then edge orientation via the collider rule with a fixed
//! conflict-resolution priority.

pub mod compose;
pub mod engine;
pub mod orient;
pub mod skeleton;

pub use compose::compose;
pub use engine::DiscoveryEngine;
pub use orient::{EdgeOrienter, OrientationRequest};
pub use skeleton::SkeletonBuilder;
