//! Configuration for skeleton construction.

pub mod defaults;

mod skeleton_config;

pub use skeleton_config::SkeletonConfig;
