//! Contracts between the discovery engine and its collaborators.

mod oracle;

pub use oracle::IIndependenceOracle;
