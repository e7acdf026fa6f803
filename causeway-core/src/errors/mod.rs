//! Error types for the Causeway workspace.

mod dataset_error;
mod oracle_error;

pub use dataset_error::DatasetError;
pub use oracle_error::OracleError;

/// Umbrella error for discovery operations.
///
/// Validation errors are raised at the call boundary before any testing or
/// orientation begins; a run never returns a partially processed result.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("invalid variable reference: {variable} is not known to the {context}")]
    InvalidVariableReference { variable: String, context: String },

    #[error("duplicate variable: {variable} appears more than once")]
    DuplicateVariable { variable: String },

    #[error("self-referential pair: ({variable}, {variable})")]
    SelfReferentialPair { variable: String },

    #[error("unknown collider: {collider} is not referenced by any node pair")]
    UnknownCollider { collider: String },

    #[error("node pair list is empty")]
    EmptyNodePairs,

    #[error("deadline exceeded after {limit_ms} ms")]
    DeadlineExceeded { limit_ms: u64 },

    #[error("skeleton construction cancelled")]
    Cancelled,

    #[error("conflicting orientation: both {from} -> {to} and {to} -> {from} were produced")]
    ConflictingOrientation { from: String, to: String },

    #[error("cyclic orientation through [{variables}]")]
    CyclicOrientation { variables: String },

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Convenience alias used across the workspace.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;
