/// Conditional-independence oracle errors.
///
/// Any of these means the test is not computable for the given inputs.
/// The skeleton builder records them as an inconclusive outcome unless
/// strict mode is enabled; they are never substituted with a default
/// p-value.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OracleError {
    #[error("singular covariance structure over [{variables}]")]
    SingularCovariance { variables: String },

    #[error("zero variance in column {variable}")]
    ZeroVariance { variable: String },

    #[error("insufficient observations: {actual} rows, need at least {required}")]
    InsufficientObservations { required: usize, actual: usize },

    #[error("unknown variable: {variable}")]
    UnknownVariable { variable: String },
}
