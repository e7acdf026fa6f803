use crate::dataset::Dataset;
use crate::errors::OracleError;

/// Conditional-independence testing oracle.
///
/// Given two variables and a conditioning set, produces the p-value for the
/// null hypothesis "x independent of y given the conditioning set".
///
/// Implementations must be pure functions of their inputs: the skeleton
/// audit table is only reproducible if identical queries return identical
/// results. Failures are surfaced as [`OracleError`], never as NaN or a
/// default p-value.
pub trait IIndependenceOracle: Send + Sync {
    /// P-value in [0, 1], or why the test cannot be computed.
    fn p_value(
        &self,
        data: &Dataset,
        x: &str,
        y: &str,
        conditioning: &[String],
    ) -> Result<f64, OracleError>;
}
