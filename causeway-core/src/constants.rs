/// Causeway system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default significance level for conditional-independence decisions.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Pivots below this fraction of the covariance scale mark the matrix as
/// singular during inversion.
pub const SINGULARITY_EPSILON: f64 = 1e-12;

/// Observations required beyond the conditioning-set size: a test of
/// X and Y given k covariates needs at least k + 3 rows so the t-statistic
/// keeps at least one degree of freedom.
pub const MIN_EXTRA_OBSERVATIONS: usize = 3;
