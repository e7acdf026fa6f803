//! Linear partial correlation with Student-t significance.
//!
//! Classical inverse-covariance formulation: assemble the sample covariance
//! over [x, y, z...], invert it, and read the partial correlation off the
//! precision matrix. With an empty conditioning set this reduces to the
//! Pearson correlation. Degrees of freedom are n - k - 2 for k covariates.

use statrs::distribution::{ContinuousCDF, StudentsT};

use causeway_core::constants::MIN_EXTRA_OBSERVATIONS;
use causeway_core::dataset::Dataset;
use causeway_core::errors::OracleError;
use causeway_core::traits::IIndependenceOracle;

use crate::linalg;

/// Conditional-independence oracle based on linear partial correlation.
///
/// Assumes continuous data; p-values are exact under joint normality and a
/// workable approximation otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialCorrelationOracle;

impl PartialCorrelationOracle {
    pub fn new() -> Self {
        Self
    }
}

impl IIndependenceOracle for PartialCorrelationOracle {
    fn p_value(
        &self,
        data: &Dataset,
        x: &str,
        y: &str,
        conditioning: &[String],
    ) -> Result<f64, OracleError> {
        let k = conditioning.len();

        let mut names: Vec<&str> = Vec::with_capacity(k + 2);
        names.push(x);
        names.push(y);
        for z in conditioning {
            names.push(z);
        }

        let mut cols: Vec<&[f64]> = Vec::with_capacity(names.len());
        for name in &names {
            cols.push(column(data, name)?);
        }

        let n = data.rows();
        let required = k + MIN_EXTRA_OBSERVATIONS;
        if n < required {
            return Err(OracleError::InsufficientObservations {
                required,
                actual: n,
            });
        }

        let dim = names.len();
        let cov = covariance_matrix(&cols, n);
        for (i, name) in names.iter().enumerate() {
            if cov[i * dim + i] <= 0.0 {
                return Err(OracleError::ZeroVariance {
                    variable: name.to_string(),
                });
            }
        }

        let precision =
            linalg::invert(cov, dim).ok_or_else(|| OracleError::SingularCovariance {
                variables: names.join(", "),
            })?;

        let denom = precision[0] * precision[dim + 1];
        if !denom.is_finite() || denom <= 0.0 {
            return Err(OracleError::SingularCovariance {
                variables: names.join(", "),
            });
        }
        let r = (-precision[1] / denom.sqrt()).clamp(-1.0, 1.0);

        let dof = (n - k - 2) as f64;
        two_sided_p(r, dof, n, k)
    }
}

fn column<'a>(data: &'a Dataset, name: &str) -> Result<&'a [f64], OracleError> {
    data.column(name).map_err(|_| OracleError::UnknownVariable {
        variable: name.to_string(),
    })
}

/// Sample covariance (n - 1 denominator), row-major `dim` x `dim`.
fn covariance_matrix(cols: &[&[f64]], n: usize) -> Vec<f64> {
    let dim = cols.len();
    let n_f = n as f64;
    let means: Vec<f64> = cols
        .iter()
        .map(|c| c.iter().sum::<f64>() / n_f)
        .collect();

    let mut cov = vec![0.0; dim * dim];
    for i in 0..dim {
        for j in i..dim {
            let mut acc = 0.0;
            for row in 0..n {
                acc += (cols[i][row] - means[i]) * (cols[j][row] - means[j]);
            }
            let value = acc / (n_f - 1.0);
            cov[i * dim + j] = value;
            cov[j * dim + i] = value;
        }
    }
    cov
}

/// Two-sided p-value for a (partial) correlation under the t-distribution.
fn two_sided_p(r: f64, dof: f64, n: usize, k: usize) -> Result<f64, OracleError> {
    let r2 = r * r;
    if 1.0 - r2 <= f64::EPSILON {
        // Numerically perfect correlation.
        return Ok(0.0);
    }
    let t = r * (dof / (1.0 - r2)).sqrt();

    match StudentsT::new(0.0, 1.0, dof) {
        Ok(dist) => {
            let p = 2.0 * (1.0 - dist.cdf(t.abs()));
            Ok(p.clamp(0.0, 1.0))
        }
        Err(_) => Err(OracleError::InsufficientObservations {
            required: k + MIN_EXTRA_OBSERVATIONS,
            actual: n,
        }),
    }
}
