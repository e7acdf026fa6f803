//! Deterministic synthetic datasets for the discovery test suites.
//!
//! The structural fixtures are exact orthogonal designs built from square
//! waves: sample correlations that should vanish, vanish identically, so
//! tests can assert against exact p-values instead of seeded approximations.
//! `noisy_dataset` provides seeded Gaussian data for benchmarks and property
//! suites where exactness is not required.

use causeway_core::dataset::Dataset;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Square wave over `n` points: +1 for the first `block` indices of each
/// period, -1 for the next `block`.
///
/// Waves with distinct power-of-two blocks over a power-of-two length are
/// mutually orthogonal and sum to zero.
fn square_wave(n: usize, block: usize) -> Vec<f64> {
    (0..n)
        .map(|i| if (i / block) % 2 == 0 { 1.0 } else { -1.0 })
        .collect()
}

fn combine(terms: &[(f64, &[f64])]) -> Vec<f64> {
    let n = terms[0].1.len();
    (0..n)
        .map(|i| terms.iter().map(|(w, v)| w * v[i]).sum())
        .collect()
}

/// Three variables with true structure a -> c <- b.
///
/// `a` and `b` are exactly uncorrelated (p = 1 marginally); both drive `c`,
/// and conditioning on `c` induces a strong dependence between them.
pub fn collider_dataset() -> Dataset {
    let n = 16;
    let a = square_wave(n, 8);
    let b = square_wave(n, 4);
    let noise = square_wave(n, 1);
    let c = combine(&[(1.0, &a), (1.0, &b), (0.25, &noise)]);
    Dataset::from_columns([("a", a), ("b", b), ("c", c)]).unwrap()
}

/// Three variables with true structure a -> b -> c.
///
/// The noise terms are orthogonal to everything upstream, so the sample
/// partial correlation of `a` and `c` given `b` is exactly zero.
pub fn chain_dataset() -> Dataset {
    let n = 16;
    let a = square_wave(n, 8);
    let b = combine(&[(1.0, &a), (0.5, &square_wave(n, 1))]);
    let c = combine(&[(1.0, &b), (0.5, &square_wave(n, 2))]);
    Dataset::from_columns([("a", a), ("b", b), ("c", c)]).unwrap()
}

/// Two exactly uncorrelated variables.
pub fn independent_pair_dataset() -> Dataset {
    let n = 8;
    Dataset::from_columns([("a", square_wave(n, 4)), ("b", square_wave(n, 1))]).unwrap()
}

/// Two strongly dependent variables.
pub fn correlated_pair_dataset() -> Dataset {
    let n = 16;
    let a = square_wave(n, 8);
    let b = combine(&[(1.0, &a), (0.5, &square_wave(n, 1))]);
    Dataset::from_columns([("a", a), ("b", b)]).unwrap()
}

/// Independent Gaussian columns `v0..v{vars}`, deterministic for a seed.
pub fn noisy_dataset(vars: usize, rows: usize, seed: u64) -> Dataset {
    let mut rng = SmallRng::seed_from_u64(seed);
    let columns: Vec<(String, Vec<f64>)> = (0..vars)
        .map(|v| {
            let values = (0..rows).map(|_| standard_normal(&mut rng)).collect();
            (format!("v{v}"), values)
        })
        .collect();
    Dataset::from_columns(columns).unwrap()
}

/// Box-Muller transform over the unit interval.
fn standard_normal(rng: &mut SmallRng) -> f64 {
    let u1: f64 = rng.random_range(f64::MIN_POSITIVE..1.0);
    let u2: f64 = rng.random_range(0.0..1.0);
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}
