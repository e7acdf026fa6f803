//! Dense matrix helpers for the partial-correlation oracle.

use causeway_core::constants::SINGULARITY_EPSILON;

/// Invert an `n` x `n` row-major matrix via Gauss-Jordan elimination with
/// partial pivoting.
///
/// Returns `None` when a pivot falls below the singularity threshold,
/// relative to the largest diagonal magnitude of the input.
pub fn invert(mut a: Vec<f64>, n: usize) -> Option<Vec<f64>> {
    debug_assert_eq!(a.len(), n * n);

    let scale = (0..n)
        .map(|i| a[i * n + i].abs())
        .fold(1.0_f64, f64::max);
    let threshold = SINGULARITY_EPSILON * scale;

    let mut inv = vec![0.0; n * n];
    for i in 0..n {
        inv[i * n + i] = 1.0;
    }

    for col in 0..n {
        // Partial pivot: largest magnitude in the column at or below the diagonal.
        let mut pivot_row = col;
        let mut best = a[col * n + col].abs();
        for row in (col + 1)..n {
            let candidate = a[row * n + col].abs();
            if candidate > best {
                best = candidate;
                pivot_row = row;
            }
        }
        if best < threshold {
            return None;
        }
        if pivot_row != col {
            swap_rows(&mut a, n, col, pivot_row);
            swap_rows(&mut inv, n, col, pivot_row);
        }

        let pivot = a[col * n + col];
        for j in 0..n {
            a[col * n + j] /= pivot;
            inv[col * n + j] /= pivot;
        }

        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = a[row * n + col];
            if factor == 0.0 {
                continue;
            }
            for j in 0..n {
                a[row * n + j] -= factor * a[col * n + j];
                inv[row * n + j] -= factor * inv[col * n + j];
            }
        }
    }

    Some(inv)
}

fn swap_rows(m: &mut [f64], n: usize, r1: usize, r2: usize) {
    for j in 0..n {
        m.swap(r1 * n + j, r2 * n + j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &[f64], b: &[f64], tol: f64) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < tol)
    }

    #[test]
    fn inverts_identity() {
        let id = vec![1.0, 0.0, 0.0, 1.0];
        let inv = invert(id.clone(), 2).unwrap();
        assert!(approx_eq(&inv, &id, 1e-12));
    }

    #[test]
    fn inverts_known_2x2() {
        // [[4, 7], [2, 6]] has inverse [[0.6, -0.7], [-0.2, 0.4]].
        let inv = invert(vec![4.0, 7.0, 2.0, 6.0], 2).unwrap();
        assert!(approx_eq(&inv, &[0.6, -0.7, -0.2, 0.4], 1e-12));
    }

    #[test]
    fn inverts_symmetric_3x3() {
        // M = [[1, 0, 1], [0, 1, 1], [1, 1, 2.0625]], det = 0.0625.
        let m = vec![1.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 2.0625];
        let expected = vec![
            17.0, 16.0, -16.0, //
            16.0, 17.0, -16.0, //
            -16.0, -16.0, 16.0,
        ];
        let inv = invert(m, 3).unwrap();
        assert!(approx_eq(&inv, &expected, 1e-9));
    }

    #[test]
    fn singular_matrix_is_rejected() {
        // Second row is a multiple of the first.
        assert!(invert(vec![1.0, 2.0, 2.0, 4.0], 2).is_none());
    }

    #[test]
    fn zero_matrix_is_rejected() {
        assert!(invert(vec![0.0; 9], 3).is_none());
    }
}
