//! Symmetric positive-definite validation (Sylvester's criterion).
//!
//! Symmetry is compared entrywise; with a zero tolerance this is exact equality `A == Aᵀ`,
//! so a matrix carrying floating-point noise off the diagonal is rejected.
//!
//! Positive-definiteness is checked through the determinants of every leading principal
//! submatrix. Each determinant is computed from scratch by LU with partial pivoting on a copy
//! of the `k×k` block, so the full test costs O(n⁴). That is acceptable for the dense systems
//! this crate targets; it is the dominant cost of a CG solve on small inputs.

use crate::core::traits::{MatShape, MatrixGet};
use num_traits::Float;

/// True if `|a_ij - a_ji| <= tol` for all `i, j`. A zero `tol` means exact equality.
pub fn is_symmetric<M, T>(a: &M, tol: T) -> bool
where
    M: MatrixGet<T> + MatShape,
    T: Float,
{
    if !a.is_square() {
        return false;
    }
    let n = a.nrows();
    for i in 0..n {
        for j in (i + 1)..n {
            let (aij, aji) = (a.get(i, j), a.get(j, i));
            let ok = if tol == T::zero() {
                aij == aji
            } else {
                (aij - aji).abs() <= tol
            };
            if !ok {
                return false;
            }
        }
    }
    true
}

/// Determinant of the leading `k×k` block of `a`.
pub fn determinant<M, T>(a: &M, k: usize) -> T
where
    M: MatrixGet<T>,
    T: Float,
{
    let mut lu: Vec<Vec<T>> = (0..k).map(|i| (0..k).map(|j| a.get(i, j)).collect()).collect();
    let mut det = T::one();
    for col in 0..k {
        let mut p = col;
        for row in (col + 1)..k {
            if lu[row][col].abs() > lu[p][col].abs() {
                p = row;
            }
        }
        if lu[p][col] == T::zero() {
            return T::zero();
        }
        if p != col {
            lu.swap(p, col);
            det = -det;
        }
        let pivot = lu[col][col];
        det = det * pivot;
        for row in (col + 1)..k {
            let factor = lu[row][col] / pivot;
            for c in col..k {
                lu[row][c] = lu[row][c] - factor * lu[col][c];
            }
        }
    }
    det
}

/// Determinants of the leading principal submatrices, `k = 1..=n`.
pub fn leading_principal_minors<M, T>(a: &M) -> Vec<T>
where
    M: MatrixGet<T> + MatShape,
    T: Float,
{
    (1..=a.nrows()).map(|k| determinant(a, k)).collect()
}

/// Index `k` (1-based) of the first leading principal minor that is `<= 0`, if any.
///
/// Stops at the first failure instead of computing every minor.
pub fn first_nonpositive_minor<M, T>(a: &M) -> Option<usize>
where
    M: MatrixGet<T> + MatShape,
    T: Float,
{
    (1..=a.nrows()).find(|&k| determinant(a, k) <= T::zero())
}

/// Symmetry plus Sylvester's criterion.
pub fn is_spd<M, T>(a: &M, symmetry_tol: T) -> bool
where
    M: MatrixGet<T> + MatShape,
    T: Float,
{
    is_symmetric(a, symmetry_tol) && first_nonpositive_minor(a).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use faer::Mat;

    fn mat(rows: &[&[f64]]) -> Mat<f64> {
        Mat::from_fn(rows.len(), rows[0].len(), |i, j| rows[i][j])
    }

    #[test]
    fn exact_symmetry_rejects_noise() {
        let a = mat(&[&[2.0, 1.0], &[1.0 + 1e-15, 2.0]]);
        assert!(!is_symmetric(&a, 0.0));
        assert!(is_symmetric(&a, 1e-12));
    }

    #[test]
    fn determinant_matches_hand_computation() {
        let a = mat(&[&[6.0, 0.0, 1.0], &[0.0, 7.0, 3.0], &[1.0, 3.0, 8.0]]);
        assert_abs_diff_eq!(determinant(&a, 1), 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(determinant(&a, 2), 42.0, epsilon = 1e-12);
        assert_abs_diff_eq!(determinant(&a, 3), 275.0, epsilon = 1e-10);
    }

    #[test]
    fn determinant_with_row_swap_flips_sign() {
        let a = mat(&[&[0.0, 1.0], &[1.0, 0.0]]);
        assert_abs_diff_eq!(determinant(&a, 2), -1.0, epsilon = 1e-15);
    }

    #[test]
    fn singular_block_has_zero_determinant() {
        let a = mat(&[&[1.0, 2.0], &[2.0, 4.0]]);
        assert_eq!(first_nonpositive_minor(&a), Some(2));
    }

    #[test]
    fn sylvester_flags_negative_leading_entry() {
        let a = mat(&[&[-1.0, 0.0], &[0.0, 1.0]]);
        assert_eq!(first_nonpositive_minor(&a), Some(1));
        assert!(!is_spd(&a, 0.0));
    }

    #[test]
    fn spd_matrix_passes() {
        let a = mat(&[&[4.0, 1.0], &[1.0, 3.0]]);
        let minors = leading_principal_minors(&a);
        assert_abs_diff_eq!(minors[0], 4.0, epsilon = 1e-15);
        assert_abs_diff_eq!(minors[1], 11.0, epsilon = 1e-12);
        assert!(is_spd(&a, 0.0));
    }
}
