//! Tests for naive Gaussian elimination against faer's pivoted LU on random systems,
//! plus the textbook scenario and the zero-pivot failure mode.

use approx::assert_abs_diff_eq;
use faer::Mat;
use faer::linalg::solvers::SolveCore;
use gausscg::core::residual_norm;
use gausscg::solver::{GaussSolver, LinearSolver, solve_direct};
use gausscg::SolveError;
use rand::Rng;

/// Random diagonally dominant matrix: every diagonal pivot stays well away from zero
/// during elimination, so the unpivoted algorithm is stable.
fn random_diag_dominant(n: usize) -> (Mat<f64>, Vec<f64>) {
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..n * n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let a: Mat<f64> = Mat::from_fn(n, n, |i, j| {
        let v = data[j * n + i];
        if i == j { v + n as f64 + 1.0 } else { v }
    });
    let b: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();
    (a, b)
}

#[test]
fn textbook_three_by_three() {
    let rows = [[1.0, 2.0, 3.0], [2.0, 3.0, 1.0], [3.0, 1.0, 2.0]];
    let a: Mat<f64> = Mat::from_fn(3, 3, |i, j| rows[i][j]);
    let x = solve_direct(&a, &[14.0, 11.0, 11.0]).unwrap();
    for (xi, ei) in x.iter().zip([1.0, 2.0, 3.0]) {
        assert_abs_diff_eq!(*xi, ei, epsilon = 1e-12);
    }
}

/// Gaussian elimination matches faer's full-pivot LU and leaves a tiny residual.
#[test]
fn gauss_vs_faer_lu_on_random_system() {
    let n = 12;
    let (a, b) = random_diag_dominant(n);
    let mut x = vec![0.0; n];
    let stats = GaussSolver::new().solve(&a, &b, &mut x).unwrap();
    assert!(stats.final_residual < 1e-9, "residual = {:e}", stats.final_residual);

    let mut x_lu = b.clone();
    let lu = faer::linalg::solvers::FullPivLu::new(a.as_ref());
    let x_mat = faer::MatMut::from_column_major_slice_mut(&mut x_lu, n, 1);
    lu.solve_in_place_with_conj(faer::Conj::No, x_mat);
    for i in 0..n {
        assert_abs_diff_eq!(x[i], x_lu[i], epsilon = 1e-9);
    }
}

#[test]
fn repeated_solves_are_bit_identical() {
    let (a, b) = random_diag_dominant(8);
    let x1 = solve_direct(&a, &b).unwrap();
    let x2 = solve_direct(&a, &b).unwrap();
    assert_eq!(x1, x2);
}

/// A non-singular matrix whose first pivot is zero: elimination without row exchanges
/// produces non-finite values instead of an error.
#[test]
fn zero_pivot_is_a_silent_failure() {
    let rows = [[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
    let a: Mat<f64> = Mat::from_fn(3, 3, |i, j| rows[i][j]);
    let b = vec![1.0, 2.0, 3.0];
    let x: Vec<f64> = solve_direct(&a, &b).unwrap();
    assert!(x.iter().any(|v| !v.is_finite()));
    assert!(!residual_norm(&a, &x, &b).is_finite());

    let res = GaussSolver::new().with_zero_pivot_detection(true).solve_vec(&a, &b);
    assert_eq!(res, Err(SolveError::ZeroPivot(0)));
}

#[test]
fn dimension_mismatch_is_invalid_input() {
    let a: Mat<f64> = Mat::from_fn(3, 3, |i, j| if i == j { 1.0 } else { 0.0 });
    assert!(matches!(solve_direct(&a, &[1.0, 2.0]), Err(SolveError::InvalidInput(_))));
}
