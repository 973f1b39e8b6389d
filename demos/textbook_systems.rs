use faer::Mat;
use gausscg::solver::{IterativeOutcome, solve_direct, solve_iterative};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .ok();

    // Gaussian elimination
    let a = Mat::from_fn(3, 3, |i, j| [[1.0, 2.0, 3.0], [2.0, 3.0, 1.0], [3.0, 1.0, 2.0]][i][j]);
    let b = [14.0, 11.0, 11.0];
    match solve_direct(&a, &b) {
        Ok(x) => println!("gauss x = {}", fmt(&x)),
        Err(e) => println!("gauss failed: {}", e),
    }

    // Conjugate gradient
    let rows = [
        [6.0, 0.0, 1.0, 2.0],
        [0.0, 7.0, 3.0, 4.0],
        [1.0, 3.0, 8.0, 5.0],
        [2.0, 4.0, 5.0, 9.0],
    ];
    let a = Mat::from_fn(4, 4, |i, j| rows[i][j]);
    let b = [17.0, 39.0, 51.0, 61.0];
    for maxiter in [1000, 1] {
        match solve_iterative(&a, &b, 1e-6, maxiter, &[0.0; 4]) {
            Ok(IterativeOutcome::Converged { x, iterations, .. }) => {
                println!("cg converged in {} iterations, x = {}", iterations, fmt(&x))
            }
            Ok(IterativeOutcome::MaxIterationsExceeded { x, residual, .. }) => {
                println!(
                    "cg hit maxiter = {} (residual {:.3e}), x = {}",
                    maxiter,
                    residual,
                    fmt(&x)
                )
            }
            Err(e) => println!("cg failed: {}", e),
        }
    }

    let not_spd = Mat::from_fn(2, 2, |i, j| [[1.0, 2.0], [3.0, 4.0]][i][j]);
    if let Err(e) = solve_iterative(&not_spd, &[1.0, 1.0], 1e-6, 100, &[0.0, 0.0]) {
        println!("cg on non-symmetric matrix: {}", e);
    }
}

fn fmt(x: &[f64]) -> String {
    let parts: Vec<String> = x.iter().map(|v| format!("{:.4}", v)).collect();
    format!("[{}]", parts.join(", "))
}
