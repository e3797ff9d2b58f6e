//! Newton-Raphson on the system
//!   x^3 + y = 1
//!   y^3 - x = -1
//! whose root is (1, 0).
use anyhow::Result;
use densemat::{mat, Matrix};

fn main() -> Result<()> {
    env_logger::init();

    let max_iters = 100;
    let eps = 1e-6;

    let mut x = mat::rand(2, 1);
    println!("Seed: {:?}", x.to_vec());

    // every iterate is kept as a column
    let mut history = x.clone();
    let mut err = f64::INFINITY;
    let mut n = 0;

    while err > eps && n < max_iters {
        let (x0, y0) = (x[(0, 0)], x[(1, 0)]);

        let f = Matrix::new(vec![
            vec![x0.powi(3) + y0 - 1.0],
            vec![y0.powi(3) - x0 + 1.0],
        ])?;
        let jacobian = Matrix::new(vec![
            vec![3.0 * x0.powi(2), 1.0],
            vec![-1.0, 3.0 * y0.powi(2)],
        ])?;

        let delta = jacobian.inv()?.multiply(&f)?;
        x = x.sub(&delta)?;
        history = mat::horzcat(&history, &x)?;
        err = delta.abs().max();

        println!(
            "Iteration {} -> x = {:.4}, y = {:.4} -> error = {:.8}",
            n,
            x[(0, 0)],
            x[(1, 0)],
            err
        );
        n += 1;
    }

    if n < max_iters {
        println!("\nThe solution is: {:?}", history.get_column(history.ncols() - 1)?);
    } else {
        println!("Max. number of iterations reached. Problem not solved");
    }
    Ok(())
}
