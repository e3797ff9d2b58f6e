//! Fit a + b*x + c*x^2 + d*x^3 through four points with the normal equations
//! `x = inv(A^T A) A^T b`. The exact coefficients are (2.7, 3.5, -3.83, 5.0).
use anyhow::Result;
use densemat::Matrix;

fn main() -> Result<()> {
    env_logger::init();

    let a = Matrix::new(vec![
        vec![1.0, -2.0, 4.0, -8.0],
        vec![1.0, 0.7, 0.49, 0.343],
        vec![1.0, 1.2, 1.44, 1.728],
        vec![1.0, 3.0, 9.0, 27.0],
    ])?;
    let b = Matrix::new(vec![vec![-59.62, 4.9883, 10.0248, 113.73]])?.t();

    let at = a.t();
    let coefficients = at.multiply(&a)?.inv()?.multiply(&at)?.multiply(&b)?;

    for (name, value) in ["a", "b", "c", "d"].iter().zip(coefficients.iter()) {
        println!("{} = {:.4}", name, value);
    }
    Ok(())
}
