//! Gradient descent on y = 12.5x + 21.
use anyhow::Result;
use densemat::mat;
use rand::Rng;

fn main() -> Result<()> {
    env_logger::init();

    let x = mat::linspace(0.0, 5.0, 100)?.t();
    let y = x.multiply(12.5)?.add(21.0)?;
    let n = y.size() as f64;

    let mut w = mat::rand(1, 1);
    let mut b: f64 = rand::thread_rng().gen_range(0.0..20.0);

    let lr = 0.01;
    let epochs = 1000;

    for epoch in 0..epochs {
        let y_hat = x.dot(&w)?.add(b)?;
        let residual = y.diff(&y_hat)?;

        let loss = residual.clone().pow(2.0).sum().as_scalar()? / n;
        let dw = x.t().dot(&residual)?.sum().multiply(-2.0 / n)?;
        let db = residual.sum().as_scalar()? * -2.0 / n;

        w = w.diff(&dw.multiply(lr)?)?;
        b -= lr * db;

        if (epoch + 1) % 100 == 0 {
            println!("Epoch {}, loss: {:.6}", epoch + 1, loss);
        }
    }

    println!("w = {:.4}, b = {:.4}", w.as_scalar()?, b);
    Ok(())
}
