//! Logistic regression by batch gradient descent on a small two-class data set.
use std::path::PathBuf;

use anyhow::Result;
use densemat::{io, mat, Matrix};

fn sigmoid(z: &Matrix) -> Matrix {
    z.map(|v| 1.0 / (1.0 + (-v).exp()))
}

fn predict(x: &Matrix, w: &Matrix) -> Result<Matrix> {
    let mut h = sigmoid(&x.dot(w)?);
    h.apply(|p| if p >= 0.5 { 1.0 } else { 0.0 });
    Ok(h)
}

fn accuracy(y: &Matrix, y_hat: &Matrix) -> f64 {
    let hits = y.iter().zip(y_hat.iter()).filter(|(a, b)| a == b).count();
    hits as f64 / y.size() as f64
}

fn main() -> Result<()> {
    env_logger::init();

    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("examples/data/two_blobs.csv");
    let mut table = io::load_txt(&path)?;

    // drop the id column and encode the label
    for row in table.iter_mut() {
        row.remove(0);
        row[0] = if row[0] == "B" { "0".into() } else { "1".into() };
    }
    let mut data = Matrix::parse_table(&table)?;
    data.shuffle();

    let y = Matrix::new(vec![data.get_column(0)?])?.t();
    data.delete_column(0)?;
    let x = mat::horzcat(&mat::ones(data.nrows(), 1), &data)?;
    let n = y.size() as f64;

    let mut w = mat::rand(x.ncols(), 1);
    let lr = 0.1;
    let epochs = 50;

    for epoch in 0..epochs {
        let h = sigmoid(&x.dot(&w)?);

        // -y*log(h) - (1-y)*log(1-h)
        let positive = y.neg().linmul(&mat::log(&h))?;
        let negative = y.neg().add(1.0)?.linmul(&mat::log(&h.neg().add(1.0)?))?;
        let loss = positive.diff(&negative)?.mean_all().as_scalar()?;

        let dw = x.t().dot(&h.diff(&y)?)?.multiply(1.0 / n)?;
        w = w.diff(&dw.multiply(lr)?)?;

        let acc = accuracy(&y, &predict(&x, &w)?);
        println!("Epoch {}, loss: {:.6}, accuracy: {:.3}", epoch + 1, loss, acc);
    }

    Ok(())
}
