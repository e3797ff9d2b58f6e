//! Free functions that build or combine matrices.

use rand::Rng;

use crate::error::{MatrixError, Result};
use crate::mat::{Axis, Matrix};

/// A 0x0 matrix.
pub fn empty() -> Matrix {
    Matrix::empty()
}

pub fn zeros(rows: usize, cols: usize) -> Matrix {
    Matrix::filled(rows, cols, 0.0)
}

pub fn ones(rows: usize, cols: usize) -> Matrix {
    Matrix::filled(rows, cols, 1.0)
}

/// Identity matrix of size `n`.
pub fn eye(n: usize) -> Matrix {
    let mut m = zeros(n, n);
    for i in 0..n {
        m[(i, i)] = 1.0;
    }
    m
}

/// Uniform samples in `[0, 1)` from the thread-local RNG.
pub fn rand(rows: usize, cols: usize) -> Matrix {
    rand_with(rows, cols, &mut ::rand::thread_rng())
}

/// Uniform samples in `[0, 1)` drawn from `rng`.
pub fn rand_with<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
    let mut m = zeros(rows, cols);
    for v in m.as_mut_slice() {
        *v = rng.gen::<f64>();
    }
    m
}

fn require_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MatrixError::InvalidArgument(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive, as one row.
pub fn linspace(start: f64, end: f64, n: usize) -> Result<Matrix> {
    require_finite("start", start)?;
    require_finite("end", end)?;
    if !(end > start) {
        return Err(MatrixError::InvalidArgument(format!(
            "invalid range: end ({}) must be greater than start ({})",
            end, start
        )));
    }
    if n == 0 {
        return Err(MatrixError::InvalidArgument(
            "linspace needs at least one element".to_string(),
        ));
    }
    if n == 1 {
        return Ok(Matrix::filled(1, 1, start));
    }

    let step = (end - start) / (n - 1) as f64;
    let values = (0..n).map(|i| start + step * i as f64).collect();
    Matrix::from_shape_vec((1, n), values)
}

/// Values `start, start + step, ...` strictly below `end`, as one row.
pub fn arange(start: f64, end: f64, step: f64) -> Result<Matrix> {
    require_finite("start", start)?;
    require_finite("end", end)?;
    require_finite("step", step)?;
    if !(end > start) {
        return Err(MatrixError::InvalidArgument(format!(
            "invalid range: end ({}) must be greater than start ({})",
            end, start
        )));
    }
    if !(step > 0.0) {
        return Err(MatrixError::InvalidArgument(format!(
            "invalid step {}",
            step
        )));
    }

    let n = ((end - start) / step).ceil() as usize;
    let values = (0..n).map(|i| start + step * i as f64).collect();
    Matrix::from_shape_vec((1, n), values)
}

/// Square matrix with the elements of a one-row `vector` on its diagonal.
pub fn diag(vector: &Matrix) -> Result<Matrix> {
    if vector.nrows() != 1 {
        return Err(MatrixError::InvalidArgument(format!(
            "expected vector with 1 row, got vector with {} rows",
            vector.nrows()
        )));
    }
    let n = vector.size();
    let mut m = zeros(n, n);
    for (i, v) in vector.iter().enumerate() {
        m[(i, i)] = v;
    }
    Ok(m)
}

pub fn from_array(table: Vec<Vec<f64>>) -> Result<Matrix> {
    Matrix::new(table)
}

/// Independent deep copy.
pub fn from_matrix(m: &Matrix) -> Matrix {
    m.clone()
}

/// `row` scaled by `k`.
pub fn row_kmatmul(row: &[f64], k: f64) -> Vec<f64> {
    row.iter().map(|x| x * k).collect()
}

/// `b`'s columns appended to the right of `a`.
pub fn horzcat(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.nrows() != b.nrows() {
        return Err(MatrixError::DimensionMismatch {
            op: "horzcat",
            left: a.shape(),
            right: b.shape(),
        });
    }
    let mut data = Vec::with_capacity(a.size() + b.size());
    for (left, right) in a.iter_rows().zip(b.iter_rows()) {
        data.extend_from_slice(left);
        data.extend_from_slice(right);
    }
    Matrix::from_shape_vec((a.nrows(), a.ncols() + b.ncols()), data)
}

/// `b`'s rows appended below `a`.
pub fn vertcat(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.ncols() != b.ncols() {
        return Err(MatrixError::DimensionMismatch {
            op: "vertcat",
            left: a.shape(),
            right: b.shape(),
        });
    }
    let mut data = Vec::with_capacity(a.size() + b.size());
    data.extend_from_slice(a.as_slice());
    data.extend_from_slice(b.as_slice());
    Matrix::from_shape_vec((a.nrows() + b.nrows(), a.ncols()), data)
}

pub fn sum(m: &Matrix) -> Matrix {
    m.sum()
}

pub fn mean(m: &Matrix, axis: Axis) -> Matrix {
    m.mean(axis)
}

/// Mean of every element as a 1x1 matrix, see [`Matrix::mean_all`].
pub fn mean_all(m: &Matrix) -> Matrix {
    m.mean_all()
}

/// Natural logarithm of every element.
pub fn log(m: &Matrix) -> Matrix {
    m.map(f64::ln)
}

/// Sum of element-wise products as a 1x1 matrix. `b` is read in `a`'s shape,
/// so both need the same number of elements.
pub fn inner_prod(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let b = b.reshape(a.shape())?;
    let total = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    Ok(Matrix::filled(1, 1, total))
}
