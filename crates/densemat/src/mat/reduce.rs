//! Reductions and element-wise utilities.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};
use crate::mat::{linalg, Matrix};

/// Direction of a reduction such as [`Matrix::mean`].
///
/// `Axis::Columns` is axis 0 (collapse the rows, one value per column) and
/// `Axis::Rows` is axis 1 (one value per row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Columns,
    Rows,
}

impl TryFrom<usize> for Axis {
    type Error = MatrixError;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            0 => Ok(Axis::Columns),
            1 => Ok(Axis::Rows),
            other => Err(MatrixError::InvalidArgument(format!(
                "axis must be 0 or 1, got {}",
                other
            ))),
        }
    }
}

impl Matrix {
    /// Sum of all elements, as a 1x1 matrix.
    pub fn sum(&self) -> Matrix {
        Matrix::filled(1, 1, self.as_slice().iter().sum())
    }

    /// Mean of every element, as a 1x1 matrix. NaN for an empty matrix.
    pub fn mean_all(&self) -> Matrix {
        self.sum().kmatmul(1.0 / self.size() as f64)
    }

    /// Means along `axis`: 1 x cols for [`Axis::Columns`], rows x 1 for [`Axis::Rows`].
    pub fn mean(&self, axis: Axis) -> Matrix {
        match axis {
            Axis::Columns => self.column_mean(),
            Axis::Rows => self.row_mean(),
        }
    }

    pub fn column_mean(&self) -> Matrix {
        let (rows, cols) = self.shape();
        let mut means = vec![0.0; cols];
        for r in 0..rows {
            for (acc, &v) in means.iter_mut().zip(self.row_slice(r)) {
                *acc += v;
            }
        }
        for v in means.iter_mut() {
            *v /= rows as f64;
        }
        let mut out = Matrix::empty();
        out.replace(1, cols, means);
        out
    }

    pub fn row_mean(&self) -> Matrix {
        let (rows, cols) = self.shape();
        let means = (0..rows)
            .map(|r| self.row_slice(r).iter().sum::<f64>() / cols as f64)
            .collect();
        let mut out = Matrix::empty();
        out.replace(rows, 1, means);
        out
    }

    /// Largest element. NaN wins over any number; an empty matrix gives `-inf`.
    pub fn max(&self) -> f64 {
        self.as_slice()
            .iter()
            .fold(f64::NEG_INFINITY, |acc, &x| {
                if acc.is_nan() || x.is_nan() {
                    f64::NAN
                } else {
                    acc.max(x)
                }
            })
    }

    /// Frobenius norm, see [`linalg::norm`].
    pub fn norm(&self) -> f64 {
        linalg::norm(self)
    }

    pub fn abs(&self) -> Matrix {
        self.map(f64::abs)
    }

    /// Every element negated, as a new matrix.
    pub fn neg(&self) -> Matrix {
        self.map(|x| -x)
    }

    /// Raise every element to `n`, in place.
    pub fn pow(&mut self, n: f64) -> &mut Self {
        self.apply(|x| x.powf(n))
    }

    /// New matrix with `f` applied to every element.
    pub fn map<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        let mut out = Matrix::empty();
        out.replace(
            self.nrows(),
            self.ncols(),
            self.as_slice().iter().map(|&v| f(v)).collect(),
        );
        out
    }

    /// Apply `f` to every element, in place.
    pub fn apply<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(f64) -> f64,
    {
        for v in self.as_mut_slice() {
            *v = f(*v);
        }
        self
    }

    /// Exact content equality: same shape and identical elements. Unlike
    /// `==`, NaN matches NaN.
    pub fn equals(&self, other: &Matrix) -> bool {
        self.shape() == other.shape()
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| a == b || (a.is_nan() && b.is_nan()))
    }

    /// Shuffle the rows in place using the thread-local RNG.
    pub fn shuffle(&mut self) -> &mut Self {
        let mut rng = rand::thread_rng();
        self.shuffle_with(&mut rng)
    }

    /// Inside-out Fisher-Yates over the rows: row `i` is swapped with a
    /// uniformly drawn row `j` in `0..=i`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        for i in 0..self.nrows() {
            let j = rng.gen_range(0..=i);
            self.swap_rows(i, j);
        }
        self
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.ncols();
        let data = self.as_mut_slice();
        for c in 0..cols {
            data.swap(a * cols + c, b * cols + c);
        }
    }

    /// Replace every NaN with 0, in place.
    pub fn nanto(&mut self) -> &mut Self {
        self.apply(|x| if x.is_nan() { 0.0 } else { x })
    }

    /// The only element of a 1x1 matrix.
    pub fn as_scalar(&self) -> Result<f64> {
        match self.as_slice() {
            [value] => Ok(*value),
            _ => Err(MatrixError::InvalidArgument(format!(
                "as_scalar needs exactly one element, matrix has {}",
                self.size()
            ))),
        }
    }
}
