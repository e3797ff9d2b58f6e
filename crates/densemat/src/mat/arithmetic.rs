//! Element-wise and matrix-matrix arithmetic.

use std::ops::Neg;

use crate::error::{MatrixError, Result};
use crate::mat::factory;
use crate::mat::Matrix;

/// Right-hand side of `add`, `sub` and `multiply`: another matrix or a scalar
/// broadcast to every element.
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a> {
    Matrix(&'a Matrix),
    Scalar(f64),
}

impl<'a> From<&'a Matrix> for Operand<'a> {
    fn from(value: &'a Matrix) -> Self {
        Operand::Matrix(value)
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl Matrix {
    fn same_shape(&self, other: &Matrix, op: &'static str) -> Result<()> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(MatrixError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            })
        }
    }

    fn zip_with<F>(&self, other: &Matrix, op: &'static str, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.same_shape(other, op)?;
        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix::from_shape_vec(self.shape(), data)
    }

    /// Element-wise sum with a same-shape matrix, or a scalar added everywhere.
    pub fn add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Matrix> {
        match rhs.into() {
            Operand::Matrix(m) => self.zip_with(m, "add", |a, b| a + b),
            Operand::Scalar(k) => Ok(self.map(|x| x + k)),
        }
    }

    /// Element-wise difference with a same-shape matrix, or a scalar subtracted everywhere.
    pub fn sub<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Matrix> {
        match rhs.into() {
            Operand::Matrix(m) => self.zip_with(m, "sub", |a, b| a - b),
            Operand::Scalar(k) => Ok(self.map(|x| x - k)),
        }
    }

    /// Same as [`Matrix::sub`].
    pub fn subtract<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Matrix> {
        self.sub(rhs)
    }

    /// Same as [`Matrix::sub`].
    pub fn diff<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Matrix> {
        self.sub(rhs)
    }

    /// Matrix product for a matrix operand, scaling for a scalar one.
    pub fn multiply<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Matrix> {
        match rhs.into() {
            Operand::Matrix(m) => self.matmul(m),
            Operand::Scalar(k) => Ok(self.kmatmul(k)),
        }
    }

    /// Standard matrix product; requires `self.ncols() == rhs.nrows()`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        let (n, inner) = self.shape();
        let (rhs_rows, m) = rhs.shape();
        if inner != rhs_rows {
            return Err(MatrixError::DimensionMismatch {
                op: "matmul",
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        let mut out = factory::zeros(n, m);
        for i in 0..n {
            for k in 0..inner {
                let a = self[(i, k)];
                for j in 0..m {
                    out[(i, j)] += a * rhs[(k, j)];
                }
            }
        }
        Ok(out)
    }

    /// Every element multiplied by `k`.
    pub fn kmatmul(&self, k: f64) -> Matrix {
        self.map(|x| x * k)
    }

    /// Hadamard (element-wise) product.
    pub fn linmul(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, "linmul", |a, b| a * b)
    }

    /// Inner product as a 1x1 matrix when both operands are vectors of the
    /// same shape, the matrix product otherwise.
    pub fn dot(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.shape() == rhs.shape() && self.ndims() == 1 && rhs.ndims() == 1 {
            factory::inner_prod(self, rhs)
        } else {
            self.multiply(rhs)
        }
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}
