//! Determinant, cofactors, inverse and LU decomposition.
//!
//! The determinant is computed by recursive Laplace expansion along the first
//! row. That is exact for small integer-valued inputs and costs O(n!), so it
//! is only meant for small matrices. The LU decomposition follows Doolittle's
//! scheme without pivoting.

use crate::error::{MatrixError, Result};
use crate::mat::Matrix;

/// Matrices whose determinant magnitude is at or below this value are treated
/// as singular.
pub const MIN_DET: f64 = 1e-9;

/// Frobenius norm: `sqrt(sum(|x|^2))`.
pub fn norm(m: &Matrix) -> f64 {
    m.as_slice().iter().map(|x| x.abs().powi(2)).sum::<f64>().sqrt()
}

impl Matrix {
    pub const MIN_DET: f64 = MIN_DET;

    fn require_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatrixError::NotSquare {
                rows: self.nrows(),
                cols: self.ncols(),
            })
        }
    }

    /// Copy of the matrix without row `row` and column `col`.
    fn without(&self, row: usize, col: usize) -> Matrix {
        let (rows, cols) = self.shape();
        let mut data = Vec::with_capacity((rows - 1) * (cols - 1));
        for r in (0..rows).filter(|&r| r != row) {
            data.extend(
                self.row_slice(r)
                    .iter()
                    .enumerate()
                    .filter(|&(c, _)| c != col)
                    .map(|(_, &v)| v),
            );
        }
        let mut out = Matrix::empty();
        out.replace(rows - 1, cols - 1, data);
        out
    }

    fn expand_det(&self) -> f64 {
        match self.nrows() {
            0 => 1.0,
            1 => self[(0, 0)],
            2 => self[(0, 0)] * self[(1, 1)] - self[(1, 0)] * self[(0, 1)],
            n => {
                let mut sum = 0.0;
                let mut sign = 1.0;
                for col in 0..n {
                    sum += sign * self[(0, col)] * self.without(0, col).expand_det();
                    sign = -sign;
                }
                sum
            }
        }
    }

    /// Determinant by cofactor expansion along row 0.
    pub fn det(&self) -> Result<f64> {
        self.require_square()?;
        log::trace!("determinant of a {}x{} matrix", self.nrows(), self.ncols());
        Ok(self.expand_det())
    }

    /// Determinant of the submatrix without row `i` and column `j`.
    pub fn minor(&self, i: usize, j: usize) -> Result<f64> {
        self.check_row(i)?;
        self.check_column(j)?;
        self.without(i, j).det()
    }

    /// `(-1)^(i+j) * minor(i, j)`.
    pub fn cofactor(&self, i: usize, j: usize) -> Result<f64> {
        self.require_square()?;
        let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
        Ok(sign * self.minor(i, j)?)
    }

    /// Matrix of cofactors.
    pub fn cof(&self) -> Result<Matrix> {
        self.require_square()?;
        let n = self.nrows();
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(self.cofactor(i, j)?);
            }
        }
        Matrix::from_shape_vec((n, n), data)
    }

    /// Adjoint (adjugate): transpose of the cofactor matrix.
    pub fn adj(&self) -> Result<Matrix> {
        Ok(self.cof()?.transpose())
    }

    /// True when `|det| <= MIN_DET`.
    pub fn is_singular(&self) -> Result<bool> {
        Ok(self.det()?.abs() <= MIN_DET)
    }

    /// Inverse as `adj() / det()`.
    pub fn inv(&self) -> Result<Matrix> {
        self.require_square()?;
        let det = self.expand_det();
        log::debug!(
            "inverting {}x{} matrix with determinant {}",
            self.nrows(),
            self.ncols(),
            det
        );
        if det.abs() <= MIN_DET {
            return Err(MatrixError::SingularMatrix { det });
        }
        Ok(self.adj()?.kmatmul(1.0 / det))
    }

    /// Doolittle LU decomposition without pivoting, returned as `(L, U)`.
    ///
    /// `L` has a unit diagonal. A zero pivot is not recovered from: the
    /// affected entries of `L` come out as NaN or infinite.
    pub fn lu(&self) -> Result<(Matrix, Matrix)> {
        self.require_square()?;
        let n = self.nrows();
        let mut l = Matrix::filled(n, n, 0.0);
        let mut u = Matrix::filled(n, n, 0.0);

        for i in 0..n {
            for k in i..n {
                let sum: f64 = (0..i).map(|j| l[(i, j)] * u[(j, k)]).sum();
                u[(i, k)] = self[(i, k)] - sum;
            }

            l[(i, i)] = 1.0;
            let pivot = u[(i, i)];
            if pivot == 0.0 && i + 1 < n {
                log::warn!("zero pivot at U[{}][{}]; LU without pivoting will produce non-finite values", i, i);
            }
            for k in (i + 1)..n {
                let sum: f64 = (0..i).map(|j| l[(k, j)] * u[(j, i)]).sum();
                l[(k, i)] = (self[(k, i)] - sum) / pivot;
            }
        }
        log::trace!("LU decomposition of a {}x{} matrix done", n, n);

        Ok((l, u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::new(rows).unwrap()
    }

    #[test]
    fn det_base_cases() {
        assert_eq!(m(vec![vec![7.0]]).det().unwrap(), 7.0);
        assert_eq!(m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).det().unwrap(), -2.0);
        assert_eq!(Matrix::empty().det().unwrap(), 1.0);
    }

    #[test]
    fn det_three_by_three() {
        let a = m(vec![
            vec![5.0, 9.0, 2.0],
            vec![1.0, 8.0, 5.0],
            vec![3.0, 6.0, 4.0],
        ]);
        assert_eq!(a.det().unwrap(), 73.0);
    }

    #[test]
    fn minor_of_non_square_submatrix_fails() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert!(matches!(a.minor(0, 0), Err(MatrixError::NotSquare { .. })));
        assert!(matches!(
            a.minor(2, 0),
            Err(MatrixError::IndexOutOfRange { axis: "row", .. })
        ));
    }

    #[test]
    fn lu_zero_pivot_yields_non_finite_values() {
        let a = m(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        let (l, _u) = a.lu().unwrap();
        assert!(!l[(1, 0)].is_finite());
    }

    #[test]
    fn norm_of_empty_is_zero() {
        assert_eq!(norm(&Matrix::empty()), 0.0);
    }
}
