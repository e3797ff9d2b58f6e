use crate::error::{MatrixError, Result};
use crate::mat::Matrix;

impl Matrix {
    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = self.shape();
        let mut data = Vec::with_capacity(self.size());
        for c in 0..cols {
            for r in 0..rows {
                data.push(self[(r, c)]);
            }
        }
        let mut out = Matrix::empty();
        out.replace(cols, rows, data);
        out
    }

    /// Shorthand for [`Matrix::transpose`].
    pub fn t(&self) -> Matrix {
        self.transpose()
    }

    /// Rectangular block spanning rows `start_row..=end_row` and columns
    /// `start_col..=end_col`.
    pub fn submat(
        &self,
        start_row: usize,
        end_row: usize,
        start_col: usize,
        end_col: usize,
    ) -> Result<Matrix> {
        self.check_row(end_row)?;
        self.check_column(end_col)?;
        if start_row > end_row || start_col > end_col {
            return Err(MatrixError::InvalidArgument(format!(
                "submatrix bounds must be non-decreasing: rows {}..={}, columns {}..={}",
                start_row, end_row, start_col, end_col
            )));
        }

        let mut data = Vec::with_capacity((end_row - start_row + 1) * (end_col - start_col + 1));
        for r in start_row..=end_row {
            data.extend_from_slice(&self.row_slice(r)[start_col..=end_col]);
        }
        Matrix::from_shape_vec(
            (end_row - start_row + 1, end_col - start_col + 1),
            data,
        )
    }

    /// Same elements in row-major order, laid out as `shape`.
    pub fn reshape(&self, shape: (usize, usize)) -> Result<Matrix> {
        if shape.0.checked_mul(shape.1) != Some(self.size()) {
            return Err(MatrixError::InvalidArgument(format!(
                "cannot reshape [{}, {}] into [{}, {}]",
                self.nrows(),
                self.ncols(),
                shape.0,
                shape.1
            )));
        }
        Matrix::from_shape_vec(shape, self.to_vec())
    }

    /// Row-major copy as a single row.
    pub fn flatten(&self) -> Matrix {
        let mut out = Matrix::empty();
        out.replace(1, self.size(), self.to_vec());
        out
    }

    /// Same as [`Matrix::flatten`].
    pub fn ravel(&self) -> Matrix {
        self.flatten()
    }

    /// Main diagonal.
    pub fn diag(&self) -> Vec<f64> {
        (0..self.nrows().min(self.ncols()))
            .map(|i| self[(i, i)])
            .collect()
    }

    /// Remove a row in place.
    pub fn delete_row(&mut self, row: usize) -> Result<&mut Self> {
        self.check_row(row)?;
        let (rows, cols) = self.shape();
        let mut data = self.to_vec();
        data.drain(row * cols..(row + 1) * cols);
        self.replace(rows - 1, cols, data);
        Ok(self)
    }

    /// Remove a column in place.
    pub fn delete_column(&mut self, col: usize) -> Result<&mut Self> {
        self.check_column(col)?;
        let (rows, cols) = self.shape();
        let data = self
            .as_slice()
            .iter()
            .enumerate()
            .filter(|&(idx, _)| idx % cols != col)
            .map(|(_, &v)| v)
            .collect();
        self.replace(rows, cols - 1, data);
        Ok(self)
    }

    /// Append a row at the bottom, in place.
    pub fn add_row(&mut self, row: &[f64]) -> Result<&mut Self> {
        if row.len() != self.ncols() {
            return Err(MatrixError::DimensionMismatch {
                op: "add_row",
                left: self.shape(),
                right: (1, row.len()),
            });
        }
        let (rows, cols) = self.shape();
        let mut data = self.to_vec();
        data.extend_from_slice(row);
        self.replace(rows + 1, cols, data);
        Ok(self)
    }

    /// Append a column at the right, in place.
    pub fn add_column(&mut self, column: &[f64]) -> Result<&mut Self> {
        if column.len() != self.nrows() {
            return Err(MatrixError::DimensionMismatch {
                op: "add_column",
                left: self.shape(),
                right: (column.len(), 1),
            });
        }
        let (rows, cols) = self.shape();
        let mut data = Vec::with_capacity(rows * (cols + 1));
        for (r, &extra) in column.iter().enumerate() {
            data.extend_from_slice(self.row_slice(r));
            data.push(extra);
        }
        self.replace(rows, cols + 1, data);
        Ok(self)
    }
}
