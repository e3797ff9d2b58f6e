use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};

/// Dense row-major matrix of `f64`.
///
/// The buffer always holds exactly `rows * cols` values, so every row has the
/// same length. Operations return new matrices unless they are documented as
/// in-place, in which case they take `&mut self` and hand it back for chaining.
///
/// With serde a matrix is written as its table of rows. A matrix without
/// rows has no row to carry its column count, so `0 x n` comes back as `0 x 0`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<f64>>", try_from = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Build a matrix from a table of rows.
    ///
    /// Every row must have the length of the first one. An empty table gives
    /// a 0x0 matrix.
    pub fn new(table: Vec<Vec<f64>>) -> Result<Self> {
        let rows = table.len();
        let cols = table.first().map_or(0, Vec::len);
        if let Some(bad) = table.iter().position(|row| row.len() != cols) {
            return Err(MatrixError::InvalidArgument(format!(
                "all rows must have the same length: row {} has {} elements, expected {}",
                bad,
                table[bad].len(),
                cols
            )));
        }
        let data = table.into_iter().flatten().collect();
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from a flat row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatrixError::InvalidArgument(format!(
                "invalid shape ({}, {}) for buffer of length {}",
                rows,
                cols,
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Parse a table of text fields (e.g. from [`crate::io::load_txt`]) into a matrix.
    pub fn parse_table<S: AsRef<str>>(table: &[Vec<S>]) -> Result<Self> {
        let mut parsed = Vec::with_capacity(table.len());
        for (r, row) in table.iter().enumerate() {
            let mut values = Vec::with_capacity(row.len());
            for (c, field) in row.iter().enumerate() {
                let field = field.as_ref().trim();
                let value = field.parse::<f64>().map_err(|_| {
                    MatrixError::InvalidArgument(format!(
                        "element ({}, {}) is not a number: {:?}",
                        r, c, field
                    ))
                })?;
                values.push(value);
            }
            parsed.push(values);
        }
        Self::new(parsed)
    }

    /// A 0x0 matrix.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// 1 for row/column vectors (either dimension equal to 1), otherwise 2.
    pub fn ndims(&self) -> usize {
        if self.rows == 1 || self.cols == 1 {
            1
        } else {
            2
        }
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Copy of the row data as a table.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|r| self.row_slice(r).to_vec()).collect()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub(crate) fn check_row(&self, row: usize) -> Result<()> {
        if row < self.rows {
            Ok(())
        } else {
            Err(MatrixError::row_index(row, self.rows))
        }
    }

    pub(crate) fn check_column(&self, col: usize) -> Result<()> {
        if col < self.cols {
            Ok(())
        } else {
            Err(MatrixError::column_index(col, self.cols))
        }
    }

    pub(crate) fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub(crate) fn row_slice_mut(&mut self, row: usize) -> &mut [f64] {
        let start = self.offset(row, 0);
        let cols = self.cols;
        &mut self.data[start..start + cols]
    }

    /// Replace the storage wholesale; callers guarantee `data.len() == rows * cols`.
    pub(crate) fn replace(&mut self, rows: usize, cols: usize, data: Vec<f64>) {
        debug_assert_eq!(data.len(), rows * cols);
        self.data = data;
        self.rows = rows;
        self.cols = cols;
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_row(row)?;
        self.check_column(col)?;
        Ok(self.data[self.offset(row, col)])
    }

    /// Set one element in place.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<&mut Self> {
        self.check_row(row)?;
        self.check_column(col)?;
        let offset = self.offset(row, col);
        self.data[offset] = value;
        Ok(self)
    }

    pub fn get_row(&self, row: usize) -> Result<&[f64]> {
        self.check_row(row)?;
        Ok(self.row_slice(row))
    }

    pub fn get_column(&self, col: usize) -> Result<Vec<f64>> {
        self.check_column(col)?;
        Ok((0..self.rows).map(|r| self[(r, col)]).collect())
    }

    /// Overwrite row `row` in place.
    pub fn set_row(&mut self, row: usize, values: &[f64]) -> Result<&mut Self> {
        self.check_row(row)?;
        if values.len() != self.cols {
            return Err(MatrixError::DimensionMismatch {
                op: "set_row",
                left: self.shape(),
                right: (1, values.len()),
            });
        }
        self.row_slice_mut(row).copy_from_slice(values);
        Ok(self)
    }

    /// Overwrite column `col` in place.
    pub fn set_column(&mut self, col: usize, values: &[f64]) -> Result<&mut Self> {
        self.check_column(col)?;
        if values.len() != self.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "set_column",
                left: self.shape(),
                right: (values.len(), 1),
            });
        }
        for (r, &v) in values.iter().enumerate() {
            self[(r, col)] = v;
        }
        Ok(self)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(index.1 < self.cols, "column index out of bounds");
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(index.1 < self.cols, "column index out of bounds");
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(table: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::new(table)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(value: Matrix) -> Self {
        value.to_rows()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for r in 0..self.rows {
            if r > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (c, value) in self.row_slice(r).iter().enumerate() {
                write!(f, "{}", value)?;
                if c + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
