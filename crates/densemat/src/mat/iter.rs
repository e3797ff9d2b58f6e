//! Lazy iteration over elements, rows and columns.

use std::iter::{Copied, FusedIterator};
use std::slice::Iter;

use crate::mat::Matrix;

/// Elements in row-major order.
pub struct Elements<'a> {
    inner: Copied<Iter<'a, f64>>,
}

impl Iterator for Elements<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Elements<'_> {}
impl FusedIterator for Elements<'_> {}

/// Rows as slices, top to bottom.
pub struct Rows<'a> {
    matrix: &'a Matrix,
    next: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [f64];

    fn next(&mut self) -> Option<&'a [f64]> {
        if self.next >= self.matrix.nrows() {
            return None;
        }
        let row = self.matrix.row_slice(self.next);
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.matrix.nrows() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Rows<'_> {}
impl FusedIterator for Rows<'_> {}

/// Columns as owned vectors, left to right.
pub struct Columns<'a> {
    matrix: &'a Matrix,
    next: usize,
}

impl Iterator for Columns<'_> {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Vec<f64>> {
        if self.next >= self.matrix.ncols() {
            return None;
        }
        let col = self.next;
        self.next += 1;
        Some((0..self.matrix.nrows()).map(|r| self.matrix[(r, col)]).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.matrix.ncols() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Columns<'_> {}
impl FusedIterator for Columns<'_> {}

impl Matrix {
    pub fn iter(&self) -> Elements<'_> {
        Elements {
            inner: self.as_slice().iter().copied(),
        }
    }

    pub fn iter_rows(&self) -> Rows<'_> {
        Rows {
            matrix: self,
            next: 0,
        }
    }

    /// Rows wrapped as 1 x cols matrices.
    pub fn iter_rows_as_matrix(&self) -> impl ExactSizeIterator<Item = Matrix> + '_ {
        let cols = self.ncols();
        self.iter_rows().map(move |row| {
            let mut m = Matrix::empty();
            m.replace(1, cols, row.to_vec());
            m
        })
    }

    pub fn iter_columns(&self) -> Columns<'_> {
        Columns {
            matrix: self,
            next: 0,
        }
    }

    /// Columns wrapped as rows x 1 matrices.
    pub fn iter_columns_as_matrix(&self) -> impl ExactSizeIterator<Item = Matrix> + '_ {
        let rows = self.nrows();
        self.iter_columns().map(move |col| {
            let mut m = Matrix::empty();
            m.replace(rows, 1, col);
            m
        })
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = f64;
    type IntoIter = Elements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
