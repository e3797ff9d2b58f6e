use thiserror::Error;

/// Errors raised by matrix construction and algebra.
///
/// Every variant describes a precondition the caller violated; none of them
/// are transient, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// Malformed input: jagged rows, non-numeric fields, impossible shapes.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid {axis} index {index} for {axis} count {len}")]
    IndexOutOfRange {
        axis: &'static str,
        index: usize,
        len: usize,
    },

    /// Operand shapes are incompatible for `op`.
    #[error("dimension mismatch in {op}: [{}, {}] vs [{}, {}]", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("matrix is not square: [{rows}, {cols}]")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix is singular (det = {det})")]
    SingularMatrix { det: f64 },
}

pub type Result<T> = std::result::Result<T, MatrixError>;

impl MatrixError {
    pub(crate) fn row_index(index: usize, len: usize) -> Self {
        MatrixError::IndexOutOfRange {
            axis: "row",
            index,
            len,
        }
    }

    pub(crate) fn column_index(index: usize, len: usize) -> Self {
        MatrixError::IndexOutOfRange {
            axis: "column",
            index,
            len,
        }
    }
}
