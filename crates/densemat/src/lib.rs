//! densemat: dense row-major matrices with classical linear algebra.
//!
//! The crate provides a single `f64` [`Matrix`] type with element access,
//! scalar and matrix arithmetic, determinants by cofactor expansion, adjoint
//! and inverse, Doolittle LU, reshaping, concatenation, reductions and row or
//! column iteration, plus a small delimited-text loader.
//!
//! Determinants are computed by Laplace expansion (O(n!)) and LU does not
//! pivot, so the algebra is aimed at small, well-conditioned matrices.
pub mod config;
pub mod error;
pub mod io;
pub mod mat;

pub use error::{MatrixError, Result};
pub use mat::{Axis, Matrix, Operand};
