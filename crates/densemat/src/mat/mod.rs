//! Dense row-major matrices.
//!
//! [`Matrix`] carries the algebra as methods; the free functions re-exported
//! from [`factory`] build matrices (`zeros`, `eye`, `linspace`, ...) or combine
//! them (`horzcat`, `vertcat`, `inner_prod`, ...). [`linalg::norm`] is the
//! Frobenius norm.
mod arithmetic;
pub mod factory;
mod iter;
pub mod linalg;
mod matrix;
mod reduce;
mod shape;

pub use arithmetic::Operand;
pub use factory::*;
pub use iter::{Columns, Elements, Rows};
pub use linalg::MIN_DET;
pub use matrix::Matrix;
pub use reduce::Axis;
