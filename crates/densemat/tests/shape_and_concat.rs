//! Integration tests for transpose, reshape, submatrices and concatenation.

use densemat::{mat, Matrix, MatrixError};

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::new(rows.iter().map(|r| r.to_vec()).collect()).expect("failed to create matrix")
}

fn grid() -> Matrix {
    m(&[&[5.0, 9.0, 2.0], &[1.0, 8.0, 5.0], &[3.0, 6.0, 4.0]])
}

// ---------------------------------------------------------------------------
// Transpose / reshape / flatten
// ---------------------------------------------------------------------------

#[test]
fn transpose_swaps_dimensions() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let t = a.transpose();
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t.to_rows(), vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
    assert!(t.t().equals(&a));
}

#[test]
fn reshape_keeps_row_major_order() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let r = a.reshape((3, 2)).unwrap();
    assert_eq!(r.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
    assert!(r.reshape((2, 3)).unwrap().equals(&a));
}

#[test]
fn reshape_rejects_wrong_element_count() {
    assert!(matches!(
        grid().reshape((2, 4)),
        Err(MatrixError::InvalidArgument(_))
    ));
}

#[test]
fn flatten_and_ravel() {
    let flat = grid().flatten();
    assert_eq!(flat.shape(), (1, 9));
    assert_eq!(flat.to_vec(), vec![5.0, 9.0, 2.0, 1.0, 8.0, 5.0, 3.0, 6.0, 4.0]);
    assert!(grid().ravel().equals(&flat));
}

// ---------------------------------------------------------------------------
// Row / column insertion and deletion
// ---------------------------------------------------------------------------

#[test]
fn add_row_and_column() {
    let mut a = grid();
    a.add_row(&[0.0, 0.0, 0.0]).unwrap().add_column(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(a.shape(), (4, 4));
    assert_eq!(a.get_row(3).unwrap(), &[0.0, 0.0, 0.0, 4.0]);
    assert_eq!(a.get_column(3).unwrap(), vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn add_row_length_mismatch_leaves_matrix_untouched() {
    let mut a = grid();
    assert!(matches!(
        a.add_row(&[1.0, 2.0]),
        Err(MatrixError::DimensionMismatch { op: "add_row", .. })
    ));
    assert!(matches!(
        a.add_column(&[1.0]),
        Err(MatrixError::DimensionMismatch { op: "add_column", .. })
    ));
    assert!(a.equals(&grid()));
}

#[test]
fn delete_row_and_column() {
    let mut a = grid();
    a.delete_row(1).unwrap().delete_column(0).unwrap();
    assert_eq!(a.to_rows(), vec![vec![9.0, 2.0], vec![6.0, 4.0]]);
    assert!(matches!(a.delete_row(2), Err(MatrixError::IndexOutOfRange { .. })));
    assert!(matches!(a.delete_column(2), Err(MatrixError::IndexOutOfRange { .. })));
}

// ---------------------------------------------------------------------------
// Concatenation
// ---------------------------------------------------------------------------

#[test]
fn horizontal_concatenation() {
    let right = m(&[&[7.0, 5.0, -3.0, 12.0], &[8.0, -1.0, 0.0, 4.0], &[-9.0, -3.0, 0.0, -1.0]]);
    let expected = m(&[
        &[5.0, 9.0, 2.0, 7.0, 5.0, -3.0, 12.0],
        &[1.0, 8.0, 5.0, 8.0, -1.0, 0.0, 4.0],
        &[3.0, 6.0, 4.0, -9.0, -3.0, 0.0, -1.0],
    ]);
    let joined = mat::horzcat(&grid(), &right).unwrap();
    assert_eq!(joined.shape(), (3, 7));
    assert!(joined.equals(&expected));
    assert!(joined.submat(0, 2, 0, 2).unwrap().equals(&grid()));
}

#[test]
fn vertical_concatenation() {
    let below = m(&[&[7.0, 5.0, -3.0], &[8.0, -1.0, 0.0], &[-9.0, -3.0, 0.0], &[21.0, -6.0, 3.0]]);
    let joined = mat::vertcat(&grid(), &below).unwrap();
    assert_eq!(joined.shape(), (7, 3));
    assert_eq!(joined.get_row(6).unwrap(), &[21.0, -6.0, 3.0]);
    assert!(joined.submat(0, 2, 0, 2).unwrap().equals(&grid()));
}

#[test]
fn concatenation_shape_checks() {
    let tall = mat::ones(4, 1);
    assert!(matches!(
        mat::horzcat(&grid(), &tall),
        Err(MatrixError::DimensionMismatch { op: "horzcat", .. })
    ));
    assert!(matches!(
        mat::vertcat(&grid(), &tall),
        Err(MatrixError::DimensionMismatch { op: "vertcat", .. })
    ));
}

#[test]
fn concatenation_leaves_inputs_unmodified() {
    let a = grid();
    let b = mat::zeros(3, 1);
    let _ = mat::horzcat(&a, &b).unwrap();
    assert!(a.equals(&grid()));
    assert_eq!(b.shape(), (3, 1));
}

// ---------------------------------------------------------------------------
// Factories
// ---------------------------------------------------------------------------

#[test]
fn diag_builds_diagonal_matrix() {
    let vector = m(&[&[5.0, 8.0, 4.0]]);
    let expected = m(&[&[5.0, 0.0, 0.0], &[0.0, 8.0, 0.0], &[0.0, 0.0, 4.0]]);
    let d = mat::diag(&vector).unwrap();
    assert!(d.diff(&expected).unwrap().norm() < 1e-6);
    assert_eq!(d.diag(), vec![5.0, 8.0, 4.0]);
}

#[test]
fn zeros_ones_eye() {
    assert!(mat::zeros(2, 3).iter().all(|x| x == 0.0));
    assert!(mat::ones(3, 2).iter().all(|x| x == 1.0));
    let i = mat::eye(3);
    assert_eq!(i.diag(), vec![1.0, 1.0, 1.0]);
    assert_eq!(i.sum().as_scalar().unwrap(), 3.0);
}

#[test]
fn rand_values_in_unit_interval() {
    let r = mat::rand(4, 5);
    assert_eq!(r.shape(), (4, 5));
    assert!(r.iter().all(|x| (0.0..1.0).contains(&x)));
}

#[test]
fn linspace_and_arange_reject_bad_ranges() {
    assert!(mat::linspace(5.0, 0.0, 10).is_err());
    assert!(mat::linspace(0.0, 5.0, 0).is_err());
    assert!(mat::arange(0.0, 5.0, -1.0).is_err());
    assert_eq!(mat::arange(0.0, 5.0, 1.0).unwrap().to_vec(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn row_kmatmul_scales_row() {
    assert_eq!(mat::row_kmatmul(&[1.0, -2.0, 3.0], 2.0), vec![2.0, -4.0, 6.0]);
}
