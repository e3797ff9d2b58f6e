//! Integration tests for reductions, element-wise utilities and iterators.

use densemat::{mat, Axis, Matrix, MatrixError};

fn grid() -> Matrix {
    Matrix::new(vec![
        vec![5.0, 9.0, 2.0],
        vec![1.0, 8.0, 5.0],
        vec![3.0, 6.0, 4.0],
    ])
    .expect("failed to create matrix")
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ---------------------------------------------------------------------------
// Reductions
// ---------------------------------------------------------------------------

#[test]
fn sum_is_one_by_one() {
    let s = grid().sum();
    assert_eq!(s.shape(), (1, 1));
    assert_eq!(s.as_scalar().unwrap(), 43.0);
    assert!(mat::sum(&grid()).equals(&s));
}

#[test]
fn mean_along_columns() {
    let means = grid().mean(Axis::Columns);
    assert_eq!(means.shape(), (1, 3));
    let v = means.to_vec();
    assert!(close(v[0], 3.0) && close(v[1], 23.0 / 3.0) && close(v[2], 11.0 / 3.0));
    assert!(mat::mean(&grid(), Axis::try_from(0).unwrap()).equals(&means));
}

#[test]
fn mean_along_rows() {
    let means = grid().mean(Axis::Rows);
    assert_eq!(means.shape(), (3, 1));
    let v = means.to_vec();
    assert!(close(v[0], 16.0 / 3.0) && close(v[1], 14.0 / 3.0) && close(v[2], 13.0 / 3.0));
    assert!(grid().row_mean().equals(&means));
}

#[test]
fn mean_of_all_elements() {
    let mean = grid().mean_all();
    assert_eq!(mean.shape(), (1, 1));
    assert!(close(mean.as_scalar().unwrap(), 43.0 / 9.0));
    assert!(mat::mean_all(&grid()).equals(&mean));
}

#[test]
fn max_and_abs() {
    assert_eq!(grid().max(), 9.0);
    let negative = grid().neg();
    assert_eq!(negative.max(), -1.0);
    assert_eq!(negative.abs().max(), 9.0);
}

#[test]
fn as_scalar_needs_single_element() {
    assert!(matches!(grid().as_scalar(), Err(MatrixError::InvalidArgument(_))));
}

// ---------------------------------------------------------------------------
// Element-wise transforms
// ---------------------------------------------------------------------------

#[test]
fn map_returns_new_matrix() {
    let a = grid();
    let doubled = a.map(|x| x * 2.0);
    assert_eq!(doubled.get(0, 1).unwrap(), 18.0);
    assert_eq!(a.get(0, 1).unwrap(), 9.0);
}

#[test]
fn apply_and_pow_mutate_in_place() {
    let mut a = grid();
    a.apply(|x| x - 1.0).pow(2.0);
    assert_eq!(a.get_row(0).unwrap(), &[16.0, 64.0, 1.0]);
}

#[test]
fn nanto_replaces_nan_with_zero() {
    let mut a = Matrix::new(vec![vec![1.0, f64::NAN], vec![f64::NAN, 4.0]]).unwrap();
    a.nanto();
    assert_eq!(a.to_vec(), vec![1.0, 0.0, 0.0, 4.0]);
}

#[test]
fn log_is_natural_log() {
    let e = Matrix::new(vec![vec![1.0, std::f64::consts::E]]).unwrap();
    let l = mat::log(&e);
    assert!(close(l[(0, 0)], 0.0) && close(l[(0, 1)], 1.0));
}

#[test]
fn equals_is_exact() {
    let a = grid();
    let mut b = grid();
    assert!(a.equals(&b));
    b.set(2, 2, 4.0 + 1e-12).unwrap();
    assert!(!a.equals(&b));
    assert!(!a.equals(&a.reshape((1, 9)).unwrap()));

    let nan = Matrix::new(vec![vec![f64::NAN]]).unwrap();
    assert!(nan.equals(&nan.clone()));
}

#[test]
fn shuffle_keeps_rows_intact() {
    let mut a = grid();
    a.shuffle();
    let mut rows = a.to_rows();
    rows.sort_by(|x, y| x[0].partial_cmp(&y[0]).unwrap());
    assert_eq!(rows, vec![
        vec![1.0, 8.0, 5.0],
        vec![3.0, 6.0, 4.0],
        vec![5.0, 9.0, 2.0],
    ]);
}

// ---------------------------------------------------------------------------
// Iteration
// ---------------------------------------------------------------------------

#[test]
fn iter_visits_elements_in_row_major_order() {
    let a = grid();
    let mut it = a.iter();
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            assert_eq!(it.next(), Some(a.get(i, j).unwrap()));
        }
    }
    assert_eq!(it.next(), None);
    assert_eq!((&a).into_iter().sum::<f64>(), 43.0);
}

#[test]
fn iter_rows_yields_slices() {
    let a = grid();
    let mut rows = a.iter_rows();
    assert_eq!(rows.next(), Some(&[5.0, 9.0, 2.0][..]));
    assert_eq!(rows.next(), Some(&[1.0, 8.0, 5.0][..]));
    assert_eq!(rows.next(), Some(&[3.0, 6.0, 4.0][..]));
    assert_eq!(rows.next(), None);
}

#[test]
fn iter_rows_as_matrix_yields_row_vectors() {
    let a = grid();
    let rows: Vec<Matrix> = a.iter_rows_as_matrix().collect();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.shape() == (1, 3)));
    assert_eq!(rows[2].to_vec(), vec![3.0, 6.0, 4.0]);
}

#[test]
fn iter_columns() {
    let a = grid();
    let columns: Vec<Vec<f64>> = a.iter_columns().collect();
    assert_eq!(columns, vec![
        vec![5.0, 1.0, 3.0],
        vec![9.0, 8.0, 6.0],
        vec![2.0, 5.0, 4.0],
    ]);

    let as_matrix: Vec<Matrix> = a.iter_columns_as_matrix().collect();
    assert!(as_matrix.iter().all(|c| c.shape() == (3, 1)));
    assert_eq!(as_matrix[1].to_vec(), vec![9.0, 8.0, 6.0]);
}
