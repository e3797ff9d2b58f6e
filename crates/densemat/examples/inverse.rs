use densemat::Matrix;

fn main() {
    env_logger::init();

    let m = Matrix::new(vec![
        vec![5.0, -2.0, 2.0, 7.0],
        vec![1.0, 0.0, 0.0, 3.0],
        vec![-3.0, 1.0, 5.0, 0.0],
        vec![3.0, -1.0, -9.0, 4.0],
    ])
    .expect("failed to create matrix");

    println!("det = {}", m.det().expect("matrix is square"));
    println!("{}", m.inv().expect("matrix is invertible"));
}
