use densemat::Matrix;

fn main() {
    env_logger::init();

    let m = Matrix::new(vec![
        vec![5.0, 9.0, 2.0],
        vec![1.0, 8.0, 5.0],
        vec![3.0, 6.0, 4.0],
    ])
    .expect("failed to create matrix");

    println!("{}", m.cof().expect("matrix is square"));
}
