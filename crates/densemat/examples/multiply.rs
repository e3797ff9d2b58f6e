use densemat::Matrix;

fn main() {
    env_logger::init();

    let m1 = Matrix::new(vec![
        vec![5.0, 9.0, 2.0],
        vec![1.0, 8.0, 5.0],
        vec![3.0, 6.0, 4.0],
    ])
    .expect("failed to create matrix");

    let m2 = Matrix::new(vec![
        vec![7.0, 5.0, -3.0, 12.0],
        vec![8.0, -1.0, 0.0, 4.0],
        vec![-9.0, -3.0, 0.0, -1.0],
    ])
    .expect("failed to create matrix");

    // 3x3 times 3x4
    let product = m1.multiply(&m2).expect("inner dimensions agree");
    println!("shape = {:?}\n{}", product.shape(), product);

    println!("{}", m1.multiply(0.5).expect("scalar product"));
}
