use densemat::mat;

fn main() {
    env_logger::init();

    // uniform in [0, 1)
    let m = mat::rand(5, 8);
    println!("{}\n", m);

    // uniform in [0, 20)
    println!("{}", mat::rand(5, 8).kmatmul(20.0));
}
