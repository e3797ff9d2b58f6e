//! Loading matrices from text files.
pub mod text;

pub use text::{load_txt, load_txt_with_config, read_matrix};
