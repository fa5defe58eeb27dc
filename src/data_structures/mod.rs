pub mod square_matrix;

pub use square_matrix::SquareMatrix;
