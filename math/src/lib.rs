pub mod error;
pub mod gauss_jordan;
pub mod matrix;
pub mod prelude;
pub mod vandermonde;

pub use gauss_jordan::DEFAULT_PIVOT_EPSILON;
pub use matrix::Matrix;
