//! Dense, immutable, row-major matrices of real values and the small set of
//! pure operations defined over them.
//!
//! Every operation validates the shape relationship it depends on, then builds
//! a fresh matrix (or scalar) without touching its inputs.
//!
//! ```
//! use dense_matrix::*;
//!
//! let a = Matrix::from_rows(vec![vec![1., 2.], vec![3., 4.]])?;
//! let b = Matrix::from_rows(vec![vec![5., 6.], vec![7., 8.]])?;
//!
//! assert_eq!(a.multiply(&b)?.to_rows(), vec![vec![19., 22.], vec![43., 50.]]);
//! assert_eq!(a.determinant()?, -2.);
//! # Ok::<(), MatrixError>(())
//! ```

mod angle;
mod determinant;
mod elementwise;
mod error;
mod matrix;
mod operation;
mod product;
mod scalar;
mod shape;
mod transform;

pub use angle::*;
pub use determinant::*;
pub use elementwise::*;
pub use error::*;
pub use matrix::*;
pub use operation::*;
pub use product::*;
pub use scalar::*;
pub use shape::*;
pub use transform::*;

/// The matrix type most callers want: cells are `f64`.
pub type Matrix = DenseMatrix<f64>;
