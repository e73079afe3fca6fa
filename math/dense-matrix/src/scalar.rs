use std::fmt::{Debug, Display};

use num_traits::{Float, FloatConst};

/// The cell type of a [`DenseMatrix`](crate::DenseMatrix).
///
/// Only real floating point types are supported, NaN and infinity are stored
/// and propagated like any other value.
pub trait Scalar:
  Float + FloatConst + Debug + Display + Default + Send + Sync + 'static
{
  /// Lossy conversion of a grid index into the scalar domain, used by the
  /// transforms that mix positions with cell values.
  fn from_index(index: usize) -> Self;

  fn two() -> Self {
    Self::one() + Self::one()
  }

  fn c180() -> Self;
}

impl Scalar for f32 {
  #[inline(always)]
  fn from_index(index: usize) -> Self {
    index as f32
  }
  #[inline(always)]
  fn c180() -> Self {
    180.
  }
}

impl Scalar for f64 {
  #[inline(always)]
  fn from_index(index: usize) -> Self {
    index as f64
  }
  #[inline(always)]
  fn c180() -> Self {
    180.
  }
}
