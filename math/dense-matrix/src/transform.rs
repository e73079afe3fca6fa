use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkewAxis {
  /// shift grows with the row index
  #[default]
  X,
  /// shift grows with the column index
  Y,
}

impl FromStr for SkewAxis {
  type Err = MatrixError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim() {
      "x" | "X" => Ok(SkewAxis::X),
      "y" | "Y" => Ok(SkewAxis::Y),
      other => Err(MatrixError::UnknownSkewAxis(other.to_string())),
    }
  }
}

pub fn transpose<T: Scalar>(m: &DenseMatrix<T>) -> DenseMatrix<T> {
  DenseMatrix::from_fn_unchecked(m.cols(), m.rows(), |i, j| m[(j, i)])
}

/// Value shear: every cell is offset by `tan(angle)` times its row index
/// ([`SkewAxis::X`]) or column index ([`SkewAxis::Y`]).
///
/// Cells are not moved, only their values change. This is not the positional
/// shear of image transforms.
pub fn skew<T: Scalar>(m: &DenseMatrix<T>, angle: Deg<T>, axis: SkewAxis) -> DenseMatrix<T> {
  let tan = angle.to_rad().tan();
  m.map_indexed(|i, j, v| match axis {
    SkewAxis::X => v + tan * T::from_index(i),
    SkewAxis::Y => v + tan * T::from_index(j),
  })
}

/// Rotate the grid about its geometric center, keeping the shape.
///
/// Every destination cell is mapped back to a source position and sampled by
/// nearest neighbor. Source positions are rounded half away from zero; a
/// position that falls outside the matrix yields zero.
pub fn rotate<T: Scalar>(m: &DenseMatrix<T>, angle: Deg<T>) -> DenseMatrix<T> {
  let (sin, cos) = angle.to_rad().sin_cos();
  let cy = T::from_index(m.rows() - 1) / T::two();
  let cx = T::from_index(m.cols() - 1) / T::two();

  DenseMatrix::from_fn_unchecked(m.rows(), m.cols(), |i, j| {
    let x = T::from_index(j) - cx;
    let y = T::from_index(i) - cy;
    let src_x = x * cos - y * sin;
    let src_y = x * sin + y * cos;
    sample_nearest(m, src_y + cy, src_x + cx).unwrap_or_else(T::zero)
  })
}

fn sample_nearest<T: Scalar>(m: &DenseMatrix<T>, row: T, col: T) -> Option<T> {
  // to_usize rejects NaN and anything below zero after rounding
  let row = row.round().to_usize()?;
  let col = col.round().to_usize()?;
  m.get(row, col)
}

impl<T: Scalar> DenseMatrix<T> {
  #[must_use]
  pub fn transpose(&self) -> Self {
    transpose(self)
  }

  #[must_use]
  pub fn skew(&self, angle: Deg<T>, axis: SkewAxis) -> Self {
    skew(self, angle, axis)
  }

  #[must_use]
  pub fn rotate(&self, angle: Deg<T>) -> Self {
    rotate(self, angle)
  }
}
