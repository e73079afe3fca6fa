use std::{fmt, ops::Index};

use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
  pub rows: usize,
  pub cols: usize,
}

impl Shape {
  pub fn new(rows: usize, cols: usize) -> Self {
    Self { rows, cols }
  }

  pub fn is_square(&self) -> bool {
    self.rows == self.cols
  }

  pub fn cell_count(&self) -> usize {
    self.rows * self.cols
  }

  #[must_use]
  pub fn transposed(&self) -> Self {
    Self::new(self.cols, self.rows)
  }
}

impl fmt::Display for Shape {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}x{}", self.rows, self.cols)
  }
}

/// A rectangular matrix with at least one row and one column.
///
/// Cells are stored row-major in one buffer. There is no way to mutate a
/// matrix after construction, every operation returns a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<T>>", into = "Vec<Vec<T>>")]
#[serde(bound(
  serialize = "T: Scalar + Serialize",
  deserialize = "T: Scalar + Deserialize<'de>"
))]
pub struct DenseMatrix<T> {
  rows: usize,
  cols: usize,
  data: Vec<T>,
}

impl<T: Scalar> DenseMatrix<T> {
  pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
    let expected = rows.first().map(Vec::len).unwrap_or(0);
    if expected == 0 {
      return Err(MatrixError::Empty);
    }
    if let Some((row, found)) = rows
      .iter()
      .map(Vec::len)
      .enumerate()
      .find(|(_, len)| *len != expected)
    {
      return Err(MatrixError::Ragged {
        row,
        expected,
        found,
      });
    }

    let row_count = rows.len();
    let data = rows.into_iter().flatten().collect();
    Ok(Self::new_unchecked(row_count, expected, data))
  }

  pub fn from_row_major(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
    if rows == 0 || cols == 0 {
      return Err(MatrixError::Empty);
    }
    if data.len() != Shape::new(rows, cols).cell_count() {
      return Err(MatrixError::CellCount {
        rows,
        cols,
        found: data.len(),
      });
    }
    Ok(Self::new_unchecked(rows, cols, data))
  }

  pub fn from_fn(
    rows: usize,
    cols: usize,
    f: impl FnMut(usize, usize) -> T,
  ) -> Result<Self, MatrixError> {
    if rows == 0 || cols == 0 {
      return Err(MatrixError::Empty);
    }
    Ok(Self::from_fn_unchecked(rows, cols, f))
  }

  pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
    Self::from_fn(rows, cols, |_, _| T::zero())
  }

  pub fn identity(n: usize) -> Result<Self, MatrixError> {
    Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
  }

  /// caller guarantees `rows * cols == data.len()` and both dimensions are non zero
  pub(crate) fn new_unchecked(rows: usize, cols: usize, data: Vec<T>) -> Self {
    debug_assert!(rows > 0 && cols > 0 && data.len() == rows * cols);
    Self { rows, cols, data }
  }

  pub(crate) fn from_fn_unchecked(
    rows: usize,
    cols: usize,
    mut f: impl FnMut(usize, usize) -> T,
  ) -> Self {
    let mut data = Vec::with_capacity(Shape::new(rows, cols).cell_count());
    for i in 0..rows {
      for j in 0..cols {
        data.push(f(i, j));
      }
    }
    Self::new_unchecked(rows, cols, data)
  }

  /// Build a same shaped matrix by mapping every cell with its position.
  #[must_use]
  pub fn map_indexed(&self, mut f: impl FnMut(usize, usize, T) -> T) -> Self {
    Self::from_fn_unchecked(self.rows, self.cols, |i, j| f(i, j, self[(i, j)]))
  }

  #[must_use]
  pub fn map(&self, f: impl Fn(T) -> T) -> Self {
    Self::new_unchecked(self.rows, self.cols, self.data.iter().copied().map(f).collect())
  }

  pub fn rows(&self) -> usize {
    self.rows
  }

  pub fn cols(&self) -> usize {
    self.cols
  }

  pub fn shape(&self) -> Shape {
    Shape::new(self.rows, self.cols)
  }

  pub fn is_square(&self) -> bool {
    self.rows == self.cols
  }

  pub fn get(&self, row: usize, col: usize) -> Option<T> {
    (row < self.rows && col < self.cols).then(|| self.data[row * self.cols + col])
  }

  pub fn row(&self, row: usize) -> Option<&[T]> {
    (row < self.rows).then(|| &self.data[row * self.cols..(row + 1) * self.cols])
  }

  pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
    self.data.chunks_exact(self.cols)
  }

  /// row-major cells
  pub fn as_slice(&self) -> &[T] {
    &self.data
  }

  pub fn to_rows(&self) -> Vec<Vec<T>> {
    self.iter_rows().map(<[T]>::to_vec).collect()
  }

  /// Same shape and every pair of cells within `epsilon` of each other.
  ///
  /// Results that went through trigonometry rarely compare equal bit by bit,
  /// this is the comparison to use for them.
  pub fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
    self.shape() == other.shape()
      && self
        .data
        .iter()
        .zip(&other.data)
        .all(|(a, b)| (*a - *b).abs() <= epsilon)
  }

  /// Render with a fixed number of decimals, see the [`fmt::Display`] impl.
  pub fn display_with_precision(&self, precision: usize) -> impl fmt::Display + '_ {
    FixedPrecision {
      matrix: self,
      precision,
    }
  }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
  type Output = T;

  /// Panics if the position lies outside the matrix, use [`DenseMatrix::get`]
  /// for a checked lookup.
  fn index(&self, (row, col): (usize, usize)) -> &T {
    assert!(
      row < self.rows && col < self.cols,
      "cell ({row}, {col}) is outside of a {}x{} matrix",
      self.rows,
      self.cols
    );
    &self.data[row * self.cols + col]
  }
}

impl<T: Scalar> TryFrom<Vec<Vec<T>>> for DenseMatrix<T> {
  type Error = MatrixError;

  fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
    Self::from_rows(rows)
  }
}

impl<T: Scalar> From<DenseMatrix<T>> for Vec<Vec<T>> {
  fn from(m: DenseMatrix<T>) -> Self {
    m.to_rows()
  }
}

const DEFAULT_DISPLAY_PRECISION: usize = 2;

struct FixedPrecision<'a, T> {
  matrix: &'a DenseMatrix<T>,
  precision: usize,
}

impl<T: Scalar> fmt::Display for FixedPrecision<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let cells: Vec<String> = self
      .matrix
      .data
      .iter()
      .map(|v| format!("{:.*}", self.precision, v))
      .collect();
    let width = cells.iter().map(String::len).max().unwrap_or(0);

    for (i, row) in cells.chunks_exact(self.matrix.cols).enumerate() {
      if i > 0 {
        writeln!(f)?;
      }
      write!(f, "[")?;
      for (j, cell) in row.iter().enumerate() {
        if j > 0 {
          write!(f, " ")?;
        }
        write!(f, "{cell:>width$}")?;
      }
      write!(f, "]")?;
    }
    Ok(())
  }
}

/// One bracketed line per row, cells right aligned. The formatter precision
/// selects the number of decimals and defaults to two.
impl<T: Scalar> fmt::Display for DenseMatrix<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let precision = f.precision().unwrap_or(DEFAULT_DISPLAY_PRECISION);
    fmt::Display::fmt(&self.display_with_precision(precision), f)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn construction_validates_shape() {
    assert_eq!(Matrix::from_rows(vec![]), Err(MatrixError::Empty));
    assert_eq!(Matrix::from_rows(vec![vec![]]), Err(MatrixError::Empty));
    assert_eq!(
      Matrix::from_rows(vec![vec![1., 2.], vec![3.]]),
      Err(MatrixError::Ragged {
        row: 1,
        expected: 2,
        found: 1
      })
    );
    assert_eq!(
      Matrix::from_row_major(2, 2, vec![1., 2., 3.]),
      Err(MatrixError::CellCount {
        rows: 2,
        cols: 2,
        found: 3
      })
    );
    assert_eq!(Matrix::zeros(0, 3), Err(MatrixError::Empty));

    let m = Matrix::from_rows(vec![vec![1., 2., 3.], vec![4., 5., 6.]]).unwrap();
    assert_eq!(m.shape(), Shape::new(2, 3));
    assert_eq!(m.as_slice(), &[1., 2., 3., 4., 5., 6.]);
    assert_eq!(m, Matrix::from_row_major(2, 3, vec![1., 2., 3., 4., 5., 6.]).unwrap());
  }

  #[test]
  fn accessors() {
    let m = Matrix::from_rows(vec![vec![1., 2.], vec![3., 4.], vec![5., 6.]]).unwrap();
    assert_eq!(m[(2, 1)], 6.);
    assert_eq!(m.get(1, 0), Some(3.));
    assert_eq!(m.get(3, 0), None);
    assert_eq!(m.get(0, 2), None);
    assert_eq!(m.row(1), Some(&[3., 4.][..]));
    assert_eq!(m.row(3), None);
    assert_eq!(m.iter_rows().count(), 3);
    assert!(!m.is_square());
    assert_eq!(m.to_rows(), vec![vec![1., 2.], vec![3., 4.], vec![5., 6.]]);
  }

  #[test]
  fn map_cells() {
    let m = Matrix::from_rows(vec![vec![1., -2.], vec![3., 4.], vec![0.5, 6.]]).unwrap();
    let doubled = m.map(|v| v * 2.);
    assert_eq!(doubled.shape(), m.shape());
    assert_eq!(
      doubled.to_rows(),
      vec![vec![2., -4.], vec![6., 8.], vec![1., 12.]]
    );
    // the source is untouched
    assert_eq!(m[(0, 1)], -2.);

    let indexed = m.map_indexed(|i, j, v| v + (i * 10 + j) as f64);
    assert_eq!(indexed.row(2), Some(&[20.5, 27.][..]));
  }

  #[test]
  fn shape_helpers() {
    let shape = Shape::new(2, 3);
    assert_eq!(shape.cell_count(), 6);
    assert_eq!(shape.transposed(), Shape::new(3, 2));
    assert!(!shape.is_square());
    assert_eq!(shape.to_string(), "2x3");
  }

  #[test]
  fn identity() {
    let i = Matrix::identity(3).unwrap();
    assert_eq!(
      i.to_rows(),
      vec![vec![1., 0., 0.], vec![0., 1., 0.], vec![0., 0., 1.]]
    );
    assert_eq!(Matrix::identity(0), Err(MatrixError::Empty));
  }

  #[test]
  fn non_finite_cells_are_kept() {
    let m = Matrix::from_rows(vec![vec![f64::NAN, f64::INFINITY]]).unwrap();
    assert!(m[(0, 0)].is_nan());
    assert_eq!(m[(0, 1)], f64::INFINITY);
  }

  #[test]
  fn display() {
    let m = Matrix::from_rows(vec![vec![1., -2.4], vec![10., 4.126]]).unwrap();
    assert_eq!(m.to_string(), "[ 1.00 -2.40]\n[10.00  4.13]");
    assert_eq!(format!("{m:.0}"), "[ 1 -2]\n[10  4]");
    assert_eq!(
      m.display_with_precision(1).to_string(),
      "[ 1.0 -2.4]\n[10.0  4.1]"
    );
  }

  #[test]
  fn serde_uses_nested_rows() {
    let m = Matrix::from_rows(vec![vec![1., 2.], vec![3., 4.]]).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, "[[1.0,2.0],[3.0,4.0]]");
    let back: Matrix = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);

    assert!(serde_json::from_str::<Matrix>("[[1.0],[2.0,3.0]]").is_err());
    assert!(serde_json::from_str::<Matrix>("[]").is_err());
  }

  #[test]
  fn approximate_equality() {
    let a = Matrix::from_rows(vec![vec![1., 2.]]).unwrap();
    let b = Matrix::from_rows(vec![vec![1. + 1e-12, 2.]]).unwrap();
    let c = Matrix::from_rows(vec![vec![1.], vec![2.]]).unwrap();
    assert!(a.abs_diff_eq(&b, 1e-9));
    assert!(!a.abs_diff_eq(&b, 1e-15));
    assert!(!a.abs_diff_eq(&c, 1.));
  }
}
