//! Determinant by recursive Laplace expansion along the first row.
//!
//! The cost grows with n!, which is accepted here: the engine targets the
//! small matrices a calculator deals with and keeps the exact summation order
//! of the naive expansion so results are reproducible.

use crate::*;

/// Past this size a single determinant call takes noticeable time.
pub const LARGE_DETERMINANT_DIMENSION: usize = 10;

pub fn determinant<T: Scalar>(m: &DenseMatrix<T>) -> Result<T, MatrixError> {
  ensure_square(m)?;
  if m.rows() > LARGE_DETERMINANT_DIMENSION {
    log::warn!(
      "expanding the determinant of a {} matrix, cost grows factorially with the dimension",
      m.shape()
    );
  }
  Ok(laplace_expansion(m))
}

/// `m` with `row` and `col` removed, remaining cells keep their relative order.
pub fn minor<T: Scalar>(
  m: &DenseMatrix<T>,
  row: usize,
  col: usize,
) -> Result<DenseMatrix<T>, MatrixError> {
  if row >= m.rows() || col >= m.cols() {
    return Err(MatrixError::IndexOutOfBounds {
      row,
      col,
      shape: m.shape(),
    });
  }
  if m.rows() == 1 || m.cols() == 1 {
    return Err(MatrixError::Empty);
  }
  Ok(minor_unchecked(m, row, col))
}

/// `(-1)^(row + col) * det(minor(m, row, col))`
pub fn cofactor<T: Scalar>(m: &DenseMatrix<T>, row: usize, col: usize) -> Result<T, MatrixError> {
  ensure_square(m)?;
  let minor = minor(m, row, col)?;
  Ok(signed(row + col, laplace_expansion(&minor)))
}

fn minor_unchecked<T: Scalar>(m: &DenseMatrix<T>, row: usize, col: usize) -> DenseMatrix<T> {
  let data = m
    .iter_rows()
    .enumerate()
    .filter(|(i, _)| *i != row)
    .flat_map(|(_, cells)| {
      cells
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != col)
        .map(|(_, v)| *v)
    })
    .collect();
  DenseMatrix::new_unchecked(m.rows() - 1, m.cols() - 1, data)
}

#[inline(always)]
fn signed<T: Scalar>(exponent: usize, value: T) -> T {
  if exponent % 2 == 0 {
    value
  } else {
    -value
  }
}

/// `m` must be square
fn laplace_expansion<T: Scalar>(m: &DenseMatrix<T>) -> T {
  match m.rows() {
    1 => m[(0, 0)],
    2 => m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
    n => (0..n).fold(T::zero(), |det, j| {
      let cofactor = signed(j, laplace_expansion(&minor_unchecked(m, 0, j)));
      det + m[(0, j)] * cofactor
    }),
  }
}

impl<T: Scalar> DenseMatrix<T> {
  pub fn determinant(&self) -> Result<T, MatrixError> {
    determinant(self)
  }

  pub fn minor(&self, row: usize, col: usize) -> Result<Self, MatrixError> {
    minor(self, row, col)
  }

  pub fn cofactor(&self, row: usize, col: usize) -> Result<T, MatrixError> {
    cofactor(self, row, col)
  }
}

#[test]
fn det_matches_cgmath() {
  use cgmath::SquareMatrix;

  #[rustfmt::skip]
  let cgmath_mat = cgmath::Matrix3::<f64>::new(
    2., -3., 1.,
    2., 0., -1.,
    1., 4., 5.,
  );
  // cgmath takes columns, the determinant is invariant under transpose
  let math_mat = Matrix::from_rows(vec![
    vec![2., -3., 1.],
    vec![2., 0., -1.],
    vec![1., 4., 5.],
  ])
  .unwrap();
  assert_eq!(cgmath_mat.determinant(), 49.);
  assert_eq!(math_mat.determinant().unwrap(), 49.);

  #[rustfmt::skip]
  let cgmath_mat = cgmath::Matrix4::<f64>::new(
    1., 0., 2., -1.,
    3., 0., 0., 5.,
    2., 1., 4., -3.,
    1., 0., 5., 0.,
  );
  let math_mat = Matrix::from_rows(vec![
    vec![1., 0., 2., -1.],
    vec![3., 0., 0., 5.],
    vec![2., 1., 4., -3.],
    vec![1., 0., 5., 0.],
  ])
  .unwrap();
  assert_eq!(math_mat.determinant().unwrap(), cgmath_mat.determinant());
  assert_eq!(math_mat.determinant().unwrap(), 30.);
}
