use crate::*;

fn zip_cells<T: Scalar>(
  operation: &'static str,
  a: &DenseMatrix<T>,
  b: &DenseMatrix<T>,
  f: impl Fn(T, T) -> T,
) -> Result<DenseMatrix<T>, MatrixError> {
  ensure_same_shape(operation, a, b)?;
  let data = a
    .as_slice()
    .iter()
    .zip(b.as_slice())
    .map(|(x, y)| f(*x, *y))
    .collect();
  Ok(DenseMatrix::new_unchecked(a.rows(), a.cols(), data))
}

pub fn add<T: Scalar>(a: &DenseMatrix<T>, b: &DenseMatrix<T>) -> Result<DenseMatrix<T>, MatrixError> {
  zip_cells("add", a, b, |x, y| x + y)
}

pub fn subtract<T: Scalar>(
  a: &DenseMatrix<T>,
  b: &DenseMatrix<T>,
) -> Result<DenseMatrix<T>, MatrixError> {
  zip_cells("subtract", a, b, |x, y| x - y)
}

impl<T: Scalar> DenseMatrix<T> {
  pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
    add(self, other)
  }

  pub fn subtract(&self, other: &Self) -> Result<Self, MatrixError> {
    subtract(self, other)
  }
}
