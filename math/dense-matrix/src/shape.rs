//! Shape checks run before any arithmetic is attempted.

use crate::*;

/// Add and subtract need operands of the same shape.
pub fn ensure_same_shape<T: Scalar>(
  operation: &'static str,
  left: &DenseMatrix<T>,
  right: &DenseMatrix<T>,
) -> Result<(), MatrixError> {
  let conflict = if left.rows() != right.rows() {
    DimensionConflict::Rows
  } else if left.cols() != right.cols() {
    DimensionConflict::Columns
  } else {
    return Ok(());
  };
  Err(MatrixError::DimensionMismatch {
    operation,
    conflict,
    left: left.shape(),
    right: right.shape(),
  })
}

/// A product needs the left column count to match the right row count.
pub fn ensure_multipliable<T: Scalar>(
  left: &DenseMatrix<T>,
  right: &DenseMatrix<T>,
) -> Result<(), MatrixError> {
  if left.cols() == right.rows() {
    return Ok(());
  }
  Err(MatrixError::DimensionMismatch {
    operation: "multiply",
    conflict: DimensionConflict::Inner,
    left: left.shape(),
    right: right.shape(),
  })
}

pub fn ensure_square<T: Scalar>(m: &DenseMatrix<T>) -> Result<(), MatrixError> {
  if m.is_square() {
    Ok(())
  } else {
    Err(MatrixError::NotSquare {
      rows: m.rows(),
      cols: m.cols(),
    })
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn zeros(rows: usize, cols: usize) -> Matrix {
    Matrix::zeros(rows, cols).unwrap()
  }

  #[test]
  fn same_shape() {
    assert!(ensure_same_shape("add", &zeros(2, 3), &zeros(2, 3)).is_ok());

    let err = ensure_same_shape("add", &zeros(2, 3), &zeros(3, 3)).unwrap_err();
    assert_eq!(
      err,
      MatrixError::DimensionMismatch {
        operation: "add",
        conflict: DimensionConflict::Rows,
        left: Shape::new(2, 3),
        right: Shape::new(3, 3),
      }
    );
    assert_eq!(err.to_string(), "add requires equal row counts, got 2x3 and 3x3");

    let err = ensure_same_shape("subtract", &zeros(2, 3), &zeros(2, 1)).unwrap_err();
    assert_eq!(
      err.to_string(),
      "subtract requires equal column counts, got 2x3 and 2x1"
    );
  }

  #[test]
  fn multipliable() {
    assert!(ensure_multipliable(&zeros(2, 3), &zeros(3, 5)).is_ok());
    let err = ensure_multipliable(&zeros(2, 3), &zeros(2, 3)).unwrap_err();
    assert_eq!(
      err.to_string(),
      "multiply requires the left column count to equal the right row count, got 2x3 and 2x3"
    );
  }

  #[test]
  fn square() {
    assert!(ensure_square(&zeros(1, 1)).is_ok());
    assert!(ensure_square(&zeros(4, 4)).is_ok());
    let err = ensure_square(&zeros(2, 3)).unwrap_err();
    assert_eq!(err, MatrixError::NotSquare { rows: 2, cols: 3 });
    assert_eq!(err.to_string(), "matrix must be square, got 2x3");
  }
}
