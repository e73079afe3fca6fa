use std::fmt;

use crate::Shape;

/// Which dimensions of two operands disagreed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionConflict {
  Rows,
  Columns,
  /// the left operand's column count against the right operand's row count
  Inner,
}

impl fmt::Display for DimensionConflict {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DimensionConflict::Rows => write!(f, "equal row counts"),
      DimensionConflict::Columns => write!(f, "equal column counts"),
      DimensionConflict::Inner => {
        write!(f, "the left column count to equal the right row count")
      }
    }
  }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
  #[error("{operation} requires {conflict}, got {left} and {right}")]
  DimensionMismatch {
    operation: &'static str,
    conflict: DimensionConflict,
    left: Shape,
    right: Shape,
  },
  #[error("matrix must be square, got {rows}x{cols}")]
  NotSquare { rows: usize, cols: usize },
  #[error("matrix must have at least one row and one column")]
  Empty,
  #[error("row {row} has {found} cells, expected {expected}")]
  Ragged {
    row: usize,
    expected: usize,
    found: usize,
  },
  #[error("a {rows}x{cols} matrix needs {} cells, got {found}", .rows * .cols)]
  CellCount {
    rows: usize,
    cols: usize,
    found: usize,
  },
  #[error("cell ({row}, {col}) is outside of a {shape} matrix")]
  IndexOutOfBounds { row: usize, col: usize, shape: Shape },
  #[error("unknown skew axis {0:?}, expected \"x\" or \"y\"")]
  UnknownSkewAxis(String),
  #[error("unknown operation {0:?}")]
  UnknownOperation(String),
}
