use serde::{Deserialize, Serialize};

use crate::*;

/// The angle a skew or rotation uses when the caller does not give one.
pub const DEFAULT_TRANSFORM_ANGLE: f64 = 45.;

/// One of the supported operations together with the parameters it needs.
///
/// Binary operations read both operands, unary ones only read the first.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Operation<T> {
  Add,
  Subtract,
  Multiply,
  Determinant,
  Transpose,
  Skew { angle: Deg<T>, axis: SkewAxis },
  Rotate { angle: Deg<T> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutput<T> {
  Matrix(DenseMatrix<T>),
  Scalar(T),
}

impl<T: Scalar> OperationOutput<T> {
  pub fn as_matrix(&self) -> Option<&DenseMatrix<T>> {
    match self {
      OperationOutput::Matrix(m) => Some(m),
      OperationOutput::Scalar(_) => None,
    }
  }

  pub fn as_scalar(&self) -> Option<T> {
    match self {
      OperationOutput::Matrix(_) => None,
      OperationOutput::Scalar(v) => Some(*v),
    }
  }
}

impl<T: Scalar> Operation<T> {
  pub const NAMES: [&'static str; 7] = [
    "add",
    "subtract",
    "multiply",
    "determinant",
    "transpose",
    "skew",
    "rotate",
  ];

  /// Parse an operation by name, case insensitive.
  ///
  /// Skew and rotate fall back to a 45 degree angle, skew to the x axis, when
  /// the parameter is missing. Parameters the operation does not use are ignored.
  pub fn from_name(
    name: &str,
    angle: Option<Deg<T>>,
    axis: Option<SkewAxis>,
  ) -> Result<Self, MatrixError> {
    let angle_or_default = || angle.unwrap_or_else(Self::default_angle);
    let op = match name.trim().to_ascii_lowercase().as_str() {
      "add" => Operation::Add,
      "subtract" => Operation::Subtract,
      "multiply" => Operation::Multiply,
      "determinant" => Operation::Determinant,
      "transpose" => Operation::Transpose,
      "skew" => Operation::Skew {
        angle: angle_or_default(),
        axis: axis.unwrap_or_default(),
      },
      "rotate" => Operation::Rotate {
        angle: angle_or_default(),
      },
      _ => return Err(MatrixError::UnknownOperation(name.to_string())),
    };
    Ok(op)
  }

  fn default_angle() -> Deg<T> {
    // 45 is exact in every float type
    Deg::by(<T as num_traits::NumCast>::from(DEFAULT_TRANSFORM_ANGLE).unwrap_or_else(T::zero))
  }

  pub fn name(&self) -> &'static str {
    match self {
      Operation::Add => "add",
      Operation::Subtract => "subtract",
      Operation::Multiply => "multiply",
      Operation::Determinant => "determinant",
      Operation::Transpose => "transpose",
      Operation::Skew { .. } => "skew",
      Operation::Rotate { .. } => "rotate",
    }
  }

  pub fn is_binary(&self) -> bool {
    matches!(
      self,
      Operation::Add | Operation::Subtract | Operation::Multiply
    )
  }

  pub fn apply(
    &self,
    a: &DenseMatrix<T>,
    b: &DenseMatrix<T>,
  ) -> Result<OperationOutput<T>, MatrixError> {
    if self.is_binary() {
      log::debug!("{} {} by {}", self.name(), a.shape(), b.shape());
    } else {
      log::debug!("{} {}", self.name(), a.shape());
    }

    let output = match *self {
      Operation::Add => OperationOutput::Matrix(add(a, b)?),
      Operation::Subtract => OperationOutput::Matrix(subtract(a, b)?),
      Operation::Multiply => OperationOutput::Matrix(multiply(a, b)?),
      Operation::Determinant => OperationOutput::Scalar(determinant(a)?),
      Operation::Transpose => OperationOutput::Matrix(transpose(a)),
      Operation::Skew { angle, axis } => OperationOutput::Matrix(skew(a, angle, axis)),
      Operation::Rotate { angle } => OperationOutput::Matrix(rotate(a, angle)),
    };
    Ok(output)
  }
}
