use serde::{Deserialize, Serialize};

use crate::Scalar;

/// A value wrapper marking the inner scalar as an angle in degrees.
///
/// Transforms accept angles in this unit only, so a radian value can not be
/// passed by accident. Conversion goes through [`Deg::to_rad`].
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deg<T> {
  pub value: T,
}

impl<T: Scalar> Deg<T> {
  pub fn by(value: T) -> Self {
    Deg { value }
  }

  /// `value * π / 180`, multiplied before dividing.
  pub fn to_rad(&self) -> T {
    self.value * T::PI() / T::c180()
  }

  pub fn from_rad(rad: T) -> Self {
    Self::by(rad * T::c180() / T::PI())
  }
}

impl<T: Scalar> From<T> for Deg<T> {
  fn from(value: T) -> Self {
    Self::by(value)
  }
}
