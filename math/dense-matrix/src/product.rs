use crate::*;

/// Standard row by column product, every cell summed from zero in ascending
/// inner index so the result is reproducible.
pub fn multiply<T: Scalar>(
  a: &DenseMatrix<T>,
  b: &DenseMatrix<T>,
) -> Result<DenseMatrix<T>, MatrixError> {
  ensure_multipliable(a, b)?;
  let inner = a.cols();
  Ok(DenseMatrix::from_fn_unchecked(a.rows(), b.cols(), |i, j| {
    (0..inner).fold(T::zero(), |sum, k| sum + a[(i, k)] * b[(k, j)])
  }))
}

impl<T: Scalar> DenseMatrix<T> {
  pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
    multiply(self, other)
  }
}

#[test]
fn mul() {
  let a = Matrix::from_rows(vec![vec![1., 2.], vec![3., 4.]]).unwrap();
  let b = Matrix::from_rows(vec![vec![5., 6.], vec![7., 8.]]).unwrap();
  assert_eq!(
    multiply(&a, &b).unwrap().to_rows(),
    vec![vec![19., 22.], vec![43., 50.]]
  );
}

#[test]
fn mul_rectangular() {
  let a = Matrix::from_rows(vec![vec![1., 2., 3.], vec![4., 5., 6.]]).unwrap();
  let b = Matrix::from_rows(vec![vec![7.], vec![8.], vec![9.]]).unwrap();
  let r = multiply(&a, &b).unwrap();
  assert_eq!(r.shape(), Shape::new(2, 1));
  assert_eq!(r.to_rows(), vec![vec![50.], vec![122.]]);

  let r = multiply(&b, &Matrix::from_rows(vec![vec![1., -1.]]).unwrap()).unwrap();
  assert_eq!(r.shape(), Shape::new(3, 2));
  assert_eq!(r.row(2), Some(&[9., -9.][..]));
}

#[test]
fn mul_inner_mismatch() {
  let a = Matrix::zeros(2, 3).unwrap();
  let b = Matrix::zeros(2, 3).unwrap();
  assert_eq!(
    multiply(&a, &b),
    Err(MatrixError::DimensionMismatch {
      operation: "multiply",
      conflict: DimensionConflict::Inner,
      left: Shape::new(2, 3),
      right: Shape::new(2, 3),
    })
  );
}

#[test]
fn mul_identity() {
  use rand::Rng;
  let mut rng = rand::thread_rng();
  for n in 1..7 {
    let m = Matrix::from_fn(n, n, |_, _| rng.gen_range(-1000.0..1000.0)).unwrap();
    let identity = Matrix::identity(n).unwrap();
    assert_eq!(multiply(&m, &identity).unwrap(), m);
    assert_eq!(multiply(&identity, &m).unwrap(), m);
  }
}

#[test]
fn mul_matches_cgmath() {
  let a = [[1., -2., 3.5, 0.], [4., 0.25, -6., 1.], [7., 8., 9., -1.], [0., 2., -3., 5.]];
  let b = [[2., 0., 1., 3.], [-1., 4., 0.5, 2.], [3., -2., 1., 0.], [1., 1., -1., 6.]];

  let to_cgmath = |m: [[f64; 4]; 4]| {
    let col = |j: usize| cgmath::vec4(m[0][j], m[1][j], m[2][j], m[3][j]);
    cgmath::Matrix4::from_cols(col(0), col(1), col(2), col(3))
  };
  let to_dense = |m: [[f64; 4]; 4]| Matrix::from_rows(m.iter().map(|r| r.to_vec()).collect()).unwrap();

  let cgmath_r = to_cgmath(a) * to_cgmath(b);
  let math_r = multiply(&to_dense(a), &to_dense(b)).unwrap();

  for i in 0..4 {
    for j in 0..4 {
      // cgmath indexes column first
      assert!((cgmath_r[j][i] - math_r[(i, j)]).abs() < 1e-12);
    }
  }
}
