//! Arithmetic on the dense containers.
//!
//! Every operation validates its operands through [`checks`] first and then
//! allocates a fresh result.  Operands are never mutated, so a failure leaves
//! both inputs untouched and results can be chained safely.

use super::{checks, ArrayError, DenseArray, ErrorKind, Matrix, ScalarT, ShapedArray, SliceOps, Vector};
use num_traits::Zero;

impl<T> Vector<T>
where
    T: ScalarT,
{
    /// Elementwise sum.  Operands must have equal length.
    pub fn add(&self, other: &Self) -> Result<Self, ArrayError> {
        checks::same_length(&self.data, &other.data, "vector operands differ in length")?;
        Ok(Self::new(self.data.zip_map(&other.data, |x, y| x + y)))
    }

    /// Elementwise difference.  Operands must have equal length.
    pub fn subtract(&self, other: &Self) -> Result<Self, ArrayError> {
        checks::same_length(&self.data, &other.data, "vector operands differ in length")?;
        Ok(Self::new(self.data.zip_map(&other.data, |x, y| x - y)))
    }

    /// Elementwise quotient.  Operands must have equal length and the divisor
    /// must contain no zero element; integer division truncates toward zero.
    pub fn divide(&self, other: &Self) -> Result<Self, ArrayError> {
        checks::same_length(&self.data, &other.data, "vector operands differ in length")?;
        checks::is_true(
            !other.data.contains_zero(),
            ErrorKind::DivisionByZero,
            "divisor contains a zero element",
        )?;
        Ok(Self::new(self.data.zip_map(&other.data, |x, y| x / y)))
    }

    /// Product of this vector, taken as a single row, with a matrix.
    ///
    /// Requires `self.len() == other.nrows()`; the result has `other.ncols()`
    /// elements.
    pub fn multiply(&self, other: &Matrix<T>) -> Result<Self, ArrayError> {
        checks::equal_dims(
            self.ncols(),
            other.nrows(),
            ErrorKind::ShapeMismatch,
            "inner dimensions do not agree",
        )?;
        Ok(Self::new(matmul(self, other)))
    }

    /// Dot product.  Operands must have equal length.
    pub fn dot(&self, other: &Self) -> Result<T, ArrayError> {
        checks::same_length(&self.data, &other.data, "vector operands differ in length")?;
        Ok(self.data.dot(&other.data))
    }
}

impl<T> Matrix<T>
where
    T: ScalarT,
{
    /// Elementwise sum.  Operands must have identical shape.
    pub fn add(&self, other: &Self) -> Result<Self, ArrayError> {
        checks::same_shape(self, other, "matrix operands differ in shape")?;
        Ok(Self::from_parts(
            self.m,
            self.n,
            self.data.zip_map(&other.data, |x, y| x + y),
        ))
    }

    /// Elementwise difference.  Operands must have identical shape.
    pub fn subtract(&self, other: &Self) -> Result<Self, ArrayError> {
        checks::same_shape(self, other, "matrix operands differ in shape")?;
        Ok(Self::from_parts(
            self.m,
            self.n,
            self.data.zip_map(&other.data, |x, y| x - y),
        ))
    }

    /// Elementwise quotient with the same preconditions as [`Matrix::add`],
    /// plus a zero scan of the divisor.
    pub fn divide(&self, other: &Self) -> Result<Self, ArrayError> {
        checks::same_shape(self, other, "matrix operands differ in shape")?;
        checks::is_true(
            !other.data.contains_zero(),
            ErrorKind::DivisionByZero,
            "divisor contains a zero element",
        )?;
        Ok(Self::from_parts(
            self.m,
            self.n,
            self.data.zip_map(&other.data, |x, y| x / y),
        ))
    }

    /// Matrix product.  Requires `self.ncols() == other.nrows()`; the result
    /// has shape `(self.nrows(), other.ncols())`.
    pub fn multiply(&self, other: &Self) -> Result<Self, ArrayError> {
        checks::equal_dims(
            self.ncols(),
            other.nrows(),
            ErrorKind::ShapeMismatch,
            "inner dimensions do not agree",
        )?;
        Ok(Self::from_parts(self.m, other.n, matmul(self, other)))
    }
}

// C = A*B with dimensions validated by the caller.  Output is column major,
// computed cell by cell as the row/column dot product.
pub(crate) fn matmul<A, B>(a: &A, b: &B) -> Vec<A::T>
where
    A: DenseArray,
    B: DenseArray<T = A::T>,
    A::T: ScalarT,
{
    let (m, k) = a.size();
    let n = b.ncols();
    let mut out = Vec::with_capacity(m * n);
    for j in 0..n {
        for i in 0..m {
            let mut acc = A::T::zero();
            for p in 0..k {
                acc += a[(i, p)] * b[(p, j)];
            }
            out.push(acc);
        }
    }
    out
}

#[test]
fn test_matmul_rectangular() {
    let a = Matrix::from(&[[1., 2., 3.], [4., 5., 6.]]);
    let b = Matrix::from(&[[7., 8.], [9., 10.], [11., 12.]]);
    let c = a.multiply(&b).unwrap();

    assert_eq!(c, Matrix::from(&[[58., 64.], [139., 154.]]));
}
