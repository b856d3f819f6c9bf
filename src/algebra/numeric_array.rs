use super::{checks, matmul, ArrayError, DenseArray, ErrorKind, Matrix, ScalarT, ShapedArray, SliceOps, Vector};
use enum_dispatch::enum_dispatch;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The uniform numeric-array capability.
///
/// Algorithms that work on "anything shaped like a numeric array" hold a
/// `NumericArray` and use its shape introspection, positional access and
/// arithmetic without caring which rank is underneath.  A [`Vector`] of
/// length `n` is treated as the degenerate `1 x n` case throughout, so
/// elementwise operations accept a vector and a single-row matrix as
/// same-shaped operands.
///
/// All arithmetic follows strict shape matching and returns a freshly
/// allocated result carrying the left operand's variant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[enum_dispatch(ShapedArray)]
pub enum NumericArray<T: ScalarT> {
    Vector(Vector<T>),
    Matrix(Matrix<T>),
}

impl<T> NumericArray<T>
where
    T: ScalarT,
{
    /// Checked positional read; a vector is addressed as row zero.
    pub fn get(&self, row: usize, col: usize) -> Result<T, ArrayError> {
        checks::index_in_range(row, self.nrows(), "row index out of range")?;
        checks::index_in_range(col, self.ncols(), "column index out of range")?;
        Ok(self[(row, col)])
    }

    /// Checked positional write.  Mutates only this container.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), ArrayError> {
        checks::index_in_range(row, self.nrows(), "row index out of range")?;
        checks::index_in_range(col, self.ncols(), "column index out of range")?;
        let lidx = self.index_linear((row, col));
        match self {
            Self::Vector(v) => v.data_mut()[lidx] = value,
            Self::Matrix(m) => m.data_mut()[lidx] = value,
        }
        Ok(())
    }

    /// Elementwise sum under strict shape equality.
    pub fn add(&self, other: &Self) -> Result<Self, ArrayError> {
        self.check_same_shape(other, "operands differ in shape")?;
        Ok(self.rebuild(self.data().zip_map(other.data(), |x, y| x + y)))
    }

    /// Elementwise difference under strict shape equality.
    pub fn subtract(&self, other: &Self) -> Result<Self, ArrayError> {
        self.check_same_shape(other, "operands differ in shape")?;
        Ok(self.rebuild(self.data().zip_map(other.data(), |x, y| x - y)))
    }

    /// Elementwise quotient under strict shape equality.  The divisor is
    /// scanned for zero elements before any cell is computed.
    pub fn divide(&self, other: &Self) -> Result<Self, ArrayError> {
        self.check_same_shape(other, "operands differ in shape")?;
        checks::is_true(
            !other.data().contains_zero(),
            ErrorKind::DivisionByZero,
            "divisor contains a zero element",
        )?;
        Ok(self.rebuild(self.data().zip_map(other.data(), |x, y| x / y)))
    }

    /// Matrix product over shapes: requires `self.ncols() == other.nrows()`,
    /// produces `(self.nrows(), other.ncols())`.  A vector left operand
    /// yields a vector, since its single row fixes the result to one row.
    pub fn multiply(&self, other: &Self) -> Result<Self, ArrayError> {
        checks::equal_dims(
            self.ncols(),
            other.nrows(),
            ErrorKind::ShapeMismatch,
            "inner dimensions do not agree",
        )?;
        let data = matmul(self, other);
        match self {
            Self::Vector(_) => Ok(Vector::new(data).into()),
            Self::Matrix(_) => Ok(Matrix::from_parts(self.nrows(), other.ncols(), data).into()),
        }
    }

    // strict shape equality across variants; a vector and a single-row
    // matrix of equal column count are the same shape
    fn check_same_shape(&self, other: &Self, msg: &str) -> Result<(), ArrayError> {
        match (self, other) {
            (Self::Vector(a), Self::Vector(b)) => checks::same_length(a.data(), b.data(), msg),
            (Self::Matrix(a), Self::Matrix(b)) => checks::same_shape(a, b, msg),
            (Self::Vector(v), Self::Matrix(m)) | (Self::Matrix(m), Self::Vector(v)) => {
                checks::equal_dims(m.nrows(), 1, ErrorKind::ShapeMismatch, msg)?;
                checks::columns_match(v.data(), m, msg)
            }
        }
    }

    // fresh container with this operand's variant and shape
    fn rebuild(&self, data: Vec<T>) -> Self {
        match self {
            Self::Vector(_) => Vector::new(data).into(),
            Self::Matrix(m) => Matrix::from_parts(m.nrows(), m.ncols(), data).into(),
        }
    }

    /// Storage consistency check used after deserialization.
    pub(crate) fn check_storage(&self) -> Result<(), ArrayError> {
        match self {
            // a vector's length is its shape
            Self::Vector(_) => Ok(()),
            Self::Matrix(m) => {
                checks::positive(
                    m.nrows(),
                    ErrorKind::InvalidArgument,
                    "matrix requires at least one row",
                )?;
                checks::positive(
                    m.ncols(),
                    ErrorKind::InvalidArgument,
                    "matrix requires at least one column",
                )?;
                checks::equal_dims(
                    m.data().len(),
                    m.nrows() * m.ncols(),
                    ErrorKind::InvalidArgument,
                    "storage length does not match matrix dimensions",
                )
            }
        }
    }
}

impl<T: ScalarT> DenseArray for NumericArray<T> {
    type T = T;
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        match self {
            Self::Vector(v) => v.index_linear(idx),
            Self::Matrix(m) => m.index_linear(idx),
        }
    }
    fn data(&self) -> &[T] {
        match self {
            Self::Vector(v) => v.data(),
            Self::Matrix(m) => m.data(),
        }
    }
}

impl<T: ScalarT> Index<(usize, usize)> for NumericArray<T> {
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        let lidx = self.index_linear(idx);
        &self.data()[lidx]
    }
}

impl<T: ScalarT> std::fmt::Display for NumericArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Vector(v) => std::fmt::Display::fmt(v, f),
            Self::Matrix(m) => std::fmt::Display::fmt(m, f),
        }
    }
}
