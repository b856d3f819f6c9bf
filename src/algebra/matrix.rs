use super::{checks, ArrayError, DenseArray, ErrorKind, ScalarT, ShapedArray};
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense rank-2 numeric container with column major storage.
///
/// Matrices are rectangular by construction: every row has exactly
/// `ncols()` elements, and both dimensions are at least one and fixed for
/// the lifetime of the value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix<T = f64> {
    /// number of rows
    pub(crate) m: usize,
    /// number of columns
    pub(crate) n: usize,
    /// vector of data in column major format
    pub(crate) data: Vec<T>,
}

impl<T> Matrix<T>
where
    T: ScalarT,
{
    /// Builds a matrix from nested rows.
    ///
    /// The input must be non-empty and rectangular; jagged rows are rejected
    /// with a shape mismatch before any storage is allocated.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, ArrayError> {
        checks::non_empty(rows, ErrorKind::InvalidArgument, "matrix requires at least one row")?;
        checks::non_empty(
            &rows[0],
            ErrorKind::InvalidArgument,
            "matrix rows must be non-empty",
        )?;
        checks::rectangular(rows, "matrix rows differ in length")?;

        let (m, n) = (rows.len(), rows[0].len());
        let mut data = Vec::with_capacity(m * n);
        for j in 0..n {
            for i in 0..m {
                data.push(rows[i][j]);
            }
        }
        Ok(Self { m, n, data })
    }

    /// Builds a matrix from column major data of length `m * n`.
    pub fn from_slice(size: (usize, usize), src: &[T]) -> Result<Self, ArrayError> {
        let (m, n) = size;
        checks::positive(m, ErrorKind::InvalidArgument, "matrix requires at least one row")?;
        checks::positive(n, ErrorKind::InvalidArgument, "matrix requires at least one column")?;
        checks::equal_dims(
            src.len(),
            m * n,
            ErrorKind::ShapeMismatch,
            "data length does not match matrix dimensions",
        )?;
        Ok(Self {
            m,
            n,
            data: src.to_vec(),
        })
    }

    pub fn zeros(size: (usize, usize)) -> Result<Self, ArrayError> {
        let (m, n) = size;
        checks::positive(m, ErrorKind::InvalidArgument, "matrix requires at least one row")?;
        checks::positive(n, ErrorKind::InvalidArgument, "matrix requires at least one column")?;
        Ok(Self {
            m,
            n,
            data: vec![T::zero(); m * n],
        })
    }

    pub fn identity(n: usize) -> Result<Self, ArrayError> {
        let mut mat = Self::zeros((n, n))?;
        for i in 0..n {
            mat[(i, i)] = T::one();
        }
        Ok(mat)
    }

    pub(crate) fn from_parts(m: usize, n: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(m * n, data.len());
        Self { m, n, data }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Checked positional read.
    pub fn get(&self, row: usize, col: usize) -> Result<T, ArrayError> {
        checks::index_in_range(row, self.m, "matrix row index out of range")?;
        checks::index_in_range(col, self.n, "matrix column index out of range")?;
        Ok(self[(row, col)])
    }

    /// Checked positional write.  Mutates only this container.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), ArrayError> {
        checks::index_in_range(row, self.m, "matrix row index out of range")?;
        checks::index_in_range(col, self.n, "matrix column index out of range")?;
        self[(row, col)] = value;
        Ok(())
    }

    /// Copy of row `i`.  Rows are not contiguous in column major storage.
    pub fn row(&self, i: usize) -> Vec<T> {
        assert!(i < self.m);
        (0..self.n).map(|j| self[(i, j)]).collect()
    }

    pub fn col_slice(&self, col: usize) -> &[T] {
        assert!(col < self.n);
        &self.data[(col * self.m)..(col + 1) * self.m]
    }

    /// Exchanges rows `i` and `j` in place.
    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<(), ArrayError> {
        checks::index_in_range(i, self.m, "matrix row index out of range")?;
        checks::index_in_range(j, self.m, "matrix row index out of range")?;
        for col in 0..self.n {
            let (a, b) = (self.index_linear((i, col)), self.index_linear((j, col)));
            self.data.swap(a, b);
        }
        Ok(())
    }
}

impl<T, const R: usize, const C: usize> From<&[[T; C]; R]> for Matrix<T>
where
    T: ScalarT,
{
    fn from(rows: &[[T; C]; R]) -> Self {
        assert!(R > 0 && C > 0);
        let mut data = Vec::with_capacity(R * C);
        for j in 0..C {
            for i in 0..R {
                data.push(rows[i][j]);
            }
        }
        Self { m: R, n: C, data }
    }
}

impl<T: ScalarT> ShapedArray for Matrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

impl<T: ScalarT> DenseArray for Matrix<T> {
    type T = T;
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + self.m * idx.1
    }
    fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T: ScalarT> Index<(usize, usize)> for Matrix<T> {
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        &self.data[self.index_linear(idx)]
    }
}

impl<T: ScalarT> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut T {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T: ScalarT> std::fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_array(self, f)
    }
}

pub(crate) fn display_array<M>(m: &M, f: &mut std::fmt::Formatter) -> std::fmt::Result
where
    M: DenseArray,
    M::T: std::fmt::Display,
{
    writeln!(f)?;
    for i in 0..m.nrows() {
        write!(f, "[ ")?;
        for j in 0..m.ncols() {
            write!(f, " {}", m[(i, j)])?;
        }
        writeln!(f, " ]")?;
    }
    Ok(())
}
