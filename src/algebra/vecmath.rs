use super::ScalarT;
use std::iter::zip;

/// Elementwise kernels on slices of [`ScalarT`](crate::algebra::ScalarT).
///
/// These back the container arithmetic.  They allocate fresh output rather
/// than mutating in place, so a failed operation can never leave a partially
/// written operand behind.
pub(crate) trait SliceOps {
    type T;

    /// Combine two equal-length slices elementwise into a new vector.
    fn zip_map(&self, y: &Self, op: impl Fn(Self::T, Self::T) -> Self::T) -> Vec<Self::T>;

    /// Dot product.
    fn dot(&self, y: &Self) -> Self::T;

    /// True iff any element tests as zero.
    fn contains_zero(&self) -> bool;
}

impl<T: ScalarT> SliceOps for [T] {
    type T = T;

    fn zip_map(&self, y: &[T], op: impl Fn(T, T) -> T) -> Vec<T> {
        debug_assert_eq!(self.len(), y.len());
        zip(self, y).map(|(&x, &y)| op(x, y)).collect()
    }

    fn dot(&self, y: &[T]) -> T {
        debug_assert_eq!(self.len(), y.len());
        zip(self, y).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
    }

    fn contains_zero(&self) -> bool {
        self.iter().any(|x| x.is_zero_value())
    }
}
