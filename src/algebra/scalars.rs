use num_traits::{Num, NumAssign, NumCast};
use std::fmt::{Debug, Display};

/// Main trait for numeric element types used in the containers.
///
/// All container elements are represented internally as values implementing
/// `ScalarT`, with implementations provided for the `i32`, `i64`, `f32` and
/// `f64` native types.  The trait relies on [`num_traits`](num_traits) for
/// most of its constituent bounds, so other numeric types can be supported by
/// satisfying the same bounds and supplying a zero test.
pub trait ScalarT:
    'static + Send + Copy + Num + NumAssign + NumCast + PartialOrd + Default + Debug + Display
{
    /// Zero test used to guard elementwise division.
    ///
    /// Integer types compare exactly against zero.  Floating point types
    /// compare against a machine-epsilon tolerance rather than testing for
    /// exact equality.
    fn is_zero_value(&self) -> bool;
}

macro_rules! impl_scalar_int {
    ($($ty:ty),*) => {$(
        impl ScalarT for $ty {
            #[inline]
            fn is_zero_value(&self) -> bool {
                *self == 0
            }
        }
    )*};
}

macro_rules! impl_scalar_float {
    ($($ty:ty),*) => {$(
        impl ScalarT for $ty {
            #[inline]
            fn is_zero_value(&self) -> bool {
                self.abs() < <$ty>::EPSILON
            }
        }
    )*};
}

impl_scalar_int!(i32, i64);
impl_scalar_float!(f32, f64);
