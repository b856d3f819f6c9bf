//! Precondition checks used before any arithmetic touches storage.
//!
//! Every check is total and side-effect free: it either returns `Ok(())` or
//! a typed [`ArrayError`] built from the caller-supplied message.  Shape and
//! index checks have a fixed failure kind; comparison, emptiness and
//! positivity checks take the kind from the caller.

use super::{ArrayError, ErrorKind, ScalarT, ShapedArray};
use itertools::Itertools;
use num_traits::Zero;

/// Core assertion: fails with `kind` and `msg` unless `condition` holds.
pub fn is_true(condition: bool, kind: ErrorKind, msg: &str) -> Result<(), ArrayError> {
    if condition {
        Ok(())
    } else {
        Err(kind.error(msg))
    }
}

// ---------------------------------------------------------------
// dimension checks

/// Succeeds iff both containers have equal row and column counts.
pub fn same_shape<A, B>(a: &A, b: &B, msg: &str) -> Result<(), ArrayError>
where
    A: ShapedArray,
    B: ShapedArray,
{
    is_true(
        a.nrows() == b.nrows() && a.ncols() == b.ncols(),
        ErrorKind::ShapeMismatch,
        msg,
    )
}

/// Succeeds iff two 1-D sequences have equal length.
pub fn same_length<T>(x: &[T], y: &[T], msg: &str) -> Result<(), ArrayError> {
    is_true(x.len() == y.len(), ErrorKind::ShapeMismatch, msg)
}

/// Succeeds iff the vector length equals the matrix column count.
pub fn columns_match<T, M>(v: &[T], m: &M, msg: &str) -> Result<(), ArrayError>
where
    M: ShapedArray,
{
    is_true(v.len() == m.ncols(), ErrorKind::ShapeMismatch, msg)
}

/// Succeeds iff every nested row has the same length as the first.
pub fn rectangular<T>(rows: &[Vec<T>], msg: &str) -> Result<(), ArrayError> {
    is_true(
        rows.iter().map(|r| r.len()).all_equal(),
        ErrorKind::ShapeMismatch,
        msg,
    )
}

/// Succeeds iff `index` lies in `[0, dim)`.
pub fn index_in_range(index: usize, dim: usize, msg: &str) -> Result<(), ArrayError> {
    is_true(index < dim, ErrorKind::IndexOutOfRange, msg)
}

// ---------------------------------------------------------------
// comparison checks

pub fn equal_dims(value: usize, target: usize, kind: ErrorKind, msg: &str) -> Result<(), ArrayError> {
    is_true(value == target, kind, msg)
}

/// Tolerance comparison of two scalars.  Never tests floats for exact
/// equality; the caller chooses `eps`.
pub fn equal_scalar<T: ScalarT>(
    value: T,
    target: T,
    eps: T,
    kind: ErrorKind,
    msg: &str,
) -> Result<(), ArrayError> {
    let diff = if value > target {
        value - target
    } else {
        target - value
    };
    is_true(diff < eps, kind, msg)
}

pub fn smaller_than<V: PartialOrd>(value: V, target: V, kind: ErrorKind, msg: &str) -> Result<(), ArrayError> {
    is_true(value < target, kind, msg)
}

pub fn greater_than<V: PartialOrd>(value: V, target: V, kind: ErrorKind, msg: &str) -> Result<(), ArrayError> {
    is_true(value > target, kind, msg)
}

pub fn geq<V: PartialOrd>(value: V, target: V, kind: ErrorKind, msg: &str) -> Result<(), ArrayError> {
    is_true(value >= target, kind, msg)
}

pub fn leq<V: PartialOrd>(value: V, target: V, kind: ErrorKind, msg: &str) -> Result<(), ArrayError> {
    is_true(value <= target, kind, msg)
}

/// Succeeds iff `value` lies in the inclusive range `[start, end]`.
pub fn between<V: PartialOrd>(
    value: V,
    start: V,
    end: V,
    kind: ErrorKind,
    msg: &str,
) -> Result<(), ArrayError> {
    is_true(value >= start && value <= end, kind, msg)
}

/// Succeeds iff `value` lies in the exclusive range `(start, end)`.
pub fn between_exclusive<V: PartialOrd>(
    value: V,
    start: V,
    end: V,
    kind: ErrorKind,
    msg: &str,
) -> Result<(), ArrayError> {
    is_true(value > start && value < end, kind, msg)
}

// ---------------------------------------------------------------
// emptiness and positivity checks

pub fn empty<T>(s: &[T], kind: ErrorKind, msg: &str) -> Result<(), ArrayError> {
    is_true(s.is_empty(), kind, msg)
}

pub fn non_empty<T>(s: &[T], kind: ErrorKind, msg: &str) -> Result<(), ArrayError> {
    is_true(!s.is_empty(), kind, msg)
}

pub fn positive<V: Zero + PartialOrd>(value: V, kind: ErrorKind, msg: &str) -> Result<(), ArrayError> {
    is_true(value > V::zero(), kind, msg)
}

pub fn non_negative<V: Zero + PartialOrd>(value: V, kind: ErrorKind, msg: &str) -> Result<(), ArrayError> {
    is_true(value >= V::zero(), kind, msg)
}
