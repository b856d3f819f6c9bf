//! __numarray__ is a small dense linear-algebra library built around two
//! containers, a rank-1 [`Vector`](crate::algebra::Vector) and a rank-2
//! [`Matrix`](crate::algebra::Matrix), that share a common numeric-array
//! capability and validate every operand shape before any arithmetic is
//! performed.
//!
//! Containers are generic over a numeric element type implementing
//! [`ScalarT`](crate::algebra::ScalarT), with implementations provided for
//! `i32`, `i64`, `f32` and `f64`.  All arithmetic is strict: operand shapes
//! must match exactly (no broadcasting), failures are reported as typed
//! [`ArrayError`](crate::algebra::ArrayError) values, and operations never
//! mutate their operands.
//!
//! # Example
//!
//! ```
//! use numarray::algebra::*;
//!
//! let a = Vector::new(vec![1, 2, 3]);
//! let b = Vector::new(vec![4, 5, 6]);
//! let c = a.add(&b).unwrap();
//! assert_eq!(c, Vector::new(vec![5, 7, 9]));
//! ```

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod render;
pub mod timers;
