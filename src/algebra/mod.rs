//! Dense numeric containers and the validation layer that guards them.

mod array_traits;
mod error_types;
mod matrix;
mod numeric_array;
mod ops;
mod scalars;
mod vecmath;
mod vector;

pub mod checks;

pub use array_traits::*;
pub use error_types::*;
pub use matrix::*;
pub use numeric_array::*;
pub use scalars::*;
pub use vector::*;

pub(crate) use ops::*;
pub(crate) use vecmath::*;

#[cfg(test)]
mod tests;
