//! Core compute primitives (Vector, Matrix).
//!
//! Both types own their storage exclusively; `clone` is a deep copy.

mod matrix;
mod validate;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
