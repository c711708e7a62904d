//! Core compute primitives (Vector, Matrix).
//!
//! These fixed-shape types replace the implicit broadcasting of dynamic
//! array libraries: a matrix's width is set at construction and checked on
//! every operation.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
