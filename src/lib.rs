//! A small linear algebra toolkit for fixed-size numeric data.
//!
//! This library provides three value types: [`Vector`] (2 to 4 elements in the common case, any
//! `N` for the generic operations), [`Segment2`] (an oriented 2D line segment), and [`Matrix`]
//! (a small row-major grid). All of them are plain `Copy` values with no shared state, so using
//! them from multiple threads needs no synchronization beyond the usual aliasing rules.
//!
//! # Mixing element types
//!
//! The distinguishing feature is that the arithmetic operators accept operands whose element
//! types differ. The element type of the result is selected by the [`Promote`] table at compile
//! time:
//!
//! ```
//! use smallmath::{vec2, Vector};
//!
//! let ints = vec2(1i32, 2);
//! let floats = vec2(0.5f64, 0.25);
//! let sum: Vector<f64, 2> = ints + floats;
//! assert_eq!(sum, vec2(1.5, 2.25));
//! ```
//!
//! See the [`promote`] module docs for the exact rule. Element values are converted with
//! truncating `as`-style casts, and the only other way to change an element type is the explicit
//! [`Vector::cast`] (and its segment counterpart) — there are no implicit conversions.
//!
//! # Mixing lengths
//!
//! Vectors of different lengths (2 to 4) can also be combined. The result has the length of the
//! longer operand: indices covered by both operands are combined with the operator, the rest are
//! carried over from the longer operand unchanged (aside from element-type conversion):
//!
//! ```
//! use smallmath::{vec2, vec4};
//!
//! assert_eq!(vec2(1, 2) + vec4(10, 20, 30, 40), vec4(11, 22, 30, 40));
//! ```
//!
//! The shorter operand is *not* zero-padded; with zero padding, multiplying by a shorter vector
//! would wipe out the carried elements.
//!
//! # Goals & Non-Goals
//!
//! - Vector and matrix dimensions are const generics; dynamically-sized containers are out of
//!   scope.
//! - Only a single, row-major, unpadded data layout for matrices; the matrix type exists for the
//!   matrix-vector product and the named 2D factories, not for general linear algebra (no
//!   matrix-matrix product, inversion, or solving).
//! - Be generic over the element type, but only over the ten built-in numeric types the
//!   [`Promote`] table covers; non-`Copy` numeric types (eg. "big decimals") are not supported.
//! - No SIMD and no claims about numeric error bounds: magnitudes and distances are simply
//!   computed in [`f64`].

mod matrix;
pub mod promote;
mod segment;
mod traits;
mod vector;

pub use matrix::*;
pub use promote::*;
pub use segment::*;
pub use traits::*;
pub use vector::*;
